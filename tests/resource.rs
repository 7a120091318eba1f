use resql::prelude::*;
use resql::{Clause, extension};
use tokio_util::sync::CancellationToken;

mod common;

use common::articles;

fn build(resource: &ResourceSelectBuilder, query: &Query) -> resql::Result<(String, Vec<Value>)> {
    resource
        .build(&CancellationToken::new(), query, None)?
        .build(Dialect::SQLite)
}

fn text(values: &[&str]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

#[test]
fn test_default_fields() {
    let (sql, params) = build(&articles(), &Query::new()).unwrap();
    assert_eq!(sql, "SELECT * FROM articles");
    assert!(params.is_empty());
}

#[test]
fn test_requested_fields() {
    let query = Query::new().fields("articles", ["id", "title"]);
    let (sql, params) = build(&articles(), &query).unwrap();
    assert_eq!(sql, "SELECT id, title FROM articles");
    assert!(params.is_empty());
}

#[test]
fn test_fields_of_other_resources_are_ignored() {
    let query = Query::new().fields("authors", ["name"]);
    assert_eq!(build(&articles(), &query).unwrap().0, "SELECT * FROM articles");
}

#[test]
fn test_single_filter() {
    let query = Query::new().filter("id", "eq:42");
    let (sql, params) = build(&articles(), &query).unwrap();
    assert_eq!(sql, "SELECT * FROM articles WHERE id = ?");
    assert_eq!(params, text(&["42"]));
}

#[test]
fn test_filters_are_and_joined_in_query_order() {
    let query = Query::new()
        .filter("id", "in:1,2,3,4,5")
        .filter("body", "contains:bitcoin");
    let (sql, params) = build(&articles(), &query).unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM articles WHERE id IN (?,?,?,?,?) AND body LIKE ?"
    );
    assert_eq!(params, text(&["1", "2", "3", "4", "5", "%bitcoin%"]));
}

#[test]
fn test_sorting() {
    let query = Query::new().sort("createdAt", OrderBy::Desc);
    let (sql, _) = build(&articles(), &query).unwrap();
    assert_eq!(sql, "SELECT * FROM articles ORDER BY created_at DESC");

    let query = Query::new()
        .sort("createdAt", OrderBy::Desc)
        .sort("id", OrderBy::Asc);
    let (sql, _) = build(&articles(), &query).unwrap();
    assert_eq!(sql, "SELECT * FROM articles ORDER BY created_at DESC, id ASC");
}

#[test]
fn test_disallowed_select_field() {
    let query = Query::new().fields("articles", ["id", "updatedAt"]);
    let err = build(&articles(), &query).unwrap_err();
    assert!(matches!(
        &err,
        ResqlError::FieldNotAllowed { field, clause: Clause::Select } if field == "updated_at"
    ));
    assert_eq!(
        err.to_string(),
        r#"field "updated_at" not allowed for selection criteria"#
    );
}

#[test]
fn test_untranslatable_select_field() {
    let query = Query::new().fields("articles", ["id", "password"]);
    let err = build(&articles(), &query).unwrap_err();
    assert!(matches!(&err, ResqlError::Translation { entry, .. } if entry == "password"));
}

#[test]
fn test_field_without_filters() {
    let query = Query::new().filter("createdAt", "eq:2024-01-01");
    let err = build(&articles(), &query).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"filters cannot be applied to the field "createdAt""#
    );
}

#[test]
fn test_disallowed_filter_operation() {
    let query = Query::new().filter("id", "like:4%");
    let err = build(&articles(), &query).unwrap_err();
    assert!(matches!(
        &err,
        ResqlError::FilteringNotPermitted { field, operation: Some(op) }
            if field == "id" && op == "like"
    ));
    assert_eq!(
        err.to_string(),
        r#"filter "like" cannot be applied to the field "id""#
    );
}

#[test]
fn test_allowed_but_unregistered_operation() {
    let resource = articles().allow_filtering(AllowedConditions::new().field("id", ["regex"]));
    let err = build(&resource, &Query::new().filter("id", "regex:^4")).unwrap_err();
    assert_eq!(err.to_string(), r#"filter "regex" is not defined"#);
}

#[test]
fn test_constructor_errors_are_returned_verbatim() {
    let query = Query::new().filter("id", "eq");
    let err = build(&articles(), &query).unwrap_err();
    assert!(matches!(err, ResqlError::InvalidArguments { .. }));
    assert!(err.is_client_error());
}

#[test]
fn test_disallowed_sort_field_names_requested_field() {
    let query = Query::new().sort("title", OrderBy::Asc);
    let err = build(&articles(), &query).unwrap_err();
    assert!(matches!(
        &err,
        ResqlError::FieldNotAllowed { field, clause: Clause::Sort } if field == "title"
    ));
    assert_eq!(
        err.to_string(),
        r#"field "title" not allowed for sorting criteria"#
    );
}

#[test]
fn test_always_select_fields() {
    let resource = articles().always_select_fields(["id"]);
    let query = Query::new().fields("articles", ["title", "id", "title"]);
    assert_eq!(
        build(&resource, &query).unwrap().0,
        "SELECT title, id FROM articles"
    );

    let query = Query::new().fields("articles", ["body"]);
    assert_eq!(
        build(&resource, &query).unwrap().0,
        "SELECT body, id FROM articles"
    );
}

#[test]
fn test_always_select_all_fields() {
    let resource = articles().always_select_all_fields(true);
    let query = Query::new().fields("articles", ["id"]);
    assert_eq!(
        build(&resource, &query).unwrap().0,
        "SELECT *, id, title, body, created_at FROM articles"
    );
}

#[test]
fn test_existing_builder_is_extended() {
    let mut existing = SelectBuilder::new();
    existing
        .distinct()
        .r#where(resql::expr::is_null("deleted_at"));

    let builder = articles()
        .build(
            &CancellationToken::new(),
            &Query::new().filter("id", "eq:7"),
            Some(existing),
        )
        .unwrap();
    let (sql, params) = builder.build(Dialect::PostgreSQL).unwrap();
    assert_eq!(
        sql,
        "SELECT DISTINCT * FROM articles WHERE deleted_at IS NULL AND id = $1"
    );
    assert_eq!(params, text(&["7"]));
}

#[test]
fn test_extensions_run_in_order() {
    let resource = articles()
        .extend(limit_offset_pagination(Some(100), None))
        .extend(default_limit(25));

    let (sql, _) = build(&resource, &Query::new()).unwrap();
    assert_eq!(sql, "SELECT * FROM articles LIMIT 25");

    let query = Query::new().page(Page::new().limit("10").offset("30"));
    let (sql, _) = build(&resource, &query).unwrap();
    assert_eq!(sql, "SELECT * FROM articles LIMIT 10 OFFSET 30");

    let query = Query::new().page(Page::new().limit(""));
    let (sql, _) = build(&resource, &query).unwrap();
    assert_eq!(sql, "SELECT * FROM articles LIMIT 25");
}

#[test]
fn test_extension_failure_aborts_build() {
    let resource = articles()
        .extend(extension(|_, _, _| {
            Err(ResqlError::extension("tenant is not resolved"))
        }))
        .extend(default_limit(25));

    let err = build(&resource, &Query::new()).unwrap_err();
    assert_eq!(err.to_string(), "tenant is not resolved");
}

#[test]
fn test_extension_sees_query_and_context() {
    let resource = articles().extend(extension(|ctx, query, builder| {
        if ctx.is_cancelled() {
            return Err(ResqlError::extension("request cancelled"));
        }
        if query.sort.is_empty() {
            builder.order_by_clauses([OrderBy::asc("id")]);
        }
        Ok(())
    }));

    let (sql, _) = build(&resource, &Query::new()).unwrap();
    assert_eq!(sql, "SELECT * FROM articles ORDER BY id ASC");

    let ctx = CancellationToken::new();
    ctx.cancel();
    let err = resource.build(&ctx, &Query::new(), None).unwrap_err();
    assert_eq!(err.to_string(), "request cancelled");
}

#[test]
fn test_custom_parser_and_conditions() {
    let conditions = ConditionMap::with_defaults().insert("between", |field: &str, args: &[&str]| {
        let [low, high] = args else {
            return Err(ResqlError::InvalidArguments {
                operation: "between".into(),
                reason: format!("expected two values, got {}", args.len()),
            });
        };
        resql::expr::and([resql::expr::gte(field, *low), resql::expr::lte(field, *high)])
    });

    let resource = articles()
        .conditions(conditions)
        .parser(DelimitedArgsParser::new('=', "|"))
        .allow_filtering(AllowedConditions::new().field("id", ["between"]));

    let query = Query::new().filter("id", "between=10|20");
    let (sql, params) = build(&resource, &query).unwrap();
    assert_eq!(sql, "SELECT * FROM articles WHERE (id >= ? AND id <= ?)");
    assert_eq!(params, text(&["10", "20"]));
}

#[test]
fn test_build_is_repeatable() {
    let resource = articles();
    let query = Query::new()
        .filter("id", "in:1,2")
        .sort("createdAt", OrderBy::Desc);
    assert_eq!(build(&resource, &query).unwrap(), build(&resource, &query).unwrap());
}

#[test]
fn test_snake_case_resource() {
    let resource = ResourceSelectBuilder::new("articles", SnakeCaseTranslator::new())
        .default_fields(["id"])
        .allow_select_fields(["id", "created_at"])
        .allow_sorting_by_fields(["created_at"]);

    let query = Query::new()
        .fields("articles", ["createdAt"])
        .sort("createdAt", OrderBy::Asc);
    assert_eq!(
        build(&resource, &query).unwrap().0,
        "SELECT created_at FROM articles ORDER BY created_at ASC"
    );
}
