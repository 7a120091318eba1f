#![cfg(feature = "toml")]

use resql::prelude::*;
use resql::{ConfigError, ResourceConfig};
use tokio_util::sync::CancellationToken;

const ARTICLES: &str = r#"
resource = "articles"
default_fields = ["id", "title"]
allowed_select = ["id", "title", "body", "created_at"]
allowed_sort = ["created_at"]
default_limit = 25

[columns]
id = "id"
title = "title"
body = "body"
createdAt = "created_at"

[allowed_conditions]
id = ["eq", "in"]
body = ["contains"]

[pagination]
style = "limit_offset"
max_limit = 100
"#;

fn render(resource: &ResourceSelectBuilder, query: &Query) -> resql::Result<(String, Vec<Value>)> {
    resource
        .build(&CancellationToken::new(), query, None)?
        .build(Dialect::PostgreSQL)
}

#[test]
fn test_configured_resource() {
    let resource = ResourceConfig::from_toml_str(ARTICLES)
        .unwrap()
        .into_builder()
        .unwrap();

    let (sql, params) = render(&resource, &Query::new()).unwrap();
    assert_eq!(sql, "SELECT id, title FROM articles LIMIT 25");
    assert!(params.is_empty());

    let query = Query::new()
        .fields("articles", ["id", "createdAt"])
        .filter("body", "contains:rust")
        .sort("createdAt", OrderBy::Desc)
        .page(Page::new().limit("10").offset("20"));
    let (sql, params) = render(&resource, &query).unwrap();
    assert_eq!(
        sql,
        "SELECT id, created_at FROM articles WHERE body LIKE $1 ORDER BY created_at DESC LIMIT 10 OFFSET 20"
    );
    assert_eq!(params, vec![Value::from("%rust%")]);
}

#[test]
fn test_configured_limits_are_enforced() {
    let resource = ResourceConfig::from_toml_str(ARTICLES)
        .unwrap()
        .into_builder()
        .unwrap();
    let query = Query::new().page(Page::new().limit("1000"));
    let err = render(&resource, &query).unwrap_err();
    assert_eq!(err.to_string(), "page limit cannot be greater than 100");
}

#[test]
fn test_custom_registry_satisfies_allowed_operations() {
    let source = r#"
        resource = "articles"
        naming = "snake_case"
        default_fields = ["id"]

        [allowed_conditions]
        id = ["odd"]
    "#;

    let config = ResourceConfig::from_toml_str(source).unwrap();
    assert!(matches!(
        config.clone().into_builder(),
        Err(ConfigError::UnknownOperation { .. })
    ));

    let conditions = ConditionMap::new().insert("odd", |field: &str, _: &[&str]| {
        Ok(expr::raw(format!("{field} % 2 = 1")))
    });
    let resource = config.into_builder_with(conditions).unwrap();
    let (sql, _) = render(&resource, &Query::new().filter("id", "odd")).unwrap();
    assert_eq!(sql, "SELECT id FROM articles WHERE id % 2 = 1");
}
