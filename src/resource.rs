//! Resource query orchestrator.
//!
//! A [`ResourceSelectBuilder`] owns the per-resource policy (which fields may be
//! selected, filtered and sorted, how names map to columns, which operations exist)
//! and turns a [`Query`] into a [`SelectBuilder`].

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use resql_core::{Clause, OrderByClause, ResqlError, Result, SelectBuilder};
use tokio_util::sync::CancellationToken;

use crate::condition::{ConditionFactory, ConditionMap};
use crate::extension::Extension;
use crate::filter::{DelimitedArgsParser, PredicateParser};
use crate::query::Query;
use crate::translator::Translator;

/// Operations permitted per field. A field without an entry cannot be filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedConditions {
    fields: IndexMap<String, IndexSet<String>>,
}

impl AllowedConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permits `operations` on `field`, adding to any operations already permitted.
    pub fn field<I>(mut self, field: impl Into<String>, operations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields
            .entry(field.into())
            .or_default()
            .extend(operations.into_iter().map(Into::into));
        self
    }

    /// Returns the operations permitted on `field`, or `None` if it cannot be filtered.
    pub fn operations(&self, field: &str) -> Option<&IndexSet<String>> {
        self.fields.get(field)
    }

    /// Iterates over `(field, operation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .flat_map(|(field, ops)| ops.iter().map(move |op| (field.as_str(), op.as_str())))
    }
}

impl<K, I> FromIterator<(K, I)> for AllowedConditions
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |allowed, (field, ops)| allowed.field(field, ops))
    }
}

/// Builds SELECT statements for one resource.
///
/// Configured through consuming builder methods and immutable afterwards; a single
/// instance can serve concurrent builds.
///
/// ```
/// use resql::{AllowedConditions, Dialect, MapTranslator, Query, ResourceSelectBuilder};
/// use tokio_util::sync::CancellationToken;
///
/// let articles = ResourceSelectBuilder::new(
///     "articles",
///     MapTranslator::new([("id", "id"), ("title", "title")]),
/// )
/// .default_fields(["id", "title"])
/// .allow_filtering(AllowedConditions::new().field("id", ["eq", "in"]));
///
/// let query = Query::new().filter("id", "in:1,2");
/// let builder = articles.build(&CancellationToken::new(), &query, None).unwrap();
/// let (sql, params) = builder.build(Dialect::PostgreSQL).unwrap();
///
/// assert_eq!(sql, "SELECT id, title FROM articles WHERE id IN ($1,$2)");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Clone)]
pub struct ResourceSelectBuilder {
    resource: String,
    translator: Arc<dyn Translator>,
    default_fields: Vec<String>,
    allowed_select: Option<IndexSet<String>>,
    always_select: Vec<String>,
    always_select_all: bool,
    allowed_sort: IndexSet<String>,
    allowed_conditions: AllowedConditions,
    conditions: Arc<dyn ConditionFactory>,
    parser: Arc<dyn PredicateParser>,
    extensions: Vec<Extension>,
}

impl ResourceSelectBuilder {
    /// Creates a builder for `resource` with the built-in conditions and the default
    /// `operation:arg,arg` predicate parser.
    pub fn new(resource: impl Into<String>, translator: impl Translator + 'static) -> Self {
        Self {
            resource: resource.into(),
            translator: Arc::new(translator),
            default_fields: Vec::new(),
            allowed_select: None,
            always_select: Vec::new(),
            always_select_all: false,
            allowed_sort: IndexSet::new(),
            allowed_conditions: AllowedConditions::new(),
            conditions: Arc::new(ConditionMap::with_defaults()),
            parser: Arc::new(DelimitedArgsParser::default()),
            extensions: Vec::new(),
        }
    }

    /// Columns selected when the query names no fields for this resource.
    pub fn default_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.default_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Permits `fields` in SELECT. Repeated calls accumulate.
    ///
    /// Until this is called, the default fields are the permitted set.
    pub fn allow_select_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.allowed_select
            .get_or_insert_with(IndexSet::new)
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Permits sorting by `fields`, compared against translated names. Repeated calls
    /// accumulate.
    pub fn allow_sorting_by_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.allowed_sort.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Sets which operations may be applied to which fields.
    pub fn allow_filtering(mut self, allowed: AllowedConditions) -> Self {
        self.allowed_conditions = allowed;
        self
    }

    /// Replaces the condition registry.
    pub fn conditions(mut self, conditions: impl ConditionFactory + 'static) -> Self {
        self.conditions = Arc::new(conditions);
        self
    }

    /// Replaces the predicate parser.
    pub fn parser(mut self, parser: impl PredicateParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Columns added to every selection.
    pub fn always_select_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.always_select = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Selects every permitted field regardless of the requested ones.
    pub fn always_select_all_fields(mut self, flag: bool) -> Self {
        self.always_select_all = flag;
        self
    }

    /// Appends an extension hook. Hooks run in the order they were added.
    pub fn extend(mut self, extension: Extension) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    fn allowed_select(&self) -> Cow<'_, IndexSet<String>> {
        match &self.allowed_select {
            Some(allowed) => Cow::Borrowed(allowed),
            None => Cow::Owned(self.default_fields.iter().cloned().collect()),
        }
    }

    /// Validates `query` against the policy and assembles the statement.
    ///
    /// A supplied `builder` is extended and returned; otherwise a fresh one is used.
    /// Every step is a hard stop: on failure no partial statement is returned.
    pub fn build(
        &self,
        ctx: &CancellationToken,
        query: &Query,
        builder: Option<SelectBuilder>,
    ) -> Result<SelectBuilder> {
        resql_core::resql_profile_scope!("resource", "build");

        let mut builder = builder.unwrap_or_default();
        match self.assemble(ctx, query, &mut builder) {
            Ok(()) => Ok(builder),
            Err(err) => {
                resql_core::resql_trace_reject!(self.resource, err);
                Err(err)
            }
        }
    }

    fn assemble(
        &self,
        ctx: &CancellationToken,
        query: &Query,
        builder: &mut SelectBuilder,
    ) -> Result<()> {
        let fields = self.select_fields(query)?;
        resql_core::resql_trace_build!(
            "select",
            resource = self.resource.as_str(),
            fields = fields.len()
        );
        builder.select(fields).from(self.resource.clone());

        self.apply_filters(query, builder)?;
        self.apply_sort(query, builder)?;

        for extension in &self.extensions {
            extension(ctx, query, &mut *builder)?;
        }
        resql_core::resql_trace_build!(
            "extensions",
            resource = self.resource.as_str(),
            count = self.extensions.len()
        );
        Ok(())
    }

    fn translate(&self, names: &[String]) -> Result<Vec<String>> {
        let translated = self.translator.translate(names)?;
        if translated.len() != names.len() {
            let entry = names.get(translated.len()).cloned().unwrap_or_default();
            return Err(ResqlError::Translation {
                entry,
                reason: format!(
                    "translator returned {} names for {}",
                    translated.len(),
                    names.len()
                ),
            });
        }
        Ok(translated)
    }

    fn select_fields(&self, query: &Query) -> Result<Vec<String>> {
        let allowed = self.allowed_select();

        let fields: Vec<String> = if self.always_select_all {
            allowed.iter().cloned().collect()
        } else {
            let requested = match query.fields_for(&self.resource) {
                Some(fields) => self.translate(fields)?,
                None => self.default_fields.clone(),
            };
            let unique: IndexSet<String> = requested
                .into_iter()
                .chain(self.always_select.iter().cloned())
                .collect();
            unique.into_iter().collect()
        };

        if let Some(field) = fields.iter().find(|f| !allowed.contains(*f)) {
            return Err(ResqlError::FieldNotAllowed {
                field: field.clone(),
                clause: Clause::Select,
            });
        }
        Ok(fields)
    }

    fn apply_filters(&self, query: &Query, builder: &mut SelectBuilder) -> Result<()> {
        for filter in &query.filters {
            let allowed = self
                .allowed_conditions
                .operations(&filter.field)
                .ok_or_else(|| ResqlError::FilteringNotPermitted {
                    field: filter.field.clone(),
                    operation: None,
                })?;

            let column = self
                .translate(std::slice::from_ref(&filter.field))?
                .pop()
                .unwrap_or_default();
            let predicate = self.parser.parse(&filter.predicate)?;

            if !allowed.contains(predicate.operation) {
                return Err(ResqlError::FilteringNotPermitted {
                    field: filter.field.clone(),
                    operation: Some(predicate.operation.to_owned()),
                });
            }

            let condition = self.conditions.create_condition(predicate.operation)?;
            builder.r#where(condition(column.as_str(), predicate.args.as_slice())?);
        }
        resql_core::resql_trace_build!(
            "filters",
            resource = self.resource.as_str(),
            count = query.filters.len()
        );
        Ok(())
    }

    fn apply_sort(&self, query: &Query, builder: &mut SelectBuilder) -> Result<()> {
        if query.sort.is_empty() {
            return Ok(());
        }

        let names: Vec<String> = query.sort.iter().map(|s| s.field.clone()).collect();
        let columns = self.translate(&names)?;

        let mut terms = Vec::with_capacity(columns.len());
        for (sort, column) in query.sort.iter().zip(columns) {
            if !self.allowed_sort.contains(&column) {
                return Err(ResqlError::FieldNotAllowed {
                    field: sort.field.clone(),
                    clause: Clause::Sort,
                });
            }
            terms.push(OrderByClause::new(column, sort.direction));
        }
        builder.order_by_clauses(terms);
        Ok(())
    }
}

impl std::fmt::Debug for ResourceSelectBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceSelectBuilder")
            .field("resource", &self.resource)
            .field("default_fields", &self.default_fields)
            .field("allowed_select", &self.allowed_select)
            .field("always_select", &self.always_select)
            .field("always_select_all", &self.always_select_all)
            .field("allowed_sort", &self.allowed_sort)
            .field("allowed_conditions", &self.allowed_conditions)
            .field("extensions", &self.extensions.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::MapTranslator;
    use resql_core::{Dialect, OrderBy};

    fn articles() -> ResourceSelectBuilder {
        ResourceSelectBuilder::new(
            "articles",
            MapTranslator::new([("id", "id"), ("title", "title"), ("createdAt", "created_at")]),
        )
        .default_fields(["id", "title"])
    }

    #[test]
    fn test_allowed_select_falls_back_to_defaults() {
        let ctx = CancellationToken::new();
        let query = Query::new().fields("articles", ["title"]);
        let builder = articles().build(&ctx, &query, None).unwrap();
        assert_eq!(
            builder.build(Dialect::SQLite).unwrap().0,
            "SELECT title FROM articles"
        );

        let query = Query::new().fields("articles", ["createdAt"]);
        let err = articles().build(&ctx, &query, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"field "created_at" not allowed for selection criteria"#
        );
    }

    #[test]
    fn test_allow_lists_accumulate() {
        let ctx = CancellationToken::new();
        let resource = articles()
            .allow_select_fields(["id"])
            .allow_select_fields(["title"])
            .allow_sorting_by_fields(["created_at"])
            .allow_sorting_by_fields(["id"]);

        let query = Query::new()
            .fields("articles", ["id", "title"])
            .sort("createdAt", OrderBy::Desc)
            .sort("id", OrderBy::Asc);
        let builder = resource.build(&ctx, &query, None).unwrap();
        assert_eq!(
            builder.build(Dialect::SQLite).unwrap().0,
            "SELECT id, title FROM articles ORDER BY created_at DESC, id ASC"
        );
    }

    #[test]
    fn test_allowed_conditions_from_iter() {
        let allowed: AllowedConditions = [("id", vec!["eq", "in"]), ("title", vec!["like"])]
            .into_iter()
            .collect();
        assert!(allowed.operations("id").is_some_and(|ops| ops.contains("in")));
        assert!(allowed.operations("body").is_none());
        assert_eq!(allowed.iter().count(), 3);
    }

    #[test]
    fn test_resource_builder_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceSelectBuilder>();
    }
}
