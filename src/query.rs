//! The parsed query handed over by the API layer.
//!
//! A [`Query`] is read-only input to a build. It is usually produced by an HTTP
//! query-string parser, but can be assembled by hand:
//!
//! ```
//! use resql::{OrderBy, Page, Query};
//!
//! let query = Query::new()
//!     .fields("articles", ["id", "title"])
//!     .filter("id", "in:1,2,3")
//!     .sort("createdAt", OrderBy::Desc)
//!     .page(Page::new().limit("10").offset("20"));
//!
//! assert_eq!(query.fields_for("articles"), Some(&["id".to_string(), "title".to_string()][..]));
//! ```

use indexmap::IndexMap;
use resql_core::OrderBy;

/// Requested fields, filters, sorting and pagination for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Query {
    /// Requested field names keyed by resource name.
    pub fields: IndexMap<String, Vec<String>>,
    /// Filters in the order they were given.
    pub filters: Vec<Filter>,
    /// Sort directives in the order they were given.
    pub sort: Vec<Sort>,
    pub page: Option<Page>,
}

/// One `field=predicate` filter entry, e.g. `("id", "in:1,2,3")`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filter {
    pub field: String,
    pub predicate: String,
}

/// One sort directive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sort {
    pub field: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: OrderBy,
}

/// Raw page descriptor. Values stay strings until an extension interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Page {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub number: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested fields of a resource.
    pub fn fields<I>(mut self, resource: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields.insert(
            resource.into(),
            fields.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Appends a filter entry.
    pub fn filter(mut self, field: impl Into<String>, predicate: impl Into<String>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            predicate: predicate.into(),
        });
        self
    }

    /// Appends a sort directive.
    pub fn sort(mut self, field: impl Into<String>, direction: OrderBy) -> Self {
        self.sort.push(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    /// Returns the requested fields of `resource`, if the request named any.
    pub fn fields_for(&self, resource: &str) -> Option<&[String]> {
        self.fields.get(resource).map(Vec::as_slice)
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }
}
