//! # resql
//!
//! Compiles a parsed, resource-scoped API query (requested fields, filter predicates,
//! sort directives, pagination) into a parameterized SQL SELECT statement, enforcing
//! per-resource allow-lists on what may be selected, filtered and sorted.
//!
//! ## Quick Start
//!
//! ```rust
//! use resql::prelude::*;
//! use tokio_util::sync::CancellationToken;
//!
//! # fn main() -> resql::Result<()> {
//! let articles = ResourceSelectBuilder::new(
//!     "articles",
//!     MapTranslator::new([
//!         ("id", "id"),
//!         ("title", "title"),
//!         ("body", "body"),
//!         ("createdAt", "created_at"),
//!     ]),
//! )
//! .default_fields(["*"])
//! .allow_select_fields(["*", "id", "title", "body"])
//! .allow_sorting_by_fields(["created_at"])
//! .allow_filtering(
//!     AllowedConditions::new()
//!         .field("id", ["eq", "in"])
//!         .field("body", ["contains"]),
//! )
//! .extend(limit_offset_pagination(Some(100), None));
//!
//! let query = Query::new()
//!     .filter("id", "in:1,2,3")
//!     .filter("body", "contains:bitcoin")
//!     .sort("createdAt", OrderBy::Desc)
//!     .page(Page::new().limit("10"));
//!
//! let builder = articles.build(&CancellationToken::new(), &query, None)?;
//! let (sql, params) = builder.build(Dialect::SQLite)?;
//!
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM articles WHERE id IN (?,?,?) AND body LIKE ? ORDER BY created_at DESC LIMIT 10"
//! );
//! assert_eq!(params.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature     | Default | Description                                       |
//! |-------------|---------|---------------------------------------------------|
//! | `tracing`   | yes     | Debug events for builds and rendered statements   |
//! | `serde`     | yes     | Serialize/deserialize queries and configuration   |
//! | `toml`      | yes     | Load [`ResourceConfig`] from TOML                  |
//! | `rusqlite`  | no      | Bind rendered [`Value`]s to rusqlite statements   |
//! | `profiling` | no      | puffin scopes around building and rendering       |

pub mod condition;
pub mod conditions;
pub mod config;
pub mod extension;
pub mod filter;
pub mod query;
pub mod resource;
pub mod translator;

// =============================================================================
// Root-level exports
// =============================================================================

pub use resql_core::{
    Clause, CompareOp, Dialect, Expr, LogicalOp, OrderBy, OrderByClause, RenderError,
    ResqlError, Result, SQL, SQLChunk, SelectBuilder, ToSQL, Value, expr,
};

pub use condition::{Condition, ConditionFactory, ConditionMap};
pub use config::{ConfigError, Naming, PaginationConfig, ParserConfig, ResourceConfig};
pub use extension::{
    Extension, PaginationError, default_limit, extension, limit_number_pagination,
    limit_offset_pagination,
};
pub use filter::{DelimitedArgsParser, Predicate, PredicateParser};
pub use query::{Filter, Page, Query, Sort};
pub use resource::{AllowedConditions, ResourceSelectBuilder};
pub use translator::{MapTranslator, SnakeCaseTranslator, Translator};

pub mod prelude {
    pub use crate::condition::{ConditionFactory, ConditionMap};
    pub use crate::extension::{default_limit, limit_number_pagination, limit_offset_pagination};
    pub use crate::filter::DelimitedArgsParser;
    pub use crate::query::{Page, Query};
    pub use crate::resource::{AllowedConditions, ResourceSelectBuilder};
    pub use crate::translator::{MapTranslator, SnakeCaseTranslator, Translator};
    pub use resql_core::prelude::*;
}
