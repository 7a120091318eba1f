//! Core building blocks for resql: SQL fragments, expression nodes and the
//! SELECT accumulator.

pub mod builder;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod profiling;
pub mod select;
pub mod sql;
pub mod tracing;
pub mod traits;

// Re-export key types and traits
pub use builder::{OrderBy, OrderByClause, OrderByParseError};
pub use dialect::Dialect;
pub use error::{Clause, RenderError, ResqlError, Result};
pub use expr::{CompareOp, Expr, LogicalOp};
pub use resql_types::Value;
pub use select::SelectBuilder;
pub use sql::{SQL, SQLChunk};
pub use traits::ToSQL;

pub mod prelude {
    pub use crate::builder::{OrderBy, OrderByClause};
    pub use crate::dialect::Dialect;
    pub use crate::error::{ResqlError, Result};
    pub use crate::expr::{self, Expr};
    pub use crate::select::SelectBuilder;
    pub use crate::sql::SQL;
    pub use crate::traits::ToSQL;
    pub use resql_types::Value;
}
