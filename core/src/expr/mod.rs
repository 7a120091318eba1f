//! Expression nodes that render to SQL fragments.
//!
//! Every node renders independently to a [`SQL`] fragment whose parameters line up
//! with its placeholders. Nodes are built through the free functions re-exported
//! here:
//!
//! ```ignore
//! let cond = and([
//!     in_array("id", ["1", "2", "3"]),
//!     like("body", "%bitcoin%"),
//! ])?;
//! ```

mod clause;
mod cmp;
mod logical;
mod null;
mod set;
mod string;

use std::borrow::Cow;

pub use clause::*;
pub use cmp::*;
pub use logical::*;
pub use null::*;
pub use set::*;
pub use string::*;

use crate::Value;
use crate::builder::OrderByClause;
use crate::error::Result;
use crate::sql::SQL;
use crate::traits::ToSQL;

/// A node of the expression tree.
///
/// Nodes are immutable once constructed and render deterministically.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `<field> <op> ?`
    Compare {
        field: String,
        op: CompareOp,
        value: Value,
    },
    /// `<field> [NOT] IN (?,...,?)`
    InList {
        field: String,
        values: Vec<Value>,
        negated: bool,
    },
    /// `<field> LIKE ?`
    Like { field: String, pattern: Value },
    /// `<field> IS [NOT] NULL`
    IsNull { field: String, negated: bool },
    /// `NOT (<inner>)`
    Not(Box<Expr>),
    /// Children joined with AND / OR
    Group { op: LogicalOp, children: Vec<Expr> },
    /// Caller-supplied SQL. With `params`, every `?` is a bound marker.
    Raw {
        sql: Cow<'static, str>,
        params: Option<Vec<Value>>,
    },
    /// Comma separated column names
    Columns(Vec<String>),
    /// Comma separated ORDER BY terms
    OrderBy(Vec<OrderByClause>),
}

impl ToSQL for Expr {
    fn to_sql(&self) -> Result<SQL> {
        match self {
            Expr::Compare { field, op, value } => Ok(cmp::render(field, *op, value)),
            Expr::InList {
                field,
                values,
                negated,
            } => set::render(field, values, *negated),
            Expr::Like { field, pattern } => Ok(string::render(field, pattern)),
            Expr::IsNull { field, negated } => Ok(null::render(field, *negated)),
            Expr::Not(inner) => logical::render_not(inner),
            Expr::Group { op, children } => logical::render_group(*op, children),
            Expr::Raw { sql, params } => clause::render_raw(sql, params.as_deref()),
            Expr::Columns(columns) => Ok(clause::render_columns(columns)),
            Expr::OrderBy(terms) => Ok(clause::render_order_by(terms)),
        }
    }
}
