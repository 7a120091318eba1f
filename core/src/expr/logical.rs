//! Logical operators (AND, OR, NOT).
//!
//! ```ignore
//! and([eq("id", "1"), is_null("deleted_at")])?
//! or([eq("status", "draft"), eq("status", "review")])?
//! not(eq("id", "1"))
//! ```

use core::fmt;

use crate::error::{RenderError, Result};
use crate::sql::SQL;
use crate::traits::ToSQL;

use super::Expr;

/// Connective of a condition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Operator name used in error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            LogicalOp::And => "And",
            LogicalOp::Or => "Or",
        }
    }

    /// Separator placed between surviving children.
    pub const fn separator(&self) -> &'static str {
        match self {
            LogicalOp::And => " AND ",
            LogicalOp::Or => " OR ",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// NOT
// =============================================================================

/// Logical NOT: `NOT (<inner>)`.
pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

pub(super) fn render_not(inner: &Expr) -> Result<SQL> {
    let inner = inner.to_sql()?;
    if inner.is_empty() {
        return Ok(SQL::empty());
    }
    Ok(SQL::raw("NOT ").append(inner.parens()))
}

// =============================================================================
// AND / OR
// =============================================================================

/// Logical AND of the given conditions.
///
/// Fails with `EmptyGroup` when no condition is supplied.
pub fn and<I>(conditions: I) -> Result<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    group(LogicalOp::And, conditions)
}

/// Logical OR of the given conditions.
///
/// Fails with `EmptyGroup` when no condition is supplied.
pub fn or<I>(conditions: I) -> Result<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    group(LogicalOp::Or, conditions)
}

fn group<I>(op: LogicalOp, conditions: I) -> Result<Expr>
where
    I: IntoIterator<Item = Expr>,
{
    let children: Vec<Expr> = conditions.into_iter().collect();
    if children.is_empty() {
        return Err(RenderError::EmptyGroup {
            operator: op.name(),
        }
        .into());
    }
    Ok(Expr::Group { op, children })
}

pub(super) fn render_group(op: LogicalOp, children: &[Expr]) -> Result<SQL> {
    if children.is_empty() {
        return Err(RenderError::EmptyGroup {
            operator: op.name(),
        }
        .into());
    }

    let mut survivors = Vec::with_capacity(children.len());
    for child in children {
        let sql = child.to_sql()?;
        if !sql.is_empty() {
            survivors.push(sql);
        }
    }

    let wrap = survivors.len() > 1;
    let joined = SQL::join(survivors, op.separator());
    Ok(if wrap { joined.parens() } else { joined })
}
