//! Binary comparisons (`=`, `!=`, `<`, `<=`, `>`, `>=`).

use core::fmt;

use crate::Value;
use crate::sql::SQL;

use super::Expr;

/// Binary comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(super) fn render(field: &str, op: CompareOp, value: &Value) -> SQL {
    SQL::raw(format!("{field} {op} ")).append(SQL::param(value.clone()))
}

/// Builds a comparison node.
pub fn compare(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Expr {
    Expr::Compare {
        field: field.into(),
        op,
        value: value.into(),
    }
}

// =============================================================================
// Equality Comparisons
// =============================================================================

/// Equality comparison (`=`).
pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    compare(field, CompareOp::Eq, value)
}

/// Inequality comparison (`!=`).
pub fn neq(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    compare(field, CompareOp::NotEq, value)
}

// =============================================================================
// Ordering Comparisons
// =============================================================================

/// Less-than comparison (`<`).
pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    compare(field, CompareOp::Lt, value)
}

/// Less-than-or-equal comparison (`<=`).
pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    compare(field, CompareOp::LtEq, value)
}

/// Greater-than comparison (`>`).
pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    compare(field, CompareOp::Gt, value)
}

/// Greater-than-or-equal comparison (`>=`).
pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Expr {
    compare(field, CompareOp::GtEq, value)
}
