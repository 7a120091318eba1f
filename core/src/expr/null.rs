//! Null checks (IS NULL, IS NOT NULL).

use crate::sql::SQL;

use super::Expr;

pub(super) fn render(field: &str, negated: bool) -> SQL {
    if negated {
        SQL::raw(format!("{field} IS NOT NULL"))
    } else {
        SQL::raw(format!("{field} IS NULL"))
    }
}

/// IS NULL check.
pub fn is_null(field: impl Into<String>) -> Expr {
    Expr::IsNull {
        field: field.into(),
        negated: false,
    }
}

/// IS NOT NULL check.
pub fn is_not_null(field: impl Into<String>) -> Expr {
    Expr::IsNull {
        field: field.into(),
        negated: true,
    }
}
