//! Pattern matching (LIKE).

use crate::Value;
use crate::sql::SQL;

use super::Expr;

pub(super) fn render(field: &str, pattern: &Value) -> SQL {
    SQL::raw(format!("{field} LIKE ")).append(SQL::param(pattern.clone()))
}

/// LIKE pattern match. The pattern is bound as-is, wildcards included.
pub fn like(field: impl Into<String>, pattern: impl Into<Value>) -> Expr {
    Expr::Like {
        field: field.into(),
        pattern: pattern.into(),
    }
}
