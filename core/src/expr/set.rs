//! Set membership (IN, NOT IN).

use crate::Value;
use crate::error::{RenderError, Result};
use crate::sql::SQL;

use super::Expr;

pub(super) fn render(field: &str, values: &[Value], negated: bool) -> Result<SQL> {
    let operator = if negated { "NotIn" } else { "In" };
    if values.is_empty() {
        return Err(RenderError::EmptyValueSet {
            field: field.to_owned(),
            operator,
        }
        .into());
    }

    let keyword = if negated { "NOT IN" } else { "IN" };
    Ok(SQL::raw(format!("{field} {keyword} ("))
        .append(SQL::param_list(values.iter().cloned()))
        .push(")"))
}

/// IN check against a list of values.
///
/// An empty list is kept as-is and fails when rendered; it never matches silently.
pub fn in_array<I>(field: impl Into<String>, values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Expr::InList {
        field: field.into(),
        values: values.into_iter().map(Into::into).collect(),
        negated: false,
    }
}

/// NOT IN check against a list of values.
pub fn not_in_array<I>(field: impl Into<String>, values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Expr::InList {
        field: field.into(),
        values: values.into_iter().map(Into::into).collect(),
        negated: true,
    }
}
