//! Raw fragments and the clause lists used by the select builder.

use std::borrow::Cow;

use crate::Value;
use crate::builder::OrderByClause;
use crate::error::Result;
use crate::sql::SQL;

use super::Expr;

/// Raw SQL passed through unchanged.
pub fn raw(sql: impl Into<Cow<'static, str>>) -> Expr {
    Expr::Raw {
        sql: sql.into(),
        params: None,
    }
}

/// Raw SQL with one `?` marker per bound value.
///
/// A marker/value count mismatch is reported when the node is rendered, also
/// when `params` is empty.
pub fn raw_with_params<I>(sql: impl Into<Cow<'static, str>>, params: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Expr::Raw {
        sql: sql.into(),
        params: Some(params.into_iter().map(Into::into).collect()),
    }
}

/// Column list node.
pub fn columns<I>(names: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Expr::Columns(names.into_iter().map(Into::into).collect())
}

/// ORDER BY term list node.
pub fn order_by<I>(terms: I) -> Expr
where
    I: IntoIterator<Item = OrderByClause>,
{
    Expr::OrderBy(terms.into_iter().collect())
}

pub(super) fn render_raw(sql: &Cow<'static, str>, params: Option<&[Value]>) -> Result<SQL> {
    match params {
        None => Ok(SQL::raw(sql.clone())),
        Some(params) => Ok(SQL::raw_with_params(sql, params.iter().cloned())?),
    }
}

pub(super) fn render_columns(columns: &[String]) -> SQL {
    SQL::join(columns.iter().map(|c| SQL::raw(c.clone())), ", ")
}

pub(super) fn render_order_by(terms: &[OrderByClause]) -> SQL {
    SQL::join(terms.iter().map(OrderByClause::render), ", ")
}
