//! SELECT statement accumulator.

use std::borrow::Cow;

use crate::Value;
use crate::builder::OrderByClause;
use crate::dialect::Dialect;
use crate::error::{RenderError, Result};
use crate::expr::{self, Expr};
use crate::sql::SQL;
use crate::traits::ToSQL;

/// Holds a SELECT statement under construction.
///
/// Mutators append to their clause and return `&mut Self` for chaining. Rendering
/// never mutates the builder, so a finished builder renders the same statement every
/// time:
///
/// ```ignore
/// let mut builder = SelectBuilder::new();
/// builder.select(["id", "title"]).from("articles").r#where(eq("id", "42"));
/// let (sql, params) = builder.build(Dialect::SQLite)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectBuilder {
    columns: Vec<Expr>,
    from: Option<Expr>,
    joins: Vec<Expr>,
    wheres: Vec<Expr>,
    group_by: Vec<String>,
    having: Vec<Expr>,
    order_by: Vec<Expr>,
    limit: Option<u64>,
    offset: Option<u64>,
    distinct: bool,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a list of plain column names. An empty list is ignored.
    pub fn select<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if !columns.is_empty() {
            self.columns.push(Expr::Columns(columns));
        }
        self
    }

    /// Appends an arbitrary column-producing node.
    pub fn column(&mut self, column: Expr) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    /// Sets the FROM target, replacing any previous one.
    pub fn from(&mut self, table: impl Into<Cow<'static, str>>) -> &mut Self {
        self.from = Some(expr::raw(table));
        self
    }

    /// Appends a join fragment, e.g. `"LEFT JOIN authors ON authors.id = articles.author_id"`.
    pub fn join(&mut self, join: Expr) -> &mut Self {
        self.joins.push(join);
        self
    }

    /// Appends a WHERE condition. Conditions are AND-joined.
    pub fn r#where(&mut self, condition: Expr) -> &mut Self {
        self.wheres.push(condition);
        self
    }

    pub fn where_all<I>(&mut self, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Expr>,
    {
        self.wheres.extend(conditions);
        self
    }

    pub fn group_by<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.group_by.extend(names.into_iter().map(Into::into));
        self
    }

    /// Appends a HAVING condition. Conditions are AND-joined.
    pub fn having(&mut self, condition: Expr) -> &mut Self {
        self.having.push(condition);
        self
    }

    pub fn order_by(&mut self, term: Expr) -> &mut Self {
        self.order_by.push(term);
        self
    }

    /// Appends ORDER BY terms. An empty list is ignored.
    pub fn order_by_clauses<I>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = OrderByClause>,
    {
        let terms: Vec<OrderByClause> = terms.into_iter().collect();
        if !terms.is_empty() {
            self.order_by.push(Expr::OrderBy(terms));
        }
        self
    }

    pub fn clear_order_by(&mut self) -> &mut Self {
        self.order_by.clear();
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    pub fn has_order_by(&self) -> bool {
        !self.order_by.is_empty()
    }

    /// Renders the statement with the dialect's placeholders.
    pub fn build(&self, dialect: Dialect) -> Result<(String, Vec<Value>)> {
        crate::resql_profile_scope!("select", "build");

        let (sql, params) = self.to_sql()?.into_parts(dialect);
        crate::resql_trace_query!(dialect, &sql, params.len());
        Ok((sql, params))
    }
}

fn render_all(nodes: &[Expr], separator: &'static str) -> Result<SQL> {
    let rendered = nodes.iter().map(ToSQL::to_sql).collect::<Result<Vec<_>>>()?;
    Ok(SQL::join(rendered, separator))
}

impl ToSQL for SelectBuilder {
    fn to_sql(&self) -> Result<SQL> {
        crate::resql_profile_scope!("select", "render");

        let columns = render_all(&self.columns, ", ")?;
        if columns.is_empty() {
            return Err(RenderError::MissingColumns.into());
        }

        let mut sql = SQL::raw(if self.distinct {
            "SELECT DISTINCT "
        } else {
            "SELECT "
        })
        .append(columns);

        if let Some(from) = &self.from {
            let from = from.to_sql()?;
            if !from.is_empty() {
                sql.append_mut(SQL::raw(" FROM ").append(from));
            }
        }

        let joins = render_all(&self.joins, " ")?;
        if !joins.is_empty() {
            sql.append_mut(SQL::raw(" ").append(joins));
        }

        let wheres = render_all(&self.wheres, " AND ")?;
        if !wheres.is_empty() {
            sql.append_mut(SQL::raw(" WHERE ").append(wheres));
        }

        if !self.group_by.is_empty() {
            sql.push_mut(format!(" GROUP BY {}", self.group_by.join(", ")));
        }

        let having = render_all(&self.having, " AND ")?;
        if !having.is_empty() {
            sql.append_mut(SQL::raw(" HAVING ").append(having));
        }

        let order_by = render_all(&self.order_by, ", ")?;
        if !order_by.is_empty() {
            sql.append_mut(SQL::raw(" ORDER BY ").append(order_by));
        }

        if let Some(limit) = self.limit {
            sql.push_mut(format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_mut(format!(" OFFSET {offset}"));
        }

        Ok(sql)
    }
}
