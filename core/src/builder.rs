use core::fmt;
use core::str::FromStr;

use crate::sql::SQL;

/// Sort direction of an ORDER BY term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OrderBy {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "ASC", alias = "Asc"))]
    Asc,
    #[cfg_attr(feature = "serde", serde(alias = "DESC", alias = "Desc"))]
    Desc,
}

impl OrderBy {
    /// Creates an ascending ORDER BY term: "column ASC"
    pub fn asc(column: impl Into<String>) -> OrderByClause {
        OrderByClause::new(column, Self::Asc)
    }

    /// Creates a descending ORDER BY term: "column DESC"
    pub fn desc(column: impl Into<String>) -> OrderByClause {
        OrderByClause::new(column, Self::Desc)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Asc => "ASC",
            OrderBy::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort direction string is neither `asc` nor `desc`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort direction {0:?}")]
pub struct OrderByParseError(pub String);

impl FromStr for OrderBy {
    type Err = OrderByParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(OrderBy::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(OrderBy::Desc)
        } else {
            Err(OrderByParseError(s.to_owned()))
        }
    }
}

/// Represents one term of an ORDER BY clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByClause {
    /// The column to order by.
    pub column: String,
    /// The direction to sort (ASC or DESC).
    pub direction: OrderBy,
}

impl OrderByClause {
    /// Creates a new ORDER BY term.
    pub fn new(column: impl Into<String>, direction: OrderBy) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub(crate) fn render(&self) -> SQL {
        SQL::raw(format!("{} {}", self.column, self.direction))
    }
}

impl fmt::Display for OrderByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_terms() {
        assert_eq!(OrderBy::desc("created_at").to_string(), "created_at DESC");
        assert_eq!(OrderBy::asc("id").render().sql(), "id ASC");
        assert_eq!(OrderBy::default(), OrderBy::Asc);
    }

    #[test]
    fn test_order_by_from_str() {
        assert_eq!("DESC".parse::<OrderBy>(), Ok(OrderBy::Desc));
        assert_eq!("asc".parse::<OrderBy>(), Ok(OrderBy::Asc));
        assert!("sideways".parse::<OrderBy>().is_err());
    }
}
