//! ToSQL trait for converting nodes to SQL fragments.

use crate::error::Result;
use crate::sql::SQL;

/// Trait for types that render to a SQL fragment.
///
/// Rendering can fail on structural violations (an empty value set, an empty group,
/// a statement without columns), so the fragment comes back wrapped in a `Result`.
pub trait ToSQL {
    fn to_sql(&self) -> Result<SQL>;

    /// Renders and returns the fragment text with `?` placeholders.
    fn to_sql_string(&self) -> Result<String> {
        Ok(self.to_sql()?.sql())
    }
}

impl ToSQL for SQL {
    fn to_sql(&self) -> Result<SQL> {
        Ok(self.clone())
    }
}

impl<T: ToSQL> ToSQL for &T {
    fn to_sql(&self) -> Result<SQL> {
        (**self).to_sql()
    }
}

impl<T: ToSQL> ToSQL for Box<T> {
    fn to_sql(&self) -> Result<SQL> {
        (**self).to_sql()
    }
}
