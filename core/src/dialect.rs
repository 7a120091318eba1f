//! Placeholder rendering for the dialects re-exported from resql-types.

use std::fmt::Write;

pub use resql_types::Dialect;

/// Writes the placeholder for the 1-based `index` straight into `buf`.
#[inline]
pub fn write_placeholder(dialect: Dialect, index: usize, buf: &mut impl Write) {
    let _ = if dialect.uses_numbered_placeholders() {
        write!(buf, "${}", index)
    } else {
        buf.write_char('?')
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_placeholder() {
        let mut buf = String::new();
        write_placeholder(Dialect::SQLite, 3, &mut buf);
        write_placeholder(Dialect::MySQL, 3, &mut buf);
        write_placeholder(Dialect::PostgreSQL, 12, &mut buf);
        assert_eq!(buf, "??$12");
    }
}
