//! Filter predicate parsing: `"operation:arg,arg"`.

use resql_core::Result;

/// Default delimiter between the operation name and its arguments.
pub const MAIN_DELIMITER: char = ':';
/// Default delimiter between arguments.
pub const ARGS_DELIMITER: &str = ",";

/// An operation name and its raw arguments, borrowed from the predicate string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate<'a> {
    pub operation: &'a str,
    pub args: Vec<&'a str>,
}

/// Splits a predicate string into an operation name and arguments.
pub trait PredicateParser: Send + Sync {
    fn parse<'a>(&self, predicate: &'a str) -> Result<Predicate<'a>>;
}

/// Parser for `<operation>[<main><arg>[<args><arg>...]]` predicates.
///
/// Arguments are taken literally; there is no quoting or escaping, so an argument can
/// never contain the argument delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedArgsParser {
    main: char,
    args: String,
}

impl DelimitedArgsParser {
    pub fn new(main: char, args: impl Into<String>) -> Self {
        Self {
            main,
            args: args.into(),
        }
    }

    /// Splits the predicate. Never fails: malformed input is read literally.
    pub fn split<'a>(&self, predicate: &'a str) -> Predicate<'a> {
        let Some((operation, rest)) = predicate.split_once(self.main) else {
            return Predicate {
                operation: predicate,
                args: Vec::new(),
            };
        };

        let args = if rest.is_empty() {
            Vec::new()
        } else if self.args.is_empty() {
            vec![rest]
        } else {
            rest.split(self.args.as_str()).collect()
        };
        Predicate { operation, args }
    }
}

impl Default for DelimitedArgsParser {
    fn default() -> Self {
        Self::new(MAIN_DELIMITER, ARGS_DELIMITER)
    }
}

impl PredicateParser for DelimitedArgsParser {
    fn parse<'a>(&self, predicate: &'a str) -> Result<Predicate<'a>> {
        Ok(self.split(predicate))
    }
}
