//! Built-in conditions and their recommended operation names.
//!
//! | Name         | Expression                      | Arguments      |
//! |--------------|---------------------------------|----------------|
//! | `eq`         | `field = ?`                     | exactly one    |
//! | `neq`        | `field != ?`                    | exactly one    |
//! | `lt` / `le`  | `field < ?` / `field <= ?`      | exactly one    |
//! | `gt` / `ge`  | `field > ?` / `field >= ?`      | exactly one    |
//! | `in`         | `field IN (?,...)`              | one or more    |
//! | `notin`      | `field NOT IN (?,...)`          | one or more    |
//! | `like`       | `field LIKE ?`                  | first of many  |
//! | `startswith` | `field LIKE ?` with `arg%`      | first of many  |
//! | `endswith`   | `field LIKE ?` with `%arg`      | first of many  |
//! | `contains`   | `field LIKE ?` with `%arg%`     | first of many  |
//! | `null`       | `field IS NULL`                 | ignored        |
//! | `notnull`    | `field IS NOT NULL`             | ignored        |
//!
//! Pattern arguments are bound as given: `%` and `_` inside them keep their LIKE meaning.

use resql_core::{Expr, ResqlError, Result, expr};

use crate::condition::ConditionMap;

fn invalid(operation: &str, reason: &str) -> ResqlError {
    ResqlError::InvalidArguments {
        operation: operation.to_owned(),
        reason: reason.to_owned(),
    }
}

fn exactly_one<'a>(operation: &str, args: &[&'a str]) -> Result<&'a str> {
    match args {
        [value] => Ok(*value),
        _ => Err(invalid(
            operation,
            &format!("expected exactly one value, got {}", args.len()),
        )),
    }
}

fn first<'a>(operation: &str, args: &[&'a str]) -> Result<&'a str> {
    args.first()
        .copied()
        .ok_or_else(|| invalid(operation, "expected at least one value"))
}

fn at_least_one<'a, 'b>(operation: &str, args: &'b [&'a str]) -> Result<&'b [&'a str]> {
    if args.is_empty() {
        return Err(invalid(operation, "expected at least one value"));
    }
    Ok(args)
}

macro_rules! comparison_conditions {
    ($($name:ident => $operation:literal, $build:path;)*) => {
        paste::paste! {
            $(
                #[doc = concat!("Recommended name of the `", stringify!($name), "` condition.")]
                pub const [<NAME_ $name:upper>]: &str = $operation;

                #[doc = concat!("`", $operation, "` condition. Takes exactly one argument.")]
                pub fn $name(field: &str, args: &[&str]) -> Result<Expr> {
                    let value = exactly_one([<NAME_ $name:upper>], args)?;
                    Ok($build(field, value))
                }
            )*
        }
    };
}

macro_rules! pattern_conditions {
    ($($name:ident => $operation:literal, $pattern:literal;)*) => {
        paste::paste! {
            $(
                #[doc = concat!("Recommended name of the `", stringify!($name), "` condition.")]
                pub const [<NAME_ $name:upper>]: &str = $operation;

                #[doc = concat!("`", $operation, "` condition. Binds `", $pattern, "` built from the first argument.")]
                pub fn $name(field: &str, args: &[&str]) -> Result<Expr> {
                    let value = first([<NAME_ $name:upper>], args)?;
                    Ok(expr::like(field, format!($pattern, value)))
                }
            )*
        }
    };
}

comparison_conditions! {
    eq => "eq", expr::eq;
    neq => "neq", expr::neq;
    lt => "lt", expr::lt;
    le => "le", expr::lte;
    gt => "gt", expr::gt;
    ge => "ge", expr::gte;
}

pattern_conditions! {
    like => "like", "{}";
    starts_with => "startswith", "{}%";
    ends_with => "endswith", "%{}";
    contains => "contains", "%{}%";
}

/// Recommended name of the `in` condition.
pub const NAME_IN: &str = "in";
/// Recommended name of the `not_in` condition.
pub const NAME_NOT_IN: &str = "notin";
/// Recommended name of the `is_null` condition.
pub const NAME_IS_NULL: &str = "null";
/// Recommended name of the `is_not_null` condition.
pub const NAME_IS_NOT_NULL: &str = "notnull";

/// `in` condition. Every argument becomes one value of the set.
pub fn in_list(field: &str, args: &[&str]) -> Result<Expr> {
    let values = at_least_one(NAME_IN, args)?;
    Ok(expr::in_array(field, values.iter().copied()))
}

/// `notin` condition. Every argument becomes one value of the set.
pub fn not_in_list(field: &str, args: &[&str]) -> Result<Expr> {
    let values = at_least_one(NAME_NOT_IN, args)?;
    Ok(expr::not_in_array(field, values.iter().copied()))
}

/// `null` condition. Arguments are ignored.
pub fn is_null(field: &str, _args: &[&str]) -> Result<Expr> {
    Ok(expr::is_null(field))
}

/// `notnull` condition. Arguments are ignored.
pub fn is_not_null(field: &str, _args: &[&str]) -> Result<Expr> {
    Ok(expr::is_not_null(field))
}

/// Every built-in condition under its recommended name.
pub(crate) fn defaults() -> ConditionMap {
    ConditionMap::new()
        .insert(NAME_EQ, eq)
        .insert(NAME_NEQ, neq)
        .insert(NAME_LT, lt)
        .insert(NAME_LE, le)
        .insert(NAME_GT, gt)
        .insert(NAME_GE, ge)
        .insert(NAME_IN, in_list)
        .insert(NAME_NOT_IN, not_in_list)
        .insert(NAME_LIKE, like)
        .insert(NAME_STARTS_WITH, starts_with)
        .insert(NAME_ENDS_WITH, ends_with)
        .insert(NAME_CONTAINS, contains)
        .insert(NAME_IS_NULL, is_null)
        .insert(NAME_IS_NOT_NULL, is_not_null)
}
