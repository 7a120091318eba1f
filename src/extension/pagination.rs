use resql_core::{ResqlError, SelectBuilder};
use thiserror::Error;

use super::{Extension, extension};
use crate::query::Page;

/// Rejected page descriptor. Reaches callers wrapped in [`ResqlError::Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page limit must be unsigned integer, got {0:?}")]
    InvalidLimit(String),

    #[error("page offset must be unsigned integer, got {0:?}")]
    InvalidOffset(String),

    #[error("page number must be positive integer, got {0:?}")]
    InvalidNumber(String),

    #[error("page limit cannot be greater than {0}")]
    LimitTooLarge(u64),

    #[error("page offset cannot be greater than {0}")]
    OffsetTooLarge(u64),

    #[error("offset cannot be used without specifying limit")]
    OffsetWithoutLimit,
}

impl From<PaginationError> for ResqlError {
    fn from(err: PaginationError) -> Self {
        ResqlError::extension(err)
    }
}

/// Page values are 32-bit unsigned decimals, digits only.
fn parse_u32(raw: &str) -> Option<u64> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().map(u64::from)
}

/// An empty value counts as not given.
fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.is_empty())
}

fn check_max(
    value: u64,
    max: Option<u64>,
    err: fn(u64) -> PaginationError,
) -> Result<u64, PaginationError> {
    match max {
        Some(max) if value > max => Err(err(max)),
        _ => Ok(value),
    }
}

fn apply_limit(page: &Page, max_limit: Option<u64>) -> Result<Option<u64>, PaginationError> {
    given(&page.limit)
        .map(|raw| {
            let limit =
                parse_u32(raw).ok_or_else(|| PaginationError::InvalidLimit(raw.to_owned()))?;
            check_max(limit, max_limit, PaginationError::LimitTooLarge)
        })
        .transpose()
}

fn limit_offset(
    page: &Page,
    max_limit: Option<u64>,
    max_offset: Option<u64>,
    builder: &mut SelectBuilder,
) -> Result<(), PaginationError> {
    let limit = apply_limit(page, max_limit)?;
    if let Some(limit) = limit {
        builder.limit(limit);
    }

    if let Some(raw) = given(&page.offset) {
        if limit.is_none() {
            return Err(PaginationError::OffsetWithoutLimit);
        }
        let offset =
            parse_u32(raw).ok_or_else(|| PaginationError::InvalidOffset(raw.to_owned()))?;
        builder.offset(check_max(offset, max_offset, PaginationError::OffsetTooLarge)?);
    }
    Ok(())
}

fn limit_number(
    page: &Page,
    max_limit: Option<u64>,
    builder: &mut SelectBuilder,
) -> Result<(), PaginationError> {
    let Some(limit) = apply_limit(page, max_limit)? else {
        return Ok(());
    };
    builder.limit(limit);

    if let Some(raw) = given(&page.number) {
        let number = parse_u32(raw)
            .filter(|n| *n > 0)
            .ok_or_else(|| PaginationError::InvalidNumber(raw.to_owned()))?;
        // both operands fit in 32 bits, so the product cannot overflow
        if number > 1 {
            builder.offset(limit * (number - 1));
        }
    }
    Ok(())
}

/// Reads `page.limit` and `page.offset`.
///
/// `None` leaves the corresponding value unbounded. An offset without a limit is
/// rejected.
pub fn limit_offset_pagination(max_limit: Option<u64>, max_offset: Option<u64>) -> Extension {
    extension(move |_, query, builder| {
        if let Some(page) = &query.page {
            limit_offset(page, max_limit, max_offset, builder)?;
        }
        Ok(())
    })
}

/// Reads `page.limit` and the 1-based `page.number`.
///
/// Page `n` starts at offset `limit * (n - 1)`. A page number without a limit is
/// ignored.
pub fn limit_number_pagination(max_limit: Option<u64>) -> Extension {
    extension(move |_, query, builder| {
        if let Some(page) = &query.page {
            limit_number(page, max_limit, builder)?;
        }
        Ok(())
    })
}
