//! Extension hooks run after the statement has been assembled.
//!
//! An extension receives the cancellation context, the query and the accumulator,
//! and may mutate the accumulator further. Extensions run in registration order and
//! the first failure aborts the build.

mod limit;
mod pagination;

use std::sync::Arc;

use resql_core::{Result, SelectBuilder};
use tokio_util::sync::CancellationToken;

use crate::query::Query;

pub use limit::default_limit;
pub use pagination::{PaginationError, limit_number_pagination, limit_offset_pagination};

/// Post-processing hook applied to the accumulator of every build.
pub type Extension =
    Arc<dyn Fn(&CancellationToken, &Query, &mut SelectBuilder) -> Result<()> + Send + Sync>;

/// Wraps a closure as an [`Extension`].
pub fn extension<F>(hook: F) -> Extension
where
    F: Fn(&CancellationToken, &Query, &mut SelectBuilder) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(hook)
}
