//! Tracing utilities for statement building and rendering.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The feature check happens in the crate that invokes the
//! macro, so callers declare their own `tracing` feature.

/// Emit a debug-level tracing event with the dialect, rendered SQL text and parameter count.
///
/// ```ignore
/// resql_trace_query!(dialect, &sql_str, params.len());
/// ```
#[macro_export]
macro_rules! resql_trace_query {
    ($dialect:expr, $sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(dialect = %$dialect, sql = %$sql, params = $param_count, "resql.query");
    };
}

/// Emit a debug-level tracing event for one stage of a resource build.
///
/// ```ignore
/// resql_trace_build!("filters", resource = name, count = filters.len());
/// ```
#[macro_export]
macro_rules! resql_trace_build {
    ($stage:literal $(, $key:ident = $value:expr)* $(,)?) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(stage = $stage, $($key = $value,)* "resql.build");
    };
}

/// Emit a warn-level tracing event when request input is rejected.
///
/// ```ignore
/// resql_trace_reject!(resource, &err);
/// ```
#[macro_export]
macro_rules! resql_trace_reject {
    ($resource:expr, $error:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(resource = %$resource, error = %$error, "resql.rejected");
    };
}
