//! Profiling hooks for SQL rendering and statement building
//!
//! Scopes are recorded with the puffin profiler when the "profiling" feature is
//! enabled in the calling crate, and compile to nothing otherwise.

/// Profiling scope for a named operation within a category.
///
/// ```ignore
/// resql_profile_scope!("sql_render", "build");
/// ```
#[macro_export]
macro_rules! resql_profile_scope {
    ($category:literal, $operation:literal) => {
        #[cfg(feature = "profiling")]
        ::puffin::profile_scope!($category, $operation);
    };
}
