//! Shared type definitions for resql
//!
//! This crate provides the small set of types every resql crate agrees on:
//!
//! - [`Dialect`] - SQL dialect, which decides the placeholder syntax of rendered statements
//! - [`Value`] - an opaque argument value bound to a placeholder
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization
//! - `rusqlite` - Implement `rusqlite::ToSql` for [`Value`]

mod dialect;
mod value;

pub use dialect::Dialect;
pub use value::Value;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Dialect, Value};
}
