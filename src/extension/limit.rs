use super::{Extension, extension};

/// Sets `limit` unless something before it already set one.
pub fn default_limit(limit: u64) -> Extension {
    extension(move |_, _, builder| {
        if builder.limit_value().is_none() {
            builder.limit(limit);
        }
        Ok(())
    })
}
