use std::borrow::Cow;
use std::fmt::Write;

use crate::Value;

/// A SQL chunk represents a part of a rendered statement.
///
/// - `Raw` - SQL text written verbatim (keywords, identifiers, punctuation)
/// - `Param` - a bound value, written as the dialect's placeholder
///
/// Values only ever enter a statement through `Param`, so the placeholders in the
/// rendered text and the collected argument list always line up.
#[derive(Debug, Clone, PartialEq)]
pub enum SQLChunk {
    /// Raw SQL text (unquoted)
    /// Renders as: text (as-is)
    Raw(Cow<'static, str>),

    /// Parameter value
    /// Renders as: ? or $1 depending on the dialect
    Param(Value),
}

impl SQLChunk {
    /// Creates raw SQL text from a static string - const
    #[inline]
    pub const fn raw_static(text: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(text))
    }

    /// Creates raw SQL text from a runtime string
    #[inline]
    pub fn raw(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Raw(text.into())
    }

    /// Creates a parameter chunk
    #[inline]
    pub fn param(value: impl Into<Value>) -> Self {
        Self::Param(value.into())
    }

    /// Returns true if this chunk writes no text at all.
    #[inline]
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, SQLChunk::Raw(text) if text.is_empty())
    }

    /// Write raw chunk content to buffer. Params are written by the caller,
    /// which owns the placeholder counter.
    pub(crate) fn write_raw(&self, buf: &mut impl Write) {
        if let SQLChunk::Raw(text) = self {
            let _ = buf.write_str(text);
        }
    }
}

// ==================== From implementations ====================

impl From<&'static str> for SQLChunk {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::raw_static(value)
    }
}

impl From<String> for SQLChunk {
    #[inline]
    fn from(value: String) -> Self {
        Self::Raw(Cow::Owned(value))
    }
}

impl From<Value> for SQLChunk {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Param(value)
    }
}
