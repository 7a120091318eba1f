mod chunk;

use std::borrow::Cow;
use std::fmt::Write;

use smallvec::SmallVec;

use crate::dialect::{Dialect, write_placeholder};
use crate::error::RenderError;
use crate::Value;
pub use chunk::*;

/// Marker that stands for one argument inside raw SQL text.
pub const PLACEHOLDER_MARKER: char = '?';

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation. A fragment is dialect-agnostic until it is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SQL {
    pub chunks: SmallVec<[SQLChunk; 8]>,
}

impl SQL {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single parameter value
    #[inline]
    pub fn param(value: impl Into<Value>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Param(value.into())],
        }
    }

    /// Creates a comma-separated list of parameters: `?,?,?`.
    pub fn param_list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let iter = values.into_iter();
        let (lower, _) = iter.size_hint();
        let mut chunks = SmallVec::with_capacity(lower.saturating_mul(2));
        for (i, v) in iter.enumerate() {
            if i > 0 {
                chunks.push(SQLChunk::raw_static(","));
            }
            chunks.push(SQLChunk::Param(v.into()));
        }
        SQL { chunks }
    }

    /// Splits caller-supplied SQL text on `?` markers and binds one value per marker.
    ///
    /// Fails when the number of markers differs from the number of values, since the
    /// rendered arguments would no longer line up with the placeholders.
    pub fn raw_with_params<I>(text: &str, params: I) -> Result<Self, RenderError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut params = params.into_iter();
        let mut chunks = SmallVec::new();
        let mut markers = 0usize;
        let mut bound = 0usize;
        let mut segments = text.split(PLACEHOLDER_MARKER).peekable();

        while let Some(segment) = segments.next() {
            if !segment.is_empty() {
                chunks.push(SQLChunk::Raw(Cow::Owned(segment.to_owned())));
            }
            if segments.peek().is_some() {
                markers += 1;
                if let Some(value) = params.next() {
                    chunks.push(SQLChunk::Param(value.into()));
                    bound += 1;
                }
            }
        }

        let extra = params.count();
        if markers != bound || extra > 0 {
            return Err(RenderError::PlaceholderMismatch {
                markers,
                params: bound + extra,
            });
        }
        Ok(SQL { chunks })
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL>) -> Self {
        self.append_mut(other);
        self
    }

    #[inline]
    pub fn append_mut(&mut self, other: impl Into<SQL>) {
        let other = other.into();

        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        if other.chunks.is_empty() {
            return;
        }

        self.chunks.extend(other.chunks);
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    #[inline]
    pub fn push_mut(&mut self, chunk: impl Into<SQLChunk>) {
        self.chunks.push(chunk.into());
    }

    // ==================== combinators ====================

    /// Joins SQL fragments with a separator.
    ///
    /// Fragments that render no text are skipped entirely, so no separator is
    /// written for them. They cannot carry arguments, since every argument is
    /// written as a placeholder.
    pub fn join<I>(sqls: I, separator: &'static str) -> SQL
    where
        I: IntoIterator<Item = SQL>,
    {
        crate::resql_profile_scope!("sql_render", "join");

        let mut result = SQL::empty();
        let mut first = true;
        for sql in sqls {
            if sql.is_empty() {
                continue;
            }
            if !first {
                result.chunks.push(SQLChunk::raw_static(separator));
            }
            result.chunks.extend(sql.chunks);
            first = false;
        }
        result
    }

    /// Wrap in parentheses: (self)
    #[inline]
    pub fn parens(self) -> Self {
        SQL::raw("(").append(self).push(")")
    }

    // ==================== output methods ====================

    /// Returns true if this fragment renders to an empty string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(SQLChunk::is_blank)
    }

    /// Returns an iterator over the bound values, in placeholder order.
    pub fn params(&self) -> impl Iterator<Item = &Value> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            SQLChunk::Param(value) => Some(value),
            SQLChunk::Raw(_) => None,
        })
    }

    /// Number of placeholders this fragment renders.
    pub fn param_count(&self) -> usize {
        self.params().count()
    }

    /// Returns the SQL string with `?` placeholders.
    pub fn sql(&self) -> String {
        self.sql_for(Dialect::default())
    }

    /// Returns the SQL string with dialect-appropriate placeholders.
    pub fn sql_for(&self, dialect: Dialect) -> String {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(64));
        self.write_to(&mut buf, dialect);
        buf
    }

    /// Write SQL to a buffer with dialect-appropriate placeholders.
    pub fn write_to(&self, buf: &mut impl Write, dialect: Dialect) {
        let mut param_index = 1usize;
        for chunk in &self.chunks {
            match chunk {
                SQLChunk::Param(_) => {
                    write_placeholder(dialect, param_index, buf);
                    param_index += 1;
                }
                SQLChunk::Raw(_) => chunk.write_raw(buf),
            }
        }
    }

    /// Generates the SQL string and collects the arguments in a single pass.
    pub fn build(&self, dialect: Dialect) -> (String, Vec<Value>) {
        crate::resql_profile_scope!("sql_render", "build");

        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(64));
        let mut params = Vec::new();
        for chunk in &self.chunks {
            match chunk {
                SQLChunk::Param(value) => {
                    params.push(value.clone());
                    write_placeholder(dialect, params.len(), &mut buf);
                }
                SQLChunk::Raw(_) => chunk.write_raw(&mut buf),
            }
        }
        (buf, params)
    }

    /// Like [`SQL::build`], but moves the arguments out instead of cloning them.
    pub fn into_parts(self, dialect: Dialect) -> (String, Vec<Value>) {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(64));
        let mut params = Vec::new();
        for chunk in self.chunks {
            match chunk {
                SQLChunk::Param(value) => {
                    params.push(value);
                    write_placeholder(dialect, params.len(), &mut buf);
                }
                SQLChunk::Raw(text) => buf.push_str(&text),
            }
        }
        (buf, params)
    }
}

// ==================== trait implementations ====================

impl From<&'static str> for SQL {
    fn from(s: &'static str) -> Self {
        SQL::raw(s)
    }
}

impl From<String> for SQL {
    fn from(s: String) -> Self {
        SQL::raw(s)
    }
}

impl From<SQLChunk> for SQL {
    fn from(chunk: SQLChunk) -> Self {
        SQL {
            chunks: smallvec::smallvec![chunk],
        }
    }
}

impl core::fmt::Display for SQL {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let params: Vec<_> = self.params().collect();
        write!(f, r#"sql: "{}", params: {:?}"#, self.sql(), params)
    }
}

impl FromIterator<SQLChunk> for SQL {
    fn from_iter<I: IntoIterator<Item = SQLChunk>>(iter: I) -> Self {
        Self {
            chunks: SmallVec::from_iter(iter),
        }
    }
}

impl IntoIterator for SQL {
    type Item = SQLChunk;
    type IntoIter = smallvec::IntoIter<[SQLChunk; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
