use thiserror::Error;

/// The clause a field was rejected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    /// The SELECT column list
    Select,
    /// The ORDER BY list
    Sort,
}

impl core::fmt::Display for Clause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Clause::Select => "selection",
            Clause::Sort => "sorting",
        })
    }
}

#[derive(Debug, Error)]
pub enum ResqlError {
    /// A filter operation name has no registered constructor
    #[error("filter {operation:?} is not defined")]
    UndefinedOperation { operation: String },

    /// A requested select or sort field is not in its allow-set
    #[error("field {field:?} not allowed for {clause} criteria")]
    FieldNotAllowed { field: String, clause: Clause },

    /// The field cannot be filtered at all, or not with this operation
    #[error("{}", filtering_message(.field, .operation.as_deref()))]
    FilteringNotPermitted {
        field: String,
        operation: Option<String>,
    },

    /// A field name has no entry in the translator's lookup table
    #[error("failed to translate format of the {entry:?} entry because {reason}")]
    Translation { entry: String, reason: String },

    /// A condition constructor rejected its arguments
    #[error("filter {operation:?} got invalid arguments: {reason}")]
    InvalidArguments { operation: String, reason: String },

    /// Structural violation found while rendering
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Failure reported by an extension hook, displayed as-is
    #[error("{0}")]
    Extension(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Structural errors raised while rendering nodes or a whole statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("select must have at least one column")]
    MissingColumns,

    #[error("'{operator}' condition requires at least one value for field {field}")]
    EmptyValueSet {
        field: String,
        operator: &'static str,
    },

    #[error("'{operator}' requires at least one condition")]
    EmptyGroup { operator: &'static str },

    #[error("raw fragment has {markers} placeholder(s) but {params} argument(s)")]
    PlaceholderMismatch { markers: usize, params: usize },
}

fn filtering_message(field: &str, operation: Option<&str>) -> String {
    match operation {
        Some(operation) => {
            format!("filter {operation:?} cannot be applied to the field {field:?}")
        }
        None => format!("filters cannot be applied to the field {field:?}"),
    }
}

impl ResqlError {
    /// Wraps an arbitrary error coming out of an extension hook.
    pub fn extension(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ResqlError::Extension(error.into())
    }

    /// Returns true when the failure stems from the request rather than from configuration.
    ///
    /// HTTP layers map these to a "bad request" response. Statements without columns,
    /// empty groups and malformed raw fragments are integration mistakes and return false.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            ResqlError::Render(
                RenderError::MissingColumns
                    | RenderError::EmptyGroup { .. }
                    | RenderError::PlaceholderMismatch { .. }
            )
        )
    }
}

/// Result type for resql operations
pub type Result<T> = std::result::Result<T, ResqlError>;
