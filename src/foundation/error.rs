/// Convenience result type used across the engine.
pub type TraceResult<T> = Result<T, TraceError>;

/// Top-level error taxonomy for the tracing pipeline.
///
/// Every failure aborts the remaining pipeline immediately; the engine never
/// retries internally and never returns partial results on error.
#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    /// Invalid caller-provided options or footprint.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source bytes could not be interpreted as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// No foreground/background boundary was found, or filtering eliminated
    /// every candidate contour.
    #[error("no contours: {0}")]
    NoContours(String),

    /// The serialized output exceeds the path-command ceiling.
    #[error("too complex: {0}")]
    TooComplex(String),

    /// The scheduler requested an abort at a cooperative checkpoint.
    #[error("trace cancelled")]
    Cancelled,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TraceError {
    /// Build a [`TraceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TraceError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TraceError::NoContours`] value.
    pub fn no_contours(msg: impl Into<String>) -> Self {
        Self::NoContours(msg.into())
    }

    /// Build a [`TraceError::TooComplex`] value.
    pub fn too_complex(msg: impl Into<String>) -> Self {
        Self::TooComplex(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
