//! Defines [`WktError`], representing all errors returned by this crate.

use std::error::Error;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WktError {
    /// Text that does not follow the WKT grammar: unbalanced parentheses, non-numeric
    /// coordinate text, or a coordinate tuple whose arity does not match the header.
    #[error("Mal-formed WKT: {0}")]
    MalformedInput(String),

    /// A geometry type this codec cannot convert in the requested direction.
    #[error("Unsupported geometry type: {0}")]
    UnsupportedType(String),

    /// Wraps an error raised by the [GeometryProvider][crate::provider::GeometryProvider].
    #[error(transparent)]
    Provider(#[from] Box<dyn Error + Send + Sync>),
}

impl WktError {
    pub(crate) fn provider<E: Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Provider(Box::new(err))
    }
}

/// Crate-specific result type.
pub type WktResult<T> = std::result::Result<T, WktError>;
