//! Error types for gginterval
//!
//! Construction of layer and geometry specifications is declarative and does
//! not fail on its own; errors surface when a specification is validated
//! against a geometry descriptor (unknown aesthetics, ill-shaped parameter
//! values and the like).

use thiserror::Error;

/// Errors produced when validating layer specifications
#[derive(Debug, Error)]
pub enum GgIntervalError {
    /// A mapping or parameter does not fit the target geometry
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An internal invariant was broken
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, GgIntervalError>;
