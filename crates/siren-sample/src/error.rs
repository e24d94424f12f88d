//! Error types for the sample resources.

use thiserror::Error;

/// Errors raised by the sample resource handlers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SampleError {
    /// The handler does not answer this verb.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// A required argument was missing or had the wrong type.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
