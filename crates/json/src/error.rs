//! JSON facade error type.

use thiserror::Error;

/// The one failure mode of the facade: input the native parser rejects,
/// or a payload whose root is not an object or an array.
///
/// Carries the parser diagnostic plus the offending text verbatim, so
/// callers can report the failure without retaining the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("error parsing JSON: {message}\n{text}")]
    InvalidInput { message: String, text: String },
}
