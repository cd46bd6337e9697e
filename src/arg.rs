//! Argument precondition checks
//!
//! Fail-fast validation helpers used at API boundaries. Each failure names
//! the offending parameter so misuse is diagnosable at the call site.

use thiserror::Error;

/// Argument validation failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// A required argument was absent
    #[error("{name} is required")]
    Missing { name: &'static str },

    /// An argument failed a precondition
    #[error("{name}: {message}")]
    Invalid { name: &'static str, message: String },

    /// A sequence argument had no elements
    #[error("{name} may not be empty")]
    Empty { name: &'static str },
}

impl ArgError {
    /// Name of the offending parameter
    pub fn param(&self) -> &'static str {
        match self {
            ArgError::Missing { name } => name,
            ArgError::Invalid { name, .. } => name,
            ArgError::Empty { name } => name,
        }
    }
}

/// Unwrap a required argument, rejecting absence.
pub fn required<T>(value: Option<T>, name: &'static str) -> Result<T, ArgError> {
    value.ok_or(ArgError::Missing { name })
}

/// Check that a precondition on an argument holds.
pub fn ensure(condition: bool, name: &'static str, message: impl Into<String>) -> Result<(), ArgError> {
    if condition {
        Ok(())
    } else {
        Err(ArgError::Invalid {
            name,
            message: message.into(),
        })
    }
}

/// Check that a sequence argument has at least one element.
pub fn not_empty<T>(set: &[T], name: &'static str) -> Result<(), ArgError> {
    if set.is_empty() { Err(ArgError::Empty { name }) } else { Ok(()) }
}
