//! Error types for the tour.
//!
//! - [`RuntimeError`] - Errors raised while a step executes
//! - [`StepError`] - A runtime error tagged with the step that raised it

use thiserror::Error;

/// Errors that occur while a demonstration step executes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Division (or modulo) with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Lookup of a name that was never bound
    #[error("undefined name '{name}'")]
    UndefinedName {
        /// The name that could not be resolved
        name: String,
    },

    /// List index past the end of the list
    #[error("list index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Length of the indexed list
        len: usize,
    },

    /// Operation applied to a value of the wrong type
    #[error("type mismatch: {message}")]
    TypeMismatch {
        /// Description of the mismatch
        message: String,
    },

    /// Invalid argument to a helper
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The output sink rejected a write
    #[error("failed to write output: {0}")]
    Output(String),
}

impl RuntimeError {
    /// Create an UndefinedName error.
    pub fn undefined_name(name: impl Into<String>) -> Self {
        RuntimeError::UndefinedName { name: name.into() }
    }

    /// Create a TypeMismatch error.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        RuntimeError::TypeMismatch {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RuntimeError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this is a name-resolution failure.
    pub fn is_name_resolution(&self) -> bool {
        matches!(self, RuntimeError::UndefinedName { .. })
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self {
        RuntimeError::Output(err.to_string())
    }
}

/// A step failure that escaped the step's own error handling.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("step '{step}' failed: {source}")]
pub struct StepError {
    /// Id of the failing step
    pub step: &'static str,
    /// The underlying runtime error
    #[source]
    pub source: RuntimeError,
}

impl StepError {
    /// Tag a runtime error with the step that raised it.
    pub fn new(step: &'static str, source: RuntimeError) -> Self {
        Self { step, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_display() {
        assert_eq!(RuntimeError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_undefined_name_display() {
        let err = RuntimeError::undefined_name("arreglo");
        assert_eq!(err.to_string(), "undefined name 'arreglo'");
        assert!(err.is_name_resolution());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RuntimeError = io.into();
        assert!(matches!(err, RuntimeError::Output(ref m) if m.contains("pipe closed")));
    }

    #[test]
    fn test_step_error_display() {
        let err = StepError::new("undefined-reference", RuntimeError::undefined_name("arreglo"));
        assert_eq!(
            err.to_string(),
            "step 'undefined-reference' failed: undefined name 'arreglo'"
        );
    }
}
