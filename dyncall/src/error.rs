// Error handling for the invocation pipeline.

use crate::types::TypeExpr;
use crate::values::Value;
use std::fmt;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Failures produced by the resolve/coerce/invoke pipeline.
///
/// Every variant is fatal to its step and returned immediately; there is no
/// retry logic anywhere in this layer. Failures raised by an invoked
/// callable itself are carried through unmodified (typically as `Generic`),
/// never reinterpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Requested callable does not exist on the owner.
    NotFound { owner: String, name: String },

    /// Supplied argument count disagrees with the declared parameter count.
    ArityMismatch {
        function: String,
        expected: String,
        actual: usize,
    },

    /// A supplied sequence cannot be reconciled with a differently-shaped
    /// declared sequence type without data loss.
    TypeMismatch {
        expected: TypeExpr,
        actual: TypeExpr,
        position: usize,
    },

    /// The type converter could not produce the declared type from the
    /// supplied value.
    ConversionError {
        value: Value,
        target: TypeExpr,
        cause: String,
    },

    Generic(String),
}

impl RuntimeError {
    pub fn new(message: &str) -> RuntimeError {
        RuntimeError::Generic(message.to_string())
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::NotFound { owner, name } => {
                write!(f, "failed to lookup {}.{}", owner, name)
            }
            RuntimeError::ArityMismatch {
                function,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Arity mismatch in {}: expected {}, got {}",
                    function, expected, actual
                )
            }
            RuntimeError::TypeMismatch {
                expected,
                actual,
                position,
            } => {
                write!(
                    f,
                    "Incompatible types at position {}: expected {}, but had {}",
                    position, expected, actual
                )
            }
            RuntimeError::ConversionError {
                value,
                target,
                cause,
            } => {
                write!(
                    f,
                    "failed to convert {} to {} due to {}",
                    value, target, cause
                )
            }
            RuntimeError::Generic(message) => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for RuntimeError {}
