//! Error types for the benchmark function catalogue.
//!
//! Structured error handling for registration, lookup and evaluation,
//! using `thiserror` for the library error type with helper methods for
//! error categorization.

use thiserror::Error;

/// Errors raised by the catalogue framework.
///
/// Malformed evaluator calls (`EmptyInput`, `DimensionMismatch`,
/// `DimensionTooSmall`) are raised synchronously before any computation.
/// NaN or infinite coordinates are *not* errors: they propagate through the
/// formula as ordinary floating-point values.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input vector is empty; a dimension is required.
    #[error("{name}: empty input vector, dimension required")]
    EmptyInput {
        /// Name of the function being evaluated
        name: &'static str,
    },

    /// Input length does not match a fixed-arity function's dimension.
    #[error("{name}: dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the function being evaluated
        name: &'static str,
        /// The function's fixed dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// Requested dimension is below a scalable function's minimum.
    #[error("{name}: dimension {got} below minimum {min_dim}")]
    DimensionTooSmall {
        /// Name of the function being evaluated
        name: &'static str,
        /// Minimum dimension the function accepts
        min_dim: usize,
        /// Actual dimension provided
        got: usize,
    },

    /// One or more declared property tags are not in the closed vocabulary.
    #[error("unknown property tags: {}", tags.join(", "))]
    UnknownProperty {
        /// Every offending tag, in declaration order
        tags: Vec<String>,
    },

    /// A record with this name is already registered.
    #[error("duplicate registration for \"{name}\"")]
    DuplicateName {
        /// The colliding name
        name: String,
    },

    /// The registration key and the record's metadata name differ.
    #[error("registration key \"{key}\" does not match metadata name \"{name}\"")]
    NameMismatch {
        /// Key passed to `register`
        key: String,
        /// Name carried by the metadata record
        name: String,
    },

    /// No record is registered under this name.
    #[error("no test function registered under \"{name}\"")]
    NotFound {
        /// The requested name
        name: String,
    },
}

/// A specialized `Result` type for catalogue operations.
pub type Result<T> = std::result::Result<T, BenchError>;

impl BenchError {
    /// Returns `true` if this is a malformed-call error raised by an
    /// evaluator (empty input or a dimension problem).
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            BenchError::EmptyInput { .. }
                | BenchError::DimensionMismatch { .. }
                | BenchError::DimensionTooSmall { .. }
        )
    }

    /// Returns `true` if this is a registry-integrity error.
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            BenchError::DuplicateName { .. }
                | BenchError::NameMismatch { .. }
                | BenchError::NotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BenchError::DimensionMismatch {
            name: "booth",
            expected: 2,
            got: 5,
        };
        assert_eq!(err.to_string(), "booth: dimension mismatch: expected 2, got 5");

        let err = BenchError::UnknownProperty {
            tags: vec!["smooth".to_string(), "spiky".to_string()],
        };
        assert_eq!(err.to_string(), "unknown property tags: smooth, spiky");
    }

    #[test]
    fn test_is_argument_error() {
        let arg_err = BenchError::EmptyInput { name: "sphere" };
        let reg_err = BenchError::NotFound {
            name: "sphere".to_string(),
        };

        assert!(arg_err.is_argument_error());
        assert!(!reg_err.is_argument_error());
    }

    #[test]
    fn test_is_registry_error() {
        let reg_err = BenchError::DuplicateName {
            name: "ackley".to_string(),
        };
        let arg_err = BenchError::DimensionTooSmall {
            name: "ackley",
            min_dim: 2,
            got: 1,
        };

        assert!(reg_err.is_registry_error());
        assert!(!arg_err.is_registry_error());
    }
}
