use thiserror::Error;

/// Custom error type for the ScalarGrad engine and its collaborators.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Domain error in {operation}: input {value} is invalid ({reason})")]
    DomainError {
        operation: String,
        value: f64,
        reason: String,
    },

    #[error("Invalid exponent: {exponent} is not a finite number")]
    InvalidExponent { exponent: f64 },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Non-finite gradient found for parameter {index}")]
    NonFiniteGradient { index: usize },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ScalarGradError>;
