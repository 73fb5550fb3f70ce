use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Target must be a finite number, got {0}")]
    NonFiniteTarget(f64),
    #[error("Source numbers must be finite, got {0}")]
    NonFiniteNumber(f64),
}
