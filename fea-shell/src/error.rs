//! Error types for the shell kernel

use thiserror::Error;

use crate::outcome::Degeneracy;

/// Main error type for shell element operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Node '{0}' not found in DOF map")]
    NodeNotFound(String),

    #[error("Expected a vector of length {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Degenerate element: {0}")]
    Degenerate(Degeneracy),

    #[error("Element {index} is degenerate: {reason}")]
    DegenerateElement { index: usize, reason: Degeneracy },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for shell element operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Reject non-finite or non-positive values for strictly positive quantities
pub(crate) fn require_positive(name: &'static str, value: f64) -> ShellResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ShellError::InvalidParameter {
            name,
            value,
            reason: "must be finite and greater than zero",
        })
    }
}

/// Poisson's ratio must satisfy |nu| < 1 for the plane-stress matrices to exist
pub(crate) fn require_poisson(value: f64) -> ShellResult<()> {
    if value.is_finite() && value.abs() < 1.0 {
        Ok(())
    } else {
        Err(ShellError::InvalidParameter {
            name: "nu",
            value,
            reason: "must satisfy |nu| < 1",
        })
    }
}
