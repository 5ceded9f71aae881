//! Error type shared by the search space, configuration and runner.

use thiserror::Error;

/// Errors returned by random search operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RsError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("search space must have at least one dimension")]
    EmptySearchSpace,

    #[error("invalid bounds in dimension {dimension}: [{min}, {max}]")]
    InvalidBounds { dimension: usize, min: f64, max: f64 },

    #[error("objective returned {cost} at iteration {iteration}")]
    InvalidCost { iteration: usize, cost: f64 },
}

pub type Result<T> = std::result::Result<T, RsError>;
