//! Random Search configuration.

use crate::error::{Result, RsError};

/// Configuration for the Random Search algorithm.
///
/// # Examples
///
/// ```
/// use u_random_search::RsConfig;
///
/// let config = RsConfig::default()
///     .with_max_iterations(1000)
///     .with_target_cost(1e-3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RsConfig {
    /// Number of candidates to sample (hard budget). Must be positive.
    pub max_iterations: usize,

    /// Stop as soon as the best cost is at or below this value.
    pub target_cost: Option<f64>,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            target_cost: None,
            seed: None,
        }
    }
}

impl RsConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_target_cost(mut self, cost: f64) -> Self {
        self.target_cost = Some(cost);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(RsError::InvalidConfig(
                "max_iterations must be positive".into(),
            ));
        }
        if let Some(target) = self.target_cost {
            if target.is_nan() {
                return Err(RsError::InvalidConfig("target_cost must not be NaN".into()));
            }
        }
        Ok(())
    }
}
