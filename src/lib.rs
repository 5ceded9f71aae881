//! Random search metaheuristic.
//!
//! Samples candidate vectors uniformly at random from a bounded search
//! space and retains the best-scoring one, stopping at an iteration cap or
//! when an optimality check passes.
//!
//! - [`SearchSpace`]: per-dimension bounds and uniform sampling.
//! - [`RsProblem`]: the user-implemented objective and optimality check.
//! - [`RsConfig`] / [`RsRunner`] / [`RsResult`]: configure, run, inspect.
//! - [`problems`]: the squaring-sum benchmark and a closure adapter.
//!
//! # Example
//!
//! ```
//! use u_random_search::problems::Sphere;
//! use u_random_search::{RsConfig, RsRunner};
//!
//! let problem = Sphere::new(2, -5.0, 5.0)?;
//! let result = RsRunner::run(&problem, &RsConfig::default().with_seed(42))?;
//! assert!(result.best_cost <= result.cost_history[0]);
//! # Ok::<(), u_random_search::RsError>(())
//! ```
//!
//! Random search minimizes. The search is single-threaded and
//! deterministic for a given seed.

pub mod error;
pub mod problems;
pub mod random_search;
pub mod space;

pub use error::{Result, RsError};
pub use random_search::{Candidate, RsConfig, RsProblem, RsResult, RsRunner, StopReason};
pub use space::SearchSpace;
