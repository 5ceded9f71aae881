//! Random Search (RS).
//!
//! The simplest stochastic metaheuristic. Each iteration draws a candidate
//! uniformly at random from a bounded search space, evaluates it, and keeps
//! it if it beats the best seen so far. Consecutive samples are
//! independent, so the search has no notion of neighborhood or memory
//! beyond the retained best.
//!
//! The run ends after a fixed number of iterations, or earlier when the
//! retained best passes an optimality check.
//!
//! # References
//!
//! - Brooks, S. H. (1958), "A Discussion of Random Methods for Seeking Maxima"
//! - Rastrigin, L. A. (1963), "The Convergence of the Random Search Method in
//!   the External Control of a Many-Parameter System"

mod config;
mod runner;
mod types;

pub use config::RsConfig;
pub use runner::{RsResult, RsRunner, StopReason};
pub use types::{Candidate, RsProblem};
