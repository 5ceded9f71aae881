//! Random Search execution loop.
//!
//! # Algorithm
//!
//! 1. Draw a candidate uniformly from the search space and evaluate it
//! 2. If it strictly beats the retained best (or there is none yet), keep it
//! 3. Stop if the retained best passes the optimality check
//! 4. Repeat until the iteration budget is spent

use super::config::RsConfig;
use super::types::{Candidate, RsProblem};
use crate::error::{Result, RsError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

/// Why a Random Search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The iteration budget was exhausted.
    MaxIterations,
    /// The retained best passed the optimality check.
    Optimal,
}

/// Result of a Random Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RsResult {
    /// The best candidate vector found.
    pub best: Vec<f64>,

    /// Cost of the best candidate.
    pub best_cost: f64,

    /// Number of candidates sampled and evaluated.
    pub iterations: usize,

    /// Iteration (0-based) at which the best candidate was sampled.
    pub best_iteration: usize,

    /// Number of times the retained best changed, including the first candidate.
    pub improvements: usize,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the Random Search algorithm.
pub struct RsRunner;

impl RsRunner {
    /// Runs Random Search optimization.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_random_search::problems::Sphere;
    /// use u_random_search::{RsConfig, RsRunner, StopReason};
    ///
    /// let problem = Sphere::new(2, -5.0, 5.0).unwrap();
    /// let config = RsConfig::default().with_max_iterations(500).with_seed(42);
    ///
    /// let result = RsRunner::run(&problem, &config).unwrap();
    /// assert_eq!(result.iterations, 500);
    /// assert_eq!(result.stop_reason, StopReason::MaxIterations);
    /// assert!(result.best_cost < 1.0);
    /// ```
    pub fn run<P: RsProblem>(problem: &P, config: &RsConfig) -> Result<RsResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let space = problem.search_space();
        debug!(
            dimensions = space.dimensions(),
            max_iterations = config.max_iterations,
            seed = ?config.seed,
            "starting random search"
        );

        // Iteration 0 seeds the best-so-far.
        let mut best = evaluate(problem, space.sample(&mut rng), 0)?;
        let mut best_cost = cost_of(&best);
        let mut best_iteration = 0usize;
        let mut improvements = 1usize;
        let mut iterations = 1usize;

        let mut cost_history = Vec::with_capacity(config.max_iterations);
        cost_history.push(best_cost);
        trace!(iteration = 0usize, best_cost);
        problem.on_iteration(0, best_cost);

        let mut stop_reason = StopReason::MaxIterations;
        if reached_optimum(problem, config, best_cost) {
            stop_reason = StopReason::Optimal;
        }

        while stop_reason == StopReason::MaxIterations && iterations < config.max_iterations {
            let iteration = iterations;
            let candidate = evaluate(problem, space.sample(&mut rng), iteration)?;

            if candidate.is_better_than(&best) == Some(true) {
                best = candidate;
                best_cost = cost_of(&best);
                best_iteration = iteration;
                improvements += 1;
                trace!(iteration, best_cost, "improved");
            }

            iterations += 1;
            cost_history.push(best_cost);
            trace!(iteration, best_cost);
            problem.on_iteration(iteration, best_cost);

            if reached_optimum(problem, config, best_cost) {
                stop_reason = StopReason::Optimal;
            }
        }

        debug!(
            iterations,
            best_cost,
            best_iteration,
            improvements,
            ?stop_reason,
            "random search finished"
        );

        Ok(RsResult {
            best: best.vector,
            best_cost,
            iterations,
            best_iteration,
            improvements,
            stop_reason,
            cost_history,
        })
    }
}

/// Scores `x` and wraps it in a [`Candidate`]. NaN costs abort the run.
fn evaluate<P: RsProblem>(problem: &P, x: Vec<f64>, iteration: usize) -> Result<Candidate> {
    let cost = problem.cost(&x);
    if cost.is_nan() {
        return Err(RsError::InvalidCost { iteration, cost });
    }
    Ok(Candidate::evaluated(x, cost))
}

fn cost_of(candidate: &Candidate) -> f64 {
    candidate.cost().unwrap_or(f64::INFINITY)
}

fn reached_optimum<P: RsProblem>(problem: &P, config: &RsConfig, best_cost: f64) -> bool {
    config.target_cost.is_some_and(|target| best_cost <= target) || problem.is_optimal(best_cost)
}
