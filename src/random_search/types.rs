//! Core trait and candidate type for Random Search.

use crate::space::SearchSpace;
use std::cmp::Ordering;

/// Defines a Random Search problem.
///
/// The user supplies the search space and the cost function. The runner
/// handles sampling, best-so-far tracking and termination.
///
/// # Minimization
///
/// Random Search minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct Rosenbrock { space: SearchSpace }
///
/// impl RsProblem for Rosenbrock {
///     fn search_space(&self) -> &SearchSpace {
///         &self.space
///     }
///
///     fn cost(&self, x: &[f64]) -> f64 {
///         x.windows(2)
///             .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
///             .sum()
///     }
/// }
/// ```
pub trait RsProblem: Send + Sync {
    /// The bounded region candidates are drawn from.
    fn search_space(&self) -> &SearchSpace;

    /// Computes the cost of a candidate vector. Lower is better.
    ///
    /// `x` always has `search_space().dimensions()` components and lies
    /// inside the bounds. Returning NaN aborts the run with an error;
    /// infinities are accepted as penalties.
    fn cost(&self, x: &[f64]) -> f64;

    /// Optimality check on the retained best cost.
    ///
    /// Returning `true` ends the run early. The default never stops early.
    fn is_optimal(&self, _best_cost: f64) -> bool {
        false
    }

    /// Called at the end of each iteration with the retained best cost.
    ///
    /// Useful for progress reporting. The default implementation is a no-op.
    fn on_iteration(&self, _iteration: usize, _best_cost: f64) {}
}

/// A point in the search space together with its (possibly unset) cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// The candidate vector.
    pub vector: Vec<f64>,
    cost: Option<f64>,
}

impl Candidate {
    /// Creates an unevaluated candidate.
    pub fn new(vector: Vec<f64>) -> Self {
        Self { vector, cost: None }
    }

    /// Creates a candidate with a known cost.
    pub fn evaluated(vector: Vec<f64>, cost: f64) -> Self {
        Self {
            vector,
            cost: Some(cost),
        }
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = Some(cost);
    }

    pub fn is_evaluated(&self) -> bool {
        self.cost.is_some()
    }

    /// Orders two candidates by cost.
    ///
    /// Returns `None` when either candidate is unevaluated or the costs are
    /// incomparable (NaN).
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use u_random_search::Candidate;
    ///
    /// let a = Candidate::evaluated(vec![0.0], 1.0);
    /// let b = Candidate::evaluated(vec![1.0], 2.0);
    /// assert_eq!(a.compare(&b), Some(Ordering::Less));
    /// assert_eq!(a.compare(&Candidate::new(vec![2.0])), None);
    /// ```
    pub fn compare(&self, other: &Candidate) -> Option<Ordering> {
        self.cost?.partial_cmp(&other.cost?)
    }

    /// Whether this candidate strictly improves on `other`.
    ///
    /// `None` when the comparison is undefined.
    pub fn is_better_than(&self, other: &Candidate) -> Option<bool> {
        self.compare(other).map(|ord| ord == Ordering::Less)
    }
}
