//! Ready-made problems.
//!
//! [`Sphere`] is the squaring-sum benchmark used throughout the crate's
//! docs and the CLI. [`FnProblem`] turns any closure into an
//! [`RsProblem`] for quick experiments.

use crate::error::Result;
use crate::random_search::RsProblem;
use crate::space::SearchSpace;

/// The squaring-sum (sphere) function: `f(x) = sum(x_i^2)`.
///
/// Its minimum is 0 at the origin. With an optimum tolerance set, any
/// best cost at or below the tolerance counts as optimal and ends the run.
///
/// # Examples
///
/// ```
/// use u_random_search::problems::Sphere;
/// use u_random_search::RsProblem;
///
/// let sphere = Sphere::new(2, -5.0, 5.0).unwrap();
/// assert_eq!(sphere.cost(&[3.0, 4.0]), 25.0);
/// assert!(!sphere.is_optimal(0.0));
///
/// let sphere = sphere.with_optimum_tolerance(1e-2);
/// assert!(sphere.is_optimal(0.005));
/// ```
#[derive(Debug, Clone)]
pub struct Sphere {
    space: SearchSpace,
    optimum_tolerance: Option<f64>,
}

impl Sphere {
    /// Creates a sphere problem with `[min, max]` bounds in every dimension.
    pub fn new(dimensions: usize, min: f64, max: f64) -> Result<Self> {
        Ok(Self::with_space(SearchSpace::uniform(dimensions, min, max)?))
    }

    /// Creates a sphere problem over an arbitrary search space.
    pub fn with_space(space: SearchSpace) -> Self {
        Self {
            space,
            optimum_tolerance: None,
        }
    }

    /// Treats any cost at or below `tolerance` as optimal.
    pub fn with_optimum_tolerance(mut self, tolerance: f64) -> Self {
        self.optimum_tolerance = Some(tolerance);
        self
    }
}

impl RsProblem for Sphere {
    fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    fn cost(&self, x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    fn is_optimal(&self, best_cost: f64) -> bool {
        self.optimum_tolerance
            .is_some_and(|tolerance| best_cost <= tolerance)
    }
}

/// Adapts a closure into an [`RsProblem`].
///
/// ```
/// use u_random_search::problems::FnProblem;
/// use u_random_search::{RsConfig, RsRunner, SearchSpace};
///
/// let space = SearchSpace::uniform(1, 0.0, 10.0).unwrap();
/// let problem = FnProblem::new(space, |x: &[f64]| (x[0] - 3.0).abs());
///
/// let result = RsRunner::run(&problem, &RsConfig::default().with_seed(1)).unwrap();
/// assert!(result.best_cost < 1.0);
/// ```
pub struct FnProblem<F> {
    space: SearchSpace,
    objective: F,
}

impl<F> FnProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    pub fn new(space: SearchSpace, objective: F) -> Self {
        Self { space, objective }
    }
}

impl<F> RsProblem for FnProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    fn cost(&self, x: &[f64]) -> f64 {
        (self.objective)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_search::{RsConfig, RsRunner, StopReason};
    use crate::RsError;

    #[test]
    fn test_sphere_cost() {
        let sphere = Sphere::new(3, -1.0, 1.0).unwrap();
        assert_eq!(sphere.cost(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(sphere.cost(&[1.0, -1.0, 0.5]), 2.25);
    }

    #[test]
    fn test_sphere_invalid_bounds() {
        let err = Sphere::new(2, 5.0, -5.0).unwrap_err();
        assert!(matches!(err, RsError::InvalidBounds { dimension: 0, .. }));
    }

    #[test]
    fn test_sphere_space() {
        let sphere = Sphere::new(2, -5.0, 5.0).unwrap();
        assert_eq!(sphere.search_space().bounds(), &[(-5.0, 5.0), (-5.0, 5.0)]);
    }

    #[test]
    fn test_sphere_tolerance_stops_run() {
        let sphere = Sphere::new(2, -5.0, 5.0)
            .unwrap()
            .with_optimum_tolerance(0.5);
        let config = RsConfig::default().with_max_iterations(100_000).with_seed(42);

        let result = RsRunner::run(&sphere, &config).unwrap();

        assert_eq!(result.stop_reason, StopReason::Optimal);
        assert!(result.best_cost <= 0.5);
    }

    #[test]
    fn test_fn_problem_maximization_by_negation() {
        let space = SearchSpace::uniform(2, 0.0, 1.0).unwrap();
        let problem = FnProblem::new(space, |x: &[f64]| -(x[0] + x[1]));
        let config = RsConfig::default().with_max_iterations(1000).with_seed(5);

        let result = RsRunner::run(&problem, &config).unwrap();

        assert!(result.best_cost < -1.8, "got {}", result.best_cost);
    }
}
