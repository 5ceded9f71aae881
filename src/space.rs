//! Bounded continuous search space.

use crate::error::{Result, RsError};
use rand::Rng;

/// A box-shaped search space: one `(min, max)` interval per dimension.
///
/// Every bound is finite, `min <= max`, and the width `max - min` is
/// finite as well. A dimension with `min == max`
/// is allowed and always samples `min`.
///
/// # Examples
///
/// ```
/// use u_random_search::SearchSpace;
///
/// let space = SearchSpace::uniform(2, -5.0, 5.0).unwrap();
/// assert_eq!(space.dimensions(), 2);
/// assert!(space.contains(&[0.0, 4.9]));
/// assert!(!space.contains(&[0.0, 5.1]));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSpace {
    bounds: Vec<(f64, f64)>,
}

impl SearchSpace {
    /// Creates a search space from explicit per-dimension bounds.
    pub fn new(bounds: Vec<(f64, f64)>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(RsError::EmptySearchSpace);
        }
        for (dimension, &(min, max)) in bounds.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
                return Err(RsError::InvalidBounds {
                    dimension,
                    min,
                    max,
                });
            }
        }
        Ok(Self { bounds })
    }

    /// Creates a search space with the same bounds in every dimension.
    pub fn uniform(dimensions: usize, min: f64, max: f64) -> Result<Self> {
        Self::new(vec![(min, max); dimensions])
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    /// The `(min, max)` interval of each dimension.
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// Whether `x` has the right dimensionality and lies within every bound.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.bounds.len()
            && x
                .iter()
                .zip(&self.bounds)
                .all(|(&v, &(min, max))| v >= min && v <= max)
    }

    /// Draws a point uniformly at random from the space.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.bounds
            .iter()
            .map(|&(min, max)| rng.random_range(min..=max))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(SearchSpace::new(vec![]), Err(RsError::EmptySearchSpace));
        assert_eq!(
            SearchSpace::uniform(0, -1.0, 1.0),
            Err(RsError::EmptySearchSpace)
        );
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let err = SearchSpace::new(vec![(0.0, 1.0), (3.0, 2.0)]).unwrap_err();
        assert_eq!(
            err,
            RsError::InvalidBounds {
                dimension: 1,
                min: 3.0,
                max: 2.0
            }
        );
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(SearchSpace::new(vec![(f64::NEG_INFINITY, 0.0)]).is_err());
        assert!(SearchSpace::new(vec![(0.0, f64::NAN)]).is_err());
    }

    #[test]
    fn test_new_rejects_overflowing_width() {
        let err = SearchSpace::uniform(1, -f64::MAX, f64::MAX).unwrap_err();
        assert_eq!(
            err,
            RsError::InvalidBounds {
                dimension: 0,
                min: -f64::MAX,
                max: f64::MAX
            }
        );
    }

    #[test]
    fn test_wide_space_samples_spread() {
        let space = SearchSpace::uniform(1, -1e300, 1e300).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let samples: Vec<f64> = (0..20).map(|_| space.sample(&mut rng)[0]).collect();
        assert!(samples.iter().all(|&x| space.contains(&[x])));
        assert!(samples.iter().any(|&x| x != 1e300));
        assert!(samples.iter().any(|&x| x < 0.0));
        assert!(samples.iter().any(|&x| x > 0.0));
    }

    #[test]
    fn test_degenerate_dimension_samples_min() {
        let space = SearchSpace::new(vec![(2.5, 2.5), (-1.0, 1.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let x = space.sample(&mut rng);
            assert_eq!(x[0], 2.5);
        }
    }

    #[test]
    fn test_contains_checks_dimensionality() {
        let space = SearchSpace::uniform(3, 0.0, 1.0).unwrap();
        assert!(!space.contains(&[0.5, 0.5]));
        assert!(space.contains(&[0.0, 0.5, 1.0]));
    }

    proptest! {
        #[test]
        fn prop_samples_stay_in_bounds(
            seed in any::<u64>(),
            dims in 1usize..8,
            min in -1e6f64..1e6,
            width in 0.0f64..1e6,
        ) {
            let space = SearchSpace::uniform(dims, min, min + width).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..20 {
                let x = space.sample(&mut rng);
                prop_assert_eq!(x.len(), dims);
                prop_assert!(space.contains(&x));
            }
        }
    }
}
