//! Weighted pools: sampling-with-replacement over an ordered set of values.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::DiceError;

/// An immutable ordered sequence of `(value, weight)` pairs.
///
/// Each draw picks value `i` with probability `weight_i / sum(weights)`. Draws
/// are independent; the pool is never exhausted.
#[derive(Debug, Clone)]
pub struct WeightedPool<T> {
    values: Vec<T>,
    weights: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl<T> WeightedPool<T> {
    /// Creates a pool from parallel value and weight sequences.
    ///
    /// # Errors
    /// [`DiceError::InvalidPool`] if the sequences differ in length, are empty,
    /// or any weight is not a finite number greater than zero.
    pub fn new(values: Vec<T>, weights: Vec<f64>) -> Result<Self, DiceError> {
        if values.len() != weights.len() {
            return Err(DiceError::invalid_pool(format!(
                "{} values but {} weights",
                values.len(),
                weights.len()
            )));
        }
        if values.is_empty() {
            return Err(DiceError::invalid_pool("pool is empty"));
        }
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w <= 0.0)
        {
            return Err(DiceError::invalid_pool(format!(
                "weight {} at position {} must be positive",
                w, i
            )));
        }
        let index = WeightedIndex::new(&weights)
            .map_err(|e| DiceError::invalid_pool(format!("bad weights: {}", e)))?;
        Ok(Self {
            values,
            weights,
            index,
        })
    }

    /// Creates a pool where every value is equally likely.
    pub fn uniform(values: Vec<T>) -> Result<Self, DiceError> {
        let weights = vec![1.0; values.len()];
        Self::new(values, weights)
    }

    /// Draws one value.
    pub fn draw_one<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.values[self.index.sample(rng)]
    }

    /// The pool's values in order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The pool's weights, parallel to [`WeightedPool::values`].
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pool has no values. Construction rejects empty pools.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use std::collections::HashMap;

    #[test]
    fn test_uniform_pool_covers_every_value() {
        let pool = WeightedPool::uniform(vec!["C", "D", "E", "F", "G", "A", "B"]).unwrap();
        let mut rng = create_rng(1);
        let mut seen = HashMap::new();
        for _ in 0..2000 {
            *seen.entry(*pool.draw_one(&mut rng)).or_insert(0) += 1;
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_weighted_bias() {
        let pool = WeightedPool::new(
            vec!["major", "minor", "diminished", "augmented", "custom"],
            vec![2.0, 2.0, 1.0, 1.0, 1.0],
        )
        .unwrap();
        let mut rng = create_rng(99);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..10_000 {
            *counts.entry(*pool.draw_one(&mut rng)).or_insert(0) += 1;
        }
        // Expected: 2857 for major/minor, 1428 for the rest.
        for heavy in ["major", "minor"] {
            let n = counts[heavy];
            assert!((2500..3200).contains(&n), "{} drawn {} times", heavy, n);
        }
        for light in ["diminished", "augmented", "custom"] {
            let n = counts[light];
            assert!((1150..1700).contains(&n), "{} drawn {} times", light, n);
        }
    }

    #[test]
    fn test_single_value_pool() {
        let pool = WeightedPool::uniform(vec![4]).unwrap();
        assert_eq!(pool.len(), 1);
        assert!(!pool.is_empty());
        let mut rng = create_rng(3);
        for _ in 0..20 {
            assert_eq!(*pool.draw_one(&mut rng), 4);
        }
    }

    #[test]
    fn test_empty_pool_rejected() {
        let err = WeightedPool::<u8>::uniform(vec![]).unwrap_err();
        assert!(matches!(err, DiceError::InvalidPool { .. }));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = WeightedPool::new(vec!["a", "b"], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            DiceError::InvalidPool {
                reason: "2 values but 1 weights".to_string()
            }
        );
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        assert!(WeightedPool::new(vec!["a", "b"], vec![1.0, 0.0]).is_err());
        assert!(WeightedPool::new(vec!["a", "b"], vec![1.0, -2.0]).is_err());
        assert!(WeightedPool::new(vec!["a"], vec![f64::NAN]).is_err());
    }
}
