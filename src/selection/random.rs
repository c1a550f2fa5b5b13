//! Seeded random draws for reproducible stochastic selection

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform gate that fires with the given probability
    pub fn probability_gate(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    /// Uniform index into a non-empty collection
    ///
    /// Returns 0 for an empty length so callers can guard with their own
    /// emptiness checks without risking a panicking range.
    pub fn uniform_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Weighted random selection over integer weights
    ///
    /// Draws uniformly over the combined weight range and returns the index
    /// whose cumulative interval contains the draw. Zero-weight entries can
    /// never be selected.
    pub fn weighted_choice(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return 0;
        }

        let mut draw = self.rng.random_range(0..total) as i64;
        for (index, &weight) in weights.iter().enumerate() {
            draw -= weight as i64;
            if draw < 0 {
                return index;
            }
        }
        weights.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut selector = RandomSelector::new(7);
        for _ in 0..200 {
            let choice = selector.weighted_choice(&[0, 60, 0, 40]);
            assert!(choice == 1 || choice == 3);
        }
    }

    #[test]
    fn test_weighted_choice_sole_survivor_is_certain() {
        let mut selector = RandomSelector::new(11);
        for _ in 0..100 {
            assert_eq!(selector.weighted_choice(&[0, 100]), 1);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomSelector::new(42);
        let mut b = RandomSelector::new(42);
        let draws_a: Vec<usize> = (0..32).map(|_| a.uniform_index(10)).collect();
        let draws_b: Vec<usize> = (0..32).map(|_| b.uniform_index(10)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
