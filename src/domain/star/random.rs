//! Random selection used by badge generation
//!
//! Every `rand::Rng` is a [`RandomSource`], so production code passes
//! `rand::thread_rng()` and tests pass a seeded or mock generator.

use rand::Rng;

/// Source of uniform random numbers
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Pick one element uniformly. Returns `None` for an empty slice.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, options: &'a [T]) -> Option<&'a T> {
    if options.is_empty() {
        return None;
    }
    options.get(rng.next_index(options.len()))
}

/// Pick one option with probability proportional to its weight.
///
/// Draws `r` in `[0, total)` and subtracts weights in order until `r <= 0`.
/// The last option is returned if rounding leaves `r` positive.
pub fn weighted_choice<'a, T, R: RandomSource + ?Sized>(
    rng: &mut R,
    options: &'a [T],
    weights: &[f64],
) -> Option<&'a T> {
    let total: f64 = weights.iter().take(options.len()).sum();
    let mut remaining = rng.next_unit() * total;

    for (option, weight) in options.iter().zip(weights) {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(option);
        }
    }

    options.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Always yields 0.0
    fn low() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Always yields the largest value below 1.0
    fn high() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_next_unit_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_next_index_bounds() {
        assert_eq!(low().next_index(4), 0);
        assert_eq!(high().next_index(4), 3);
    }

    #[test]
    fn test_choose() {
        let options = ["a", "b", "c"];
        assert_eq!(choose(&mut low(), &options), Some(&"a"));
        assert_eq!(choose(&mut high(), &options), Some(&"c"));
        assert_eq!(choose::<&str, _>(&mut low(), &[]), None);
    }

    #[test]
    fn test_weighted_choice_extremes() {
        let options = ["small", "medium", "large"];
        let weights = [0.2, 0.5, 0.3];
        assert_eq!(weighted_choice(&mut low(), &options, &weights), Some(&"small"));
        assert_eq!(weighted_choice(&mut high(), &options, &weights), Some(&"large"));
    }

    #[test]
    fn test_weighted_choice_zero_draw_hits_first_option() {
        let options = ["never", "always"];
        let weights = [0.0, 1.0];
        // A draw of 0.0 still lands on the first option because 0 - 0 <= 0
        assert_eq!(weighted_choice(&mut low(), &options, &weights), Some(&"never"));
        assert_eq!(weighted_choice(&mut high(), &options, &weights), Some(&"always"));
    }

    #[test]
    fn test_weighted_choice_unnormalized_weights() {
        let options = ["a", "b"];
        let weights = [1.0, 3.0];
        let mut rng = StdRng::seed_from_u64(42);
        let picks_b = (0..4000)
            .filter(|_| weighted_choice(&mut rng, &options, &weights) == Some(&"b"))
            .count();
        // Expected 3000; allow generous slack
        assert!(picks_b > 2700 && picks_b < 3300, "picked b {} times", picks_b);
    }

    #[test]
    fn test_weighted_choice_empty() {
        assert_eq!(weighted_choice::<&str, _>(&mut low(), &[], &[]), None);
    }
}
