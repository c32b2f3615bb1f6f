//! Random sampling for the generators.
//!
//! Every randomized decision in the crate goes through [`RandomSource`], so a
//! whole face generation can be replayed from a seed or pinned down entirely
//! in tests. Production code uses [`EntropyRng`]; the deterministic
//! [`MidpointRng`] exists for regression tests that need one exact face.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws for the generators.
pub trait RandomSource {
    /// A raw draw in [0, 1).
    fn unit(&mut self) -> f64;

    /// Uniform draw in [min, max), computed as `unit() * (max - min) + min`.
    ///
    /// An inverted interval (max < min) yields values in the mirrored range
    /// rather than panicking. The eye generator draws lower-lid offsets from
    /// intervals that can invert, so this is part of the contract.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.unit() * (max - min) + min
    }

    /// Coin flip that succeeds with probability `1 - threshold`.
    fn chance_above(&mut self, threshold: f64) -> bool {
        self.unit() > threshold
    }
}

/// Production source backed by `rand`, from OS entropy or an explicit seed.
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    /// A source drawing fresh entropy; two instances never agree.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// A seeded source; the same seed replays the same faces.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for EntropyRng {
    fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Deterministic stub where every draw lands on its interval midpoint.
///
/// `unit()` is pinned at 0.5, so `uniform(min, max)` returns `(min + max) / 2`
/// and every symmetric jitter interval collapses to zero. Used by the golden
/// regression tests.
pub struct MidpointRng;

impl RandomSource for MidpointRng {
    fn unit(&mut self) -> f64 {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_spans_the_interval() {
        let mut rng = EntropyRng::seeded(7);
        for _ in 0..1000 {
            let v = rng.uniform(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&v), "draw {v} escaped [-3, 5)");
        }
    }

    #[test]
    fn uniform_handles_inverted_intervals() {
        let mut rng = EntropyRng::seeded(7);
        for _ in 0..1000 {
            let v = rng.uniform(5.0, -3.0);
            assert!(v > -3.0 && v <= 5.0, "inverted draw {v} escaped (-3, 5]");
        }
    }

    #[test]
    fn seeded_sources_replay() {
        let a: Vec<f64> = {
            let mut rng = EntropyRng::seeded(42);
            (0..32).map(|_| rng.unit()).collect()
        };
        let b: Vec<f64> = {
            let mut rng = EntropyRng::seeded(42);
            (0..32).map(|_| rng.unit()).collect()
        };
        assert_eq!(a, b, "same seed should replay the same stream");
    }

    #[test]
    fn midpoint_stub_is_exact() {
        let mut rng = MidpointRng;
        assert_eq!(rng.uniform(10.0, 20.0), 15.0);
        assert_eq!(rng.uniform(-4.0, 4.0), 0.0);
        assert!(!rng.chance_above(0.5));
    }
}
