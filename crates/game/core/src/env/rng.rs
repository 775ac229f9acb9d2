//! RNG oracle for deterministic random number generation.
//!
//! The comp suggestion search is stochastic by design, but every draw flows
//! through this trait so a fixed seed replays the exact same search. Hosts
//! inject real entropy only when choosing the session seed.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a uniform value in `[0, 1)` from a seed.
    fn unit_f64(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (u64::from(u32::MAX) + 1) as f64
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Deterministic, fast, small,
/// and passes the usual statistical batteries.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one LCG step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed from search loop coordinates.
///
/// Combines the session seed with the trial index and the draw index within
/// the trial so every weighted draw gets an independent seed while the whole
/// search stays replayable.
pub fn compute_seed(session_seed: u64, trial: u32, draw: u32) -> u64 {
    // Mix inputs using SplitMix64/FxHash-style multipliers.
    let mut hash = session_seed;

    hash ^= u64::from(trial).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(draw).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step.
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_eq!(rng.unit_f64(7), rng.unit_f64(7));
    }

    #[test]
    fn unit_f64_stays_in_range() {
        let rng = PcgRng;
        for trial in 0..50 {
            for draw in 0..20 {
                let value = rng.unit_f64(compute_seed(0xDEAD_BEEF, trial, draw));
                assert!((0.0..1.0).contains(&value));
            }
        }
    }

    #[test]
    fn loop_coordinates_decorrelate_seeds() {
        assert_ne!(compute_seed(1, 0, 0), compute_seed(1, 0, 1));
        assert_ne!(compute_seed(1, 0, 0), compute_seed(1, 1, 0));
        assert_ne!(compute_seed(1, 0, 0), compute_seed(2, 0, 0));
    }
}
