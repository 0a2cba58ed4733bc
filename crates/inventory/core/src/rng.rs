//! RNG oracle for deterministic random values.
//!
//! Used to scatter items when a container is drained into the world. Given the
//! same seed, every implementation must return the same value, so a replay of
//! a destroyed machine drops its contents identically.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`, built from the top 24 bits so it is exact in f32.
    fn unit(&self, seed: u64) -> f32 {
        (self.next_u32(seed) >> 8) as f32 / 16_777_216.0
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

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

/// Compute deterministic seed from drain components.
///
/// * `base_seed` - Host-provided seed (world seed, tick counter, ...)
/// * `slot` - Index of the entry being dropped
/// * `owner` - Owner of the drained container
/// * `axis` - Velocity component (0 = x, 1 = y, 2 = z)
pub fn compute_seed(base_seed: u64, slot: u64, owner: u32, axis: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = base_seed;
    hash ^= slot.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(owner).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(axis).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
