//! Deterministic random number generation.
//!
//! Level layout, tile variants, enemy templates and pickup kinds are all
//! drawn from a seeded stream so a session can be replayed exactly from its
//! seed and the per-frame inputs.

/// Stateless RNG oracle: maps a seed to a pseudo-random value.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
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

/// Compute a per-draw seed from the session seed and draw coordinates.
///
/// * `game_seed` - Base seed set at session start
/// * `nonce` - Draw sequence number within the stream
/// * `stream` - Independent stream identifier (generation, cosmetics, ...)
/// * `context` - Extra discriminator for multiple rolls of one draw
pub fn compute_seed(game_seed: u64, nonce: u64, stream: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Stateful stream over an [`RngOracle`].
///
/// Each draw derives a fresh seed from `(game_seed, nonce, stream)` and
/// advances the nonce, so two streams with different ids never correlate.
#[derive(Clone, Debug)]
pub struct SeededRng<R: RngOracle = PcgRng> {
    oracle: R,
    game_seed: u64,
    stream: u32,
    nonce: u64,
}

impl SeededRng<PcgRng> {
    pub fn new(game_seed: u64, stream: u32) -> Self {
        Self::with_oracle(PcgRng, game_seed, stream)
    }
}

impl<R: RngOracle> SeededRng<R> {
    pub fn with_oracle(oracle: R, game_seed: u64, stream: u32) -> Self {
        Self {
            oracle,
            game_seed,
            stream,
            nonce: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.nonce
    }

    pub fn next_u32(&mut self) -> u32 {
        let seed = compute_seed(self.game_seed, self.nonce, self.stream, 0);
        self.nonce += 1;
        self.oracle.next_u32(seed)
    }

    /// Uniform value in `[min, max]` inclusive.
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        let seed = compute_seed(self.game_seed, self.nonce, self.stream, 0);
        self.nonce += 1;
        self.oracle.range(seed, min, max)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() on an empty range");
        (self.next_u32() as usize) % len.max(1)
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit_f32(&mut self) -> f32 {
        // 24 significant bits fit exactly in an f32 mantissa
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[low, high)`; returns `low` when the range is empty.
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        low + (high - low) * self.unit_f32()
    }
}
