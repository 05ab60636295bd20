//! Injectable random source for deterministic replay.
//!
//! Every random draw the engine makes (tree scatter, spawn placement, damage
//! rolls, AI decisions, loot drops) goes through [`RandomSource`]. Play
//! sessions use [`PcgRng`]; tests use [`ScriptedRng`] to pin the exact
//! sequence of values.
//!
//! # Determinism
//!
//! Given the same seed (or script) and the same sequence of calls, every
//! implementation must produce the same values. The engine documents the
//! order in which it draws so scripted tests can line values up.

/// Source of uniformly distributed random numbers.
pub trait RandomSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Generate a value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }

    /// Generate a signed offset in range [-spread, spread] inclusive.
    fn offset(&mut self, spread: u32) -> i32 {
        self.range(0, spread.saturating_mul(2)) as i32 - spread as i32
    }

    /// Roll a percentage check: true with probability `chance`/100.
    ///
    /// Draws one value in 0..100 and succeeds when it falls below `chance`.
    fn percent(&mut self, chance: u32) -> bool {
        (self.next_u32() % 100) < chance
    }

    /// Pick an index in `0..len`. Returns 0 for empty ranges.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32() % len as u32) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Fast, small, and good enough
/// statistically for dice rolls.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed. The seed is mixed once so that small
    /// consecutive seeds do not produce correlated opening values.
    pub fn new(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
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

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// SplitMix64-style avalanche over a seed.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Replays a fixed list of raw values, cycling when exhausted.
///
/// Because every helper on [`RandomSource`] reduces `next_u32` with a modulo,
/// small script values map directly onto outcomes: `0` is the minimum of any
/// range and a successful percentage check, `99` fails any check below 100.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    /// Creates a script. An empty script behaves like `[0]`.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Script that returns the same value forever.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value
    }
}
