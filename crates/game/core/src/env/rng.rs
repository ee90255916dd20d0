//! RNG oracle for injectable random number generation.
//!
//! Every random decision in combat (dodge, accuracy, critical, variance,
//! effect procs, enemy choices, loot) draws from an [`RngOracle`] passed in by
//! the caller. Production code uses the seedable [`PcgRng`]; tests script
//! exact draws with [`SequenceRng`].

/// Source of uniform random draws.
pub trait RngOracle: Send {
    /// Uniform draw in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.roll() < p
    }

    /// Uniform index in `[0, len)`. Returns 0 for an empty range.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.roll() * len as f64) as usize).min(len - 1)
    }

    /// Uniform integer in `[min, max]` inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + ((self.roll() * span as f64) as u64).min(span - 1) as u32
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng
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

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl RngOracle for PcgRng {
    fn roll(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}

/// Scripted source that replays a fixed sequence of draws, cycling when it
/// runs out. Values are clamped into `[0, 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    const MAX_DRAW: f64 = 1.0 - f64::EPSILON;

    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let draws: Vec<f64> = draws
            .into_iter()
            .map(|d| d.clamp(0.0, Self::MAX_DRAW))
            .collect();
        Self { draws, cursor: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for SequenceRng {
    fn roll(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
