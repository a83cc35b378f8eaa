//! Portable pseudo-random byte source.
//!
//! Targets with a hardware RNG should implement [`RandomSource`] on the
//! peripheral instead; this generator exists so the twinkle behavior
//! works everywhere.

use crate::RandomSource;

/// SplitMix64-based byte generator
#[derive(Debug, Clone)]
pub struct SplitMixRandom {
    state: u64,
}

impl SplitMixRandom {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// SplitMix64-style mixing, folded down to u32.
    #[inline]
    const fn hash(x: u64) -> u32 {
        let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        #[allow(clippy::cast_possible_truncation)]
        {
            (z ^ (z >> 31)) as u32
        }
    }
}

impl Default for SplitMixRandom {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for SplitMixRandom {
    #[allow(clippy::cast_possible_truncation)]
    fn next_byte(&mut self) -> u8 {
        self.state = self.state.wrapping_add(1);
        (Self::hash(self.state) & 0xFF) as u8
    }
}
