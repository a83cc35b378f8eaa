//! Twinkle behavior
//!
//! Each pixel samples a fixed palette entry and pulses it with a
//! triangular intensity wave. A per-pixel random phase offset, drawn
//! once when the behavior is activated, desynchronizes the pulses so
//! the strip sparkles instead of breathing in unison.

use super::Behavior;
use crate::RandomSource;
use crate::color::{Rgb, scale_color};
use crate::math8::triwave8;
use crate::palette::{ColorSet, PALETTE_SIZE, Palette};

#[derive(Debug, Clone)]
pub struct TwinkleBehavior<const N: usize> {
    offsets: [u8; N],
    frame_counter: u8,
}

impl<const N: usize> TwinkleBehavior<N> {
    /// Draw one phase offset per pixel from the random source.
    ///
    /// The offsets stay fixed for the lifetime of the slot; only a new
    /// activation (behavior or color change) redraws them.
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut offsets = [0u8; N];
        for offset in &mut offsets {
            *offset = rng.next_byte();
        }
        Self {
            offsets,
            frame_counter: 0,
        }
    }

    /// Per-pixel phase offsets
    pub const fn offsets(&self) -> &[u8; N] {
        &self.offsets
    }
}

impl<const N: usize> Behavior for TwinkleBehavior<N> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut [Rgb], _colors: &ColorSet, palette: &Palette) {
        if frame.is_empty() {
            return;
        }

        // Spread the pixels evenly across the palette.
        let index_offset = PALETTE_SIZE / frame.len();

        for (i, (led, offset)) in frame.iter_mut().zip(self.offsets.iter()).enumerate() {
            let base = palette.entry(((i * index_offset) % PALETTE_SIZE) as u8);
            let level = triwave8(self.frame_counter.wrapping_add(*offset));
            *led = scale_color(base, level);
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);
    }
}
