//! Wave behavior
//!
//! Paints the palette along the strip and shifts the starting index by
//! one each tick, producing a gradient that drifts down the strip and
//! wraps around the 256-entry table.

use super::Behavior;
use crate::color::Rgb;
use crate::palette::{ColorSet, PALETTE_SIZE, Palette};

/// Palette steps advanced per pixel along the strip.
const INDEX_INCREMENT: usize = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct WaveBehavior {
    start_index: u8,
}

impl WaveBehavior {
    pub const fn new() -> Self {
        Self { start_index: 0 }
    }

    /// Current palette index of the first pixel
    pub const fn start_index(&self) -> u8 {
        self.start_index
    }
}

impl Behavior for WaveBehavior {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut [Rgb], _colors: &ColorSet, palette: &Palette) {
        for (i, led) in frame.iter_mut().enumerate() {
            let index = (self.start_index as usize + i * INDEX_INCREMENT) % PALETTE_SIZE;
            *led = palette.entry(index as u8);
        }

        self.start_index = if self.start_index == 255 {
            0
        } else {
            self.start_index + 1
        };
    }
}
