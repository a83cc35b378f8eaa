//! Breathe behavior
//!
//! Sweeps a triangular wave through the palette index and fills the
//! whole strip with the sampled color, giving a slow pulse. For a
//! single-color set the palette interpolates down to black, so the
//! strip breathes between the color and darkness.

use super::{Behavior, fill_solid};
use crate::color::Rgb;
use crate::math8::triwave8;
use crate::palette::{ColorSet, Palette};

#[derive(Debug, Clone, Copy, Default)]
pub struct BreatheBehavior {
    phase: u8,
}

impl BreatheBehavior {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }
}

impl Behavior for BreatheBehavior {
    fn render(&mut self, frame: &mut [Rgb], _colors: &ColorSet, palette: &Palette) {
        let level = triwave8(self.phase);
        fill_solid(frame, palette.entry(level));
        self.phase = self.phase.wrapping_add(1);
    }
}
