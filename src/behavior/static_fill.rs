//! Static fill behavior
//!
//! Fills all LEDs with the first color of the set. Carries no state.

use super::{Behavior, fill_solid};
use crate::color::Rgb;
use crate::palette::{ColorSet, Palette};

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBehavior;

impl StaticBehavior {
    pub const fn new() -> Self {
        Self
    }
}

impl Behavior for StaticBehavior {
    fn render(&mut self, frame: &mut [Rgb], colors: &ColorSet, _palette: &Palette) {
        if colors.is_empty() {
            return;
        }
        fill_solid(frame, colors.color(0));
    }
}
