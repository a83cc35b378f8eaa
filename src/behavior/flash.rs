//! Flash behavior
//!
//! Cuts hard through the color set, one color per tick. The color shown
//! on a tick was latched on the previous one, so a fresh slot starts on
//! the first color of the set.

use super::{Behavior, fill_solid};
use crate::color::Rgb;
use crate::palette::{ColorSet, Palette};

#[derive(Debug, Clone, Copy)]
pub struct FlashBehavior {
    current_index: usize,
    current_color: Rgb,
}

impl FlashBehavior {
    pub const fn new(first_color: Rgb) -> Self {
        Self {
            current_index: 0,
            current_color: first_color,
        }
    }
}

impl Behavior for FlashBehavior {
    fn render(&mut self, frame: &mut [Rgb], colors: &ColorSet, _palette: &Palette) {
        if colors.is_empty() {
            return;
        }
        if colors.len() == 1 {
            fill_solid(frame, colors.color(0));
            return;
        }

        fill_solid(frame, self.current_color);

        // Latch the color for the next tick.
        self.current_index = (self.current_index + 1) % colors.len();
        self.current_color = colors.color(self.current_index);
    }
}
