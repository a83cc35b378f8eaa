//! Fade behavior
//!
//! Crossfades the whole strip between consecutive colors of the set.
//! The blend amount is an 8-bit counter, so one full crossfade takes
//! 256 ticks; when the interpolated color reaches the target the next
//! pair is selected and the counter resets.

use super::{Behavior, fill_solid};
use crate::color::{Rgb, blend_colors};
use crate::palette::{ColorSet, Palette};

#[derive(Debug, Clone, Copy)]
pub struct FadeBehavior {
    source_index: usize,
    start_color: Rgb,
    target_color: Rgb,
    current_color: Rgb,
    blend_amount: u8,
}

impl FadeBehavior {
    pub const fn new(first_color: Rgb) -> Self {
        Self {
            source_index: 0,
            start_color: first_color,
            target_color: first_color,
            current_color: first_color,
            blend_amount: 0,
        }
    }
}

impl Behavior for FadeBehavior {
    fn render(&mut self, frame: &mut [Rgb], colors: &ColorSet, _palette: &Palette) {
        if colors.is_empty() {
            return;
        }
        if colors.len() == 1 {
            fill_solid(frame, colors.color(0));
            return;
        }

        // Fade complete (or first tick): advance to the next color pair.
        if self.current_color == self.target_color {
            self.start_color = colors.color(self.source_index);
            self.source_index = (self.source_index + 1) % colors.len();
            self.target_color = colors.color(self.source_index);
            self.blend_amount = 0;
        }

        self.current_color = blend_colors(self.start_color, self.target_color, self.blend_amount);
        fill_solid(frame, self.current_color);
        self.blend_amount = self.blend_amount.wrapping_add(1);
    }
}
