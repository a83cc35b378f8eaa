//! Behavior system with compile-time known animation variants
//!
//! All behaviors are stored in an enum to avoid heap allocations.
//! Each behavior implements the [`Behavior`] trait and carries only the
//! per-tick progress state it needs.

mod breathe;
mod fade;
mod flash;
mod static_fill;
mod twinkle;
mod wave;

pub use breathe::BreatheBehavior;
pub use fade::FadeBehavior;
pub use flash::FlashBehavior;
pub use static_fill::StaticBehavior;
pub use twinkle::TwinkleBehavior;
pub use wave::WaveBehavior;

use crate::RandomSource;
use crate::color::Rgb;
use crate::palette::{ColorSet, Palette};

const BEHAVIOR_NAME_STATIC: &str = "static";
const BEHAVIOR_NAME_FLASH: &str = "flash";
const BEHAVIOR_NAME_FADE: &str = "fade";
const BEHAVIOR_NAME_WAVE: &str = "wave";
const BEHAVIOR_NAME_TWINKLE: &str = "twinkle";
const BEHAVIOR_NAME_BREATHE: &str = "breathe";

const BEHAVIOR_ID_STATIC: u8 = 0;
const BEHAVIOR_ID_FLASH: u8 = 1;
const BEHAVIOR_ID_FADE: u8 = 2;
const BEHAVIOR_ID_WAVE: u8 = 3;
const BEHAVIOR_ID_TWINKLE: u8 = 4;
const BEHAVIOR_ID_BREATHE: u8 = 5;

pub trait Behavior {
    /// Render a single frame in place
    ///
    /// Never blocks or allocates; cost is bounded by the frame length.
    fn render(&mut self, frame: &mut [Rgb], colors: &ColorSet, palette: &Palette);
}

/// Known behavior ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BehaviorId {
    Static = BEHAVIOR_ID_STATIC,
    Flash = BEHAVIOR_ID_FLASH,
    Fade = BEHAVIOR_ID_FADE,
    Wave = BEHAVIOR_ID_WAVE,
    Twinkle = BEHAVIOR_ID_TWINKLE,
    Breathe = BEHAVIOR_ID_BREATHE,
}

/// Behavior slot - enum containing all possible behaviors
///
/// `N` is the LED count, needed by the twinkle state's per-pixel
/// phase offsets.
#[derive(Debug, Clone)]
pub enum BehaviorSlot<const N: usize> {
    /// Solid fill with the first color of the set
    Static(StaticBehavior),
    /// Hard cut through the color set, one color per tick
    Flash(FlashBehavior),
    /// Crossfade between consecutive colors of the set
    Fade(FadeBehavior),
    /// Moving palette gradient along the strip
    Wave(WaveBehavior),
    /// Independently phased per-pixel palette twinkle
    Twinkle(TwinkleBehavior<N>),
    /// Triangular brightness pulse through the palette
    Breathe(BreatheBehavior),
}

impl BehaviorId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            BEHAVIOR_ID_STATIC => Self::Static,
            BEHAVIOR_ID_FLASH => Self::Flash,
            BEHAVIOR_ID_FADE => Self::Fade,
            BEHAVIOR_ID_WAVE => Self::Wave,
            BEHAVIOR_ID_TWINKLE => Self::Twinkle,
            BEHAVIOR_ID_BREATHE => Self::Breathe,
            _ => return None,
        })
    }

    /// Construct the fresh default state for this behavior.
    ///
    /// The random source is consumed only by [`BehaviorId::Twinkle`],
    /// which draws its per-pixel phase offsets exactly once here.
    pub fn to_slot<const N: usize, R: RandomSource>(
        self,
        colors: &ColorSet,
        rng: &mut R,
    ) -> BehaviorSlot<N> {
        match self {
            Self::Static => BehaviorSlot::Static(StaticBehavior::new()),
            Self::Flash => BehaviorSlot::Flash(FlashBehavior::new(colors.color(0))),
            Self::Fade => BehaviorSlot::Fade(FadeBehavior::new(colors.color(0))),
            Self::Wave => BehaviorSlot::Wave(WaveBehavior::new()),
            Self::Twinkle => BehaviorSlot::Twinkle(TwinkleBehavior::new(rng)),
            Self::Breathe => BehaviorSlot::Breathe(BreatheBehavior::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => BEHAVIOR_NAME_STATIC,
            Self::Flash => BEHAVIOR_NAME_FLASH,
            Self::Fade => BEHAVIOR_NAME_FADE,
            Self::Wave => BEHAVIOR_NAME_WAVE,
            Self::Twinkle => BEHAVIOR_NAME_TWINKLE,
            Self::Breathe => BEHAVIOR_NAME_BREATHE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            BEHAVIOR_NAME_STATIC => Some(Self::Static),
            BEHAVIOR_NAME_FLASH => Some(Self::Flash),
            BEHAVIOR_NAME_FADE => Some(Self::Fade),
            BEHAVIOR_NAME_WAVE => Some(Self::Wave),
            BEHAVIOR_NAME_TWINKLE => Some(Self::Twinkle),
            BEHAVIOR_NAME_BREATHE => Some(Self::Breathe),
            _ => None,
        }
    }
}

impl<const N: usize> Default for BehaviorSlot<N> {
    fn default() -> Self {
        Self::Static(StaticBehavior::new())
    }
}

impl<const N: usize> BehaviorSlot<N> {
    /// Render the current behavior
    pub fn render(&mut self, frame: &mut [Rgb], colors: &ColorSet, palette: &Palette) {
        match self {
            Self::Static(behavior) => behavior.render(frame, colors, palette),
            Self::Flash(behavior) => behavior.render(frame, colors, palette),
            Self::Fade(behavior) => behavior.render(frame, colors, palette),
            Self::Wave(behavior) => behavior.render(frame, colors, palette),
            Self::Twinkle(behavior) => behavior.render(frame, colors, palette),
            Self::Breathe(behavior) => behavior.render(frame, colors, palette),
        }
    }

    /// Get the behavior ID for external observation
    pub const fn id(&self) -> BehaviorId {
        match self {
            Self::Static(_) => BehaviorId::Static,
            Self::Flash(_) => BehaviorId::Flash,
            Self::Fade(_) => BehaviorId::Fade,
            Self::Wave(_) => BehaviorId::Wave,
            Self::Twinkle(_) => BehaviorId::Twinkle,
            Self::Breathe(_) => BehaviorId::Breathe,
        }
    }
}

/// Fill every pixel of the frame with one color.
pub(crate) fn fill_solid(frame: &mut [Rgb], color: Rgb) {
    for led in frame {
        *led = color;
    }
}
