#![no_std]

pub mod behavior;
pub mod color;
pub mod controller;
pub mod math8;
pub mod palette;
pub mod rand;
pub mod timer;

pub use behavior::{BehaviorId, BehaviorSlot};
pub use controller::{ConfigError, Controller, ControllerConfig};
pub use palette::{AXIS_MAX, ColorSet, ColorSetError, ColorStop, Palette, uniform_positions};
pub use rand::SplitMixRandom;
pub use timer::{TaskHandle, TickTimer};

pub use color::Rgb;
pub use math8::{blend8, scale8, triwave8};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait and never touches
/// the wire protocol itself.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Update the global brightness scalar (0-255)
    ///
    /// Values are forwarded as-is; clamping is the driver's concern.
    fn set_brightness(&mut self, value: u8);
}

/// Source of uniformly distributed random bytes
///
/// Consumed only when the twinkle behavior generates its per-pixel
/// phase offsets. Hardware RNG peripherals implement this directly;
/// [`SplitMixRandom`] is a portable fallback.
pub trait RandomSource {
    fn next_byte(&mut self) -> u8;
}
