//! Controller facade - owns the frame buffer, palette and behavior state.
//!
//! The controller is the single entry point for the owning program:
//! configuration calls mutate its state synchronously, and [`Controller::pump`]
//! drives the active behavior from the owner's loop. One controller owns
//! one strip; nothing is shared between instances.

use embassy_time::{Duration, Instant};

use crate::behavior::{BehaviorId, BehaviorSlot};
use crate::color::Rgb;
use crate::palette::{ColorSet, ColorSetError, Palette};
use crate::timer::{TaskHandle, TickTimer};
use crate::{OutputDriver, RandomSource};

/// Animation rate used when the configuration leaves it unset.
pub const DEFAULT_ANIMATION_RATE: Duration = Duration::from_millis(100);

/// Configuration errors surfaced during construction or reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The controller was instantiated with zero LEDs.
    ZeroLeds,
    /// The supplied color list was rejected.
    ColorSet(ColorSetError),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroLeds => write!(f, "led count must be greater than zero"),
            ConfigError::ColorSet(err) => write!(f, "invalid color set: {}", err),
        }
    }
}

impl From<ColorSetError> for ConfigError {
    fn from(err: ColorSetError) -> Self {
        Self::ColorSet(err)
    }
}

/// Initial configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig<'a> {
    /// Initial colors; `None` selects the default red/blue pair
    pub colors: Option<&'a [Rgb]>,
    /// Explicit axis positions for the colors; `None` generates uniform ones
    pub positions: Option<&'a [u16]>,
    /// Initial behavior
    pub behavior: BehaviorId,
    /// Interval between animation ticks
    pub animation_rate: Duration,
    /// Brightness scalar forwarded to the driver (0-255)
    pub max_brightness: u8,
}

impl Default for ControllerConfig<'_> {
    fn default() -> Self {
        Self {
            colors: None,
            positions: None,
            behavior: BehaviorId::Static,
            animation_rate: DEFAULT_ANIMATION_RATE,
            max_brightness: 255,
        }
    }
}

/// Animation controller for one LED strip
///
/// `LED_COUNT` fixes the pixel buffer length at construction. The
/// controller owns the driver, the random source and its scheduler
/// registration; dropping it releases all three.
pub struct Controller<D: OutputDriver, R: RandomSource, const LED_COUNT: usize> {
    driver: D,
    rng: R,
    frame_buffer: [Rgb; LED_COUNT],
    colors: ColorSet,
    palette: Palette,
    slot: BehaviorSlot<LED_COUNT>,
    animation_rate: Duration,
    max_brightness: u8,
    timer: TickTimer,
    task: Option<TaskHandle>,
}

impl<D: OutputDriver, R: RandomSource, const LED_COUNT: usize> Controller<D, R, LED_COUNT> {
    /// Create a controller and light the strip.
    ///
    /// Builds the color set and palette, registers the periodic tick and
    /// renders one immediate frame so the strip is not dark before the
    /// first scheduled tick. On error no half-configured controller is
    /// observable; the driver and random source are dropped with it.
    pub fn new(
        mut driver: D,
        mut rng: R,
        config: &ControllerConfig<'_>,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        if LED_COUNT == 0 {
            return Err(ConfigError::ZeroLeds);
        }

        let colors = match (config.colors, config.positions) {
            (None, _) => ColorSet::default_pair(),
            (Some(colors), None) => ColorSet::from_colors(colors)?,
            (Some(colors), Some(positions)) => ColorSet::from_stops(colors, positions)?,
        };
        let palette = Palette::build(&colors);
        let slot = config.behavior.to_slot(&colors, &mut rng);

        driver.set_brightness(config.max_brightness);

        let mut timer = TickTimer::new();
        let task = timer.register(config.animation_rate, now);

        let mut controller = Self {
            driver,
            rng,
            frame_buffer: [Rgb::default(); LED_COUNT],
            colors,
            palette,
            slot,
            animation_rate: config.animation_rate,
            max_brightness: config.max_brightness,
            timer,
            task: Some(task),
        };
        controller.render_frame();
        Ok(controller)
    }

    /// Advance the tick clock; render and present one frame when due.
    ///
    /// Call this from the owner's loop faster than the animation rate.
    /// Never blocks; performs bounded work per call.
    pub fn pump(&mut self, now: Instant) {
        if self.timer.poll(now) {
            self.render_frame();
        }
    }

    /// Switch to a new behavior.
    ///
    /// Discards the old animation state, installs the fresh default state
    /// for `behavior` and replaces the scheduler registration, so exactly
    /// one registration stays active across any call sequence.
    pub fn set_behavior(&mut self, behavior: BehaviorId, now: Instant) {
        if let Some(task) = self.task.take() {
            self.timer.cancel(task);
        }
        self.slot = behavior.to_slot(&self.colors, &mut self.rng);
        self.task = Some(self.timer.register(self.animation_rate, now));
    }

    /// Replace the color set and rebuild the palette.
    ///
    /// The animation state of the current behavior is reset; the
    /// scheduler registration is left alone. A rejected color list
    /// leaves the previous colors, palette and state intact.
    pub fn set_colors(
        &mut self,
        colors: &[Rgb],
        positions: Option<&[u16]>,
    ) -> Result<(), ConfigError> {
        let colors = match positions {
            Some(positions) => ColorSet::from_stops(colors, positions)?,
            None => ColorSet::from_colors(colors)?,
        };

        self.palette = Palette::build(&colors);
        self.slot = self.slot.id().to_slot(&colors, &mut self.rng);
        self.colors = colors;
        Ok(())
    }

    /// Change the interval between animation ticks.
    ///
    /// Reschedules the active registration immediately; the new rate
    /// takes effect without waiting for the next behavior switch.
    pub fn set_animation_rate(&mut self, rate: Duration, now: Instant) {
        self.animation_rate = rate;
        if let Some(task) = self.task.take() {
            self.timer.cancel(task);
            self.task = Some(self.timer.register(rate, now));
        }
    }

    /// Update the brightness scalar and notify the driver immediately.
    ///
    /// The value is forwarded as-is; clamping is the driver's concern.
    pub fn set_max_brightness(&mut self, value: u8) {
        self.max_brightness = value;
        self.driver.set_brightness(value);
    }

    /// Render the next frame of the active behavior and present it.
    fn render_frame(&mut self) {
        self.slot
            .render(&mut self.frame_buffer, &self.colors, &self.palette);
        self.driver.write(&self.frame_buffer);
    }

    /// Id of the active behavior
    pub const fn behavior(&self) -> BehaviorId {
        self.slot.id()
    }

    /// Current animation rate
    pub const fn animation_rate(&self) -> Duration {
        self.animation_rate
    }

    /// Current brightness scalar
    pub const fn max_brightness(&self) -> u8 {
        self.max_brightness
    }

    /// Last rendered frame contents
    pub const fn frame(&self) -> &[Rgb; LED_COUNT] {
        &self.frame_buffer
    }

    /// Active color set
    pub const fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Palette built from the active color set
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Scheduler state, observable for the owner and tests
    pub const fn scheduler(&self) -> &TickTimer {
        &self.timer
    }

    /// Get a reference to the driver.
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver.
    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
