//! Color stops, color sets and the interpolated lookup palette.
//!
//! A [`ColorSet`] places up to 32 colors along a 16-bit axis. Building a
//! [`Palette`] samples that axis down into a dense 256-entry table that
//! the behaviors index with a single byte.

use heapless::Vec;

use crate::color::{BLACK, Rgb};

/// Top of the positional axis along which color stops are placed.
pub const AXIS_MAX: u16 = u16::MAX;

/// Maximum number of stops a color set can hold.
pub const MAX_COLOR_STOPS: usize = 32;

/// Number of entries in a built palette.
pub const PALETTE_SIZE: usize = 256;

/// A color anchored at a position on the palette axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStop {
    pub position: u16,
    pub color: Rgb,
}

/// Color set validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorSetError {
    /// No colors provided.
    Empty,
    /// More colors than [`MAX_COLOR_STOPS`].
    TooMany,
}

impl core::fmt::Display for ColorSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorSetError::Empty => write!(f, "color set must contain at least one color"),
            ColorSetError::TooMany => {
                write!(f, "color set holds at most {} colors", MAX_COLOR_STOPS)
            }
        }
    }
}

/// Generate evenly spaced stop positions across `[min, max)`.
///
/// The first position is `min` and the last is `max - 1`, leaving room
/// for a full-brightness top stop; intermediate positions are spaced by
/// `(max - min) / (count - 1)`, truncated. `count == 1` yields `[min]`.
#[allow(clippy::cast_possible_truncation)]
pub fn uniform_positions(min: u16, max: u16, count: usize) -> Vec<u16, MAX_COLOR_STOPS> {
    debug_assert!(min < max);
    debug_assert!(count >= 1 && count <= MAX_COLOR_STOPS);

    let mut positions = Vec::new();
    if count == 0 || count > MAX_COLOR_STOPS {
        return positions;
    }
    if count == 1 {
        let _ = positions.push(min);
        return positions;
    }

    let step = u32::from(max - min) / (count as u32 - 1);
    for i in 0..count {
        let position = if i == count - 1 {
            max - 1
        } else {
            (u32::from(min) + i as u32 * step) as u16
        };
        let _ = positions.push(position);
    }
    positions
}

/// Ordered sequence of color stops along the axis
///
/// Holds 1..=32 stops with non-decreasing positions. Constructors
/// regenerate positions uniformly whenever the caller-supplied ones are
/// absent, mismatched in length or out of order; that fallback is by
/// design, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet {
    stops: Vec<ColorStop, MAX_COLOR_STOPS>,
}

impl ColorSet {
    /// Build a set from colors alone, with uniformly generated positions.
    pub fn from_colors(colors: &[Rgb]) -> Result<Self, ColorSetError> {
        Self::check_count(colors.len())?;

        let positions = uniform_positions(0, AXIS_MAX, colors.len());
        let mut stops = Vec::new();
        for (color, position) in colors.iter().zip(positions.iter()) {
            let _ = stops.push(ColorStop {
                position: *position,
                color: *color,
            });
        }
        Ok(Self { stops })
    }

    /// Build a set from colors with explicit axis positions.
    ///
    /// Falls back to uniform positions when the slices differ in length
    /// or the positions are not non-decreasing.
    pub fn from_stops(colors: &[Rgb], positions: &[u16]) -> Result<Self, ColorSetError> {
        Self::check_count(colors.len())?;

        let ordered = positions.windows(2).all(|pair| pair[0] <= pair[1]);
        if colors.len() != positions.len() || !ordered {
            return Self::from_colors(colors);
        }

        let mut stops = Vec::new();
        for (color, position) in colors.iter().zip(positions.iter()) {
            let _ = stops.push(ColorStop {
                position: *position,
                color: *color,
            });
        }
        Ok(Self { stops })
    }

    /// Default two-stop red/blue set
    ///
    /// A pure constructor rather than a shared mutable default buffer,
    /// so every controller instance owns its own copy.
    pub fn default_pair() -> Self {
        let mut stops = Vec::new();
        let _ = stops.push(ColorStop {
            position: 0,
            color: Rgb { r: 255, g: 0, b: 0 },
        });
        let _ = stops.push(ColorStop {
            position: AXIS_MAX - 1,
            color: Rgb { r: 0, g: 0, b: 255 },
        });
        Self { stops }
    }

    const fn check_count(count: usize) -> Result<(), ColorSetError> {
        if count == 0 {
            return Err(ColorSetError::Empty);
        }
        if count > MAX_COLOR_STOPS {
            return Err(ColorSetError::TooMany);
        }
        Ok(())
    }

    /// Number of stops in the set
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color of the stop at `index`, without its position
    pub fn color(&self, index: usize) -> Rgb {
        self.stops[index].color
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::default_pair()
    }
}

/// Dense 256-entry lookup table of interpolated colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// Build a palette by piecewise-linear interpolation of the set's stops.
    ///
    /// A single-stop set interpolates from the supplied color at the axis
    /// origin down to black at the top, producing a pulse-to-black table
    /// rather than a flat fill. Axis positions outside the stop range
    /// clamp to the nearest boundary stop.
    pub fn build(colors: &ColorSet) -> Self {
        let mut entries = [BLACK; PALETTE_SIZE];

        let single;
        let stops: &[ColorStop] = if colors.len() == 1 {
            single = [
                ColorStop {
                    position: 0,
                    color: colors.color(0),
                },
                ColorStop {
                    position: AXIS_MAX,
                    color: BLACK,
                },
            ];
            &single
        } else {
            colors.stops()
        };

        for (index, entry) in entries.iter_mut().enumerate() {
            // Map the 8-bit palette index onto the 16-bit axis.
            #[allow(clippy::cast_possible_truncation)]
            let position = (index as u32 * 257) as u16;
            *entry = sample_stops(stops, position);
        }

        Self { entries }
    }

    /// Interpolated color at `index`
    pub const fn entry(&self, index: u8) -> Rgb {
        self.entries[index as usize]
    }

    pub const fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::build(&ColorSet::default_pair())
    }
}

/// Sample the stop sequence at an axis position, clamping at the ends.
fn sample_stops(stops: &[ColorStop], position: u16) -> Rgb {
    let first = stops[0];
    let last = stops[stops.len() - 1];

    if position <= first.position {
        return first.color;
    }
    if position >= last.position {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if position < hi.position {
            return lerp_stop(lo, hi, position);
        }
    }
    last.color
}

/// Linear interpolation between two stops, each channel independently.
#[allow(clippy::cast_possible_truncation)]
fn lerp_stop(lo: ColorStop, hi: ColorStop, position: u16) -> Rgb {
    let span = u32::from(hi.position - lo.position);
    if span == 0 {
        return hi.color;
    }
    let offset = u32::from(position - lo.position);

    let channel = |a: u8, b: u8| -> u8 {
        // Weighted average with rounding, kept in unsigned math.
        ((u32::from(a) * (span - offset) + u32::from(b) * offset + span / 2) / span) as u8
    };

    Rgb {
        r: channel(lo.color.r, hi.color.r),
        g: channel(lo.color.g, hi.color.g),
        b: channel(lo.color.b, hi.color.b),
    }
}
