use std::f64::consts::PI;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// An unclamped color with real channels on a 0–255 scale.
///
/// Color mappings are allowed to produce channels outside that range (or NaN);
/// the raw values are kept here and only quantized when written to a pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// `true` when every channel is a number within `0.0..=255.0`.
    pub fn is_in_range(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=255.0).contains(c))
    }

    /// Quantize to an opaque RGBA pixel.
    ///
    /// Channels round to nearest and saturate at `0` and `255`; NaN becomes `0`.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [quantize(self.r), quantize(self.g), quantize(self.b), 255]
    }
}

#[inline]
fn quantize(channel: f64) -> u8 {
    // Float-to-int `as` saturates and sends NaN to zero.
    (channel + 0.5) as u8
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Parameters of a phase-shifted sinusoidal ramp.
///
/// Channel `i` (0 = red, 1 = green, 2 = blue) has intensity
/// `amplitude · sin(value · frequency + i · shift) + center`, where an
/// intensity of `1.0` is full brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainbowParams {
    pub frequency: f64,
    pub amplitude: f64,
    pub center: f64,
    pub shift: f64,
}

impl RainbowParams {
    #[inline]
    fn intensity(&self, value: f64, channel: u8) -> f64 {
        (value * self.frequency + f64::from(channel) * self.shift).sin() * self.amplitude
            + self.center
    }

    fn color(&self, value: f64) -> Rgb {
        Rgb::new(
            self.intensity(value, 0) * 255.0,
            self.intensity(value, 1) * 255.0,
            self.intensity(value, 2) * 255.0,
        )
    }
}

/// How a [`ColorMapping`] turns a value into a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRule {
    Rainbow(RainbowParams),
    /// `trunc(value % 255)` on all three channels.
    ///
    /// The remainder keeps the sign of `value`, so negative inputs give
    /// negative channels.
    Grayscale,
}

// ---------------------------------------------------------------------------
// ColorMapping
// ---------------------------------------------------------------------------

/// A named mapping from a scalar value to a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMapping {
    pub name: &'static str,
    pub rule: ColorRule,
}

impl ColorMapping {
    pub const fn new(name: &'static str, rule: ColorRule) -> Self {
        Self { name, rule }
    }

    /// Map a single value to a color. Total over all `f64`, including NaN and
    /// the infinities.
    #[inline]
    pub fn color(&self, value: f64) -> Rgb {
        match self.rule {
            ColorRule::Rainbow(params) => params.color(value),
            ColorRule::Grayscale => Rgb::gray(((value % 255.0) as i32) as f64),
        }
    }
}

impl Default for ColorMapping {
    fn default() -> Self {
        rainbow()
    }
}

// ---------------------------------------------------------------------------
// Builtin colorings
// ---------------------------------------------------------------------------

/// All built-in color mappings, in menu order.
pub fn builtin_colorings() -> Vec<ColorMapping> {
    vec![rainbow(), rainbow_cold(), rainbow_pastel(), black_white()]
}

/// Look up a built-in color mapping by its display name.
pub fn coloring_by_name(name: &str) -> crate::Result<ColorMapping> {
    builtin_colorings()
        .into_iter()
        .find(|c| c.name == name)
        .ok_or_else(|| CoreError::UnknownColoring(name.to_string()))
}

fn rainbow() -> ColorMapping {
    ColorMapping::new(
        "Rainbow",
        ColorRule::Rainbow(RainbowParams {
            frequency: 1.0,
            amplitude: 0.5,
            center: 0.5,
            shift: 2.0 * PI / 3.0,
        }),
    )
}

fn rainbow_cold() -> ColorMapping {
    ColorMapping::new(
        "Rainbow PI/3 - cold",
        ColorRule::Rainbow(RainbowParams {
            frequency: 1.0,
            amplitude: 0.5,
            center: 0.5,
            shift: PI / 3.0,
        }),
    )
}

fn rainbow_pastel() -> ColorMapping {
    ColorMapping::new(
        "Rainbow Pastell",
        ColorRule::Rainbow(RainbowParams {
            frequency: 1.0,
            amplitude: 0.78,
            center: 0.2,
            shift: 2.0 * PI / 3.0,
        }),
    )
}

fn black_white() -> ColorMapping {
    ColorMapping::new("BLACK/WHITE", ColorRule::Grayscale)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
