//! Palette color parsing and the few derivations the stylesheet needs.
//!
//! Colors arrive as palette strings (`#rgb`, `#rrggbb`, or a CSS color name)
//! and leave as CSS color strings: `rgba(..)` for alpha changes and `hsl(..)`
//! for lightness changes.

use std::fmt;
use std::str::FromStr;

use palette::{Darken, FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An opaque sRGB color parsed from a palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Srgb<u8>);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(Srgb::new(r, g, b))
    }

    /// Parse `#rgb`, `#rrggbb` (leading `#` optional) or a CSS color name.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let trimmed = text.trim();
        if let Ok(rgb) = trimmed.parse::<Srgb<u8>>() {
            return Ok(Color(rgb));
        }
        palette::named::from_str(&trimmed.to_ascii_lowercase())
            .map(Color)
            .ok_or_else(|| ColorError(text.to_string()))
    }

    pub fn r(self) -> u8 {
        self.0.red
    }
    pub fn g(self) -> u8 {
        self.0.green
    }
    pub fn b(self) -> u8 {
        self.0.blue
    }

    /// CSS string with the alpha channel set to `alpha` (clamped to 0..=1).
    /// Fully opaque colors render as `rgb(..)`.
    pub fn with_alpha(self, alpha: f32) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            format!("rgb({}, {}, {})", self.r(), self.g(), self.b())
        } else {
            format!("rgba({}, {}, {}, {})", self.r(), self.g(), self.b(), alpha)
        }
    }

    /// YIQ brightness below the midpoint.
    pub fn is_dark(self) -> bool {
        let weighted =
            u32::from(self.r()) * 299 + u32::from(self.g()) * 587 + u32::from(self.b()) * 114;
        f64::from(weighted) / 1000.0 < 128.0
    }

    /// Lightness scaled towards black by `ratio`, rendered as `hsl(h, s%, l%)`.
    pub fn darken(self, ratio: f32) -> String {
        let hsl: Hsl = Hsl::from_color(self.0.into_format::<f32>());
        let hsl = hsl.darken(ratio.clamp(0.0, 1.0));
        format!(
            "hsl({}, {}%, {}%)",
            round1(f64::from(hsl.hue.into_positive_degrees())),
            round1(f64::from(hsl.saturation) * 100.0),
            round1(f64::from(hsl.lightness) * 100.0),
        )
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
    }
}

/// One decimal place; `360.0` wraps to `0`.
fn round1(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded >= 360.0 { 0.0 } else { rounded + 0.0 }
}
