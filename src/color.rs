//! Color string codec for the player backend's configuration options.
//!
//! Colors travel as `"R/G/B"` or `"R/G/B/A"`: normalized float components,
//! `/`-separated, each written in its shortest round-tripping decimal form
//! with `.` as the decimal point. Encoding always writes all four
//! components; decoding also accepts three and defaults alpha to `1.0`.
//!
//! ```
//! use framekit::Color;
//!
//! let c = Color::rgba(1.0, 0.5, 0.0, 1.0);
//! assert_eq!(c.to_string(), "1.0/0.5/0.0/1.0");
//! assert_eq!("1.0/0.5/0.0".parse::<Color>(), Ok(c));
//! ```

use core::fmt;
use core::str::FromStr;

/// RGBA color with normalized `f64` components.
///
/// Components are nominally in `0.0..=1.0` but are never clamped; out of
/// range values survive a round trip through the string form unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Opaque color.
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Writes the four-component string form, `"R/G/B/A"`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing ".0" on whole numbers and is the
        // shortest representation that parses back to the same bits.
        write!(
            f,
            "{:?}/{:?}/{:?}/{:?}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Encode `color` as `"R/G/B/A"`.
#[cfg(feature = "alloc")]
pub fn encode(color: &Color) -> alloc::string::String {
    use alloc::string::ToString;
    color.to_string()
}

/// Decode `"R/G/B"` or `"R/G/B/A"`.
///
/// Empty segments are skipped, so `"1//0/0"` and `"/1/0/0"` read as three
/// components. Every remaining segment must parse as a float, otherwise the
/// whole string is rejected. Surrounding whitespace and any segment count
/// other than three or four are malformed.
pub fn decode(s: &str) -> Result<Color, ColorError> {
    let mut components = [0.0f64; 4];
    let mut count = 0;
    for segment in s.split('/').filter(|part| !part.is_empty()) {
        let value: f64 = segment.parse().map_err(|_| ColorError::MalformedColor)?;
        if count == components.len() {
            return Err(ColorError::MalformedColor);
        }
        components[count] = value;
        count += 1;
    }
    let [red, green, blue, alpha] = components;
    match count {
        3 => Ok(Color::rgb(red, green, blue)),
        4 => Ok(Color::rgba(red, green, blue, alpha)),
        _ => Err(ColorError::MalformedColor),
    }
}

/// Color string decoding error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// Not three or four `/`-separated floats.
    MalformedColor,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedColor => f.write_str("expected a color like \"R/G/B\" or \"R/G/B/A\""),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
