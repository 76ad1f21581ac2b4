//! Aspect ratio values.
//!
//! An [`Aspect`] is a single positive, finite width:height ratio. It is
//! either taken from a [`Size`] or supplied directly, and can be parsed from
//! the `"W:H"` / decimal notation players use for video aspect overrides.
//!
//! ```
//! use framekit::{Aspect, Size};
//!
//! let wide: Aspect = "16:9".parse().unwrap();
//! let from_size = Aspect::of(Size::new(1920.0, 1080.0)).unwrap();
//! assert!((wide.value() - from_size.value()).abs() < 1e-12);
//! ```

use core::str::FromStr;

use num_traits::Float;

use crate::geometry::{GeometryError, Size};

/// Width divided by height. Always positive and finite.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Aspect<T = f64> {
    value: T,
}

impl<T: Float> Aspect<T> {
    /// Wrap a ratio value.
    ///
    /// Fails with [`GeometryError::InvalidDimension`] for zero, negative,
    /// infinite or NaN values.
    pub fn new(value: T) -> Result<Self, GeometryError> {
        if value > T::zero() && value.is_finite() {
            Ok(Self { value })
        } else {
            Err(GeometryError::InvalidDimension)
        }
    }

    /// Ratio of a `width` × `height` pair.
    pub fn from_ratio(width: T, height: T) -> Result<Self, GeometryError> {
        if width > T::zero() && height > T::zero() {
            Self::new(width / height)
        } else {
            Err(GeometryError::InvalidDimension)
        }
    }

    /// Aspect ratio of a size. Both dimensions must be positive.
    pub fn of(size: Size<T>) -> Result<Self, GeometryError> {
        Self::from_ratio(size.width, size.height)
    }

    /// The raw ratio.
    pub fn value(self) -> T {
        self.value
    }
}

/// Aspect string could not be parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AspectParseError {
    /// Not a number, and not two numbers separated by `:`.
    Syntax,
    /// Parsed, but the ratio is not positive and finite.
    Invalid(GeometryError),
}

impl core::fmt::Display for AspectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Syntax => f.write_str("expected an aspect ratio like \"16:9\" or \"1.85\""),
            Self::Invalid(e) => write!(f, "invalid aspect ratio: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AspectParseError {}

impl From<GeometryError> for AspectParseError {
    fn from(e: GeometryError) -> Self {
        Self::Invalid(e)
    }
}

impl<T: Float + FromStr> FromStr for Aspect<T> {
    type Err = AspectParseError;

    /// Accepts `"W:H"` (`"4:3"`, `"2.39:1"`) or a plain ratio (`"1.85"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = |part: &str| {
            part.trim()
                .parse::<T>()
                .map_err(|_| AspectParseError::Syntax)
        };
        match s.split_once(':') {
            Some((w, h)) => Ok(Self::from_ratio(number(w)?, number(h)?)?),
            None => Ok(Self::new(number(s)?)?),
        }
    }
}
