//! Slider knob placement.

use core::cmp::Ordering;

use num_traits::Float;

use crate::geometry::{GeometryError, Rect};

/// Linear slider state: its frame, knob thickness, and value range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slider<T = f64> {
    /// Slider frame in its superview's coordinates.
    pub frame: Rect<T>,
    /// Knob extent along the track.
    pub knob_thickness: T,
    pub value: T,
    pub min: T,
    pub max: T,
}

impl<T: Float> Slider<T> {
    /// X coordinate of the knob's center.
    ///
    /// The knob center travels from `frame.x + thickness / 2` at `min` to
    /// `frame.x + frame.width - thickness / 2` at `max`. Values outside the
    /// range extrapolate linearly.
    ///
    /// Fails with [`GeometryError::DegenerateRange`] unless `max > min`.
    ///
    /// ```
    /// use framekit::{Rect, Slider};
    ///
    /// let slider = Slider {
    ///     frame: Rect::new(0.0, 0.0, 100.0, 20.0),
    ///     knob_thickness: 10.0,
    ///     value: 5.0,
    ///     min: 0.0,
    ///     max: 10.0,
    /// };
    /// assert_eq!(slider.knob_position(), Ok(50.0));
    /// ```
    pub fn knob_position(&self) -> Result<T, GeometryError> {
        if self.max.partial_cmp(&self.min) != Some(Ordering::Greater) {
            return Err(GeometryError::DegenerateRange);
        }
        let two = T::one() + T::one();
        let start = self.frame.x + self.knob_thickness / two;
        let track = self.frame.width - self.knob_thickness;
        let fraction = (self.value - self.min) / (self.max - self.min);
        Ok(start + track * fraction)
    }
}
