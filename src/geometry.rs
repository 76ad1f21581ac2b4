//! Size, point and rectangle geometry for window and video framing.
//!
//! Sizes are resized under aspect-ratio constraints (grow, shrink, crop,
//! expand); rectangles are moved or trimmed to stay inside bounds. All
//! operations are pure and take values by copy.
//!
//! Operations that divide by a height or an aspect ratio return
//! `Result<_, GeometryError>` and fail on degenerate input instead of
//! producing NaN or infinity.
//!
//! # Example
//!
//! ```
//! use framekit::{Aspect, Size};
//!
//! // A 16:9 video squeezed into a 4:3 window.
//! let video = Size::new(1920.0, 1080.0);
//! let fitted = video.shrink(Size::new(800.0, 600.0)).unwrap();
//! assert_eq!(fitted.width, 800.0);
//! assert_eq!(fitted.height, 450.0);
//!
//! // Crop the same video to 4:3.
//! let cropped = video.crop(Aspect::new(4.0 / 3.0).unwrap()).unwrap();
//! assert_eq!(cropped.height, 1080.0);
//! ```

use core::ops::Sub;

use num_traits::Float;

use crate::aspect::Aspect;

/// Width × height dimensions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size<T = f64> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    /// Create a new size.
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Float> Size<T> {
    /// Width divided by height. Both dimensions must be positive.
    pub fn aspect(self) -> Result<Aspect<T>, GeometryError> {
        Aspect::of(self)
    }

    /// Resize to no smaller than `min` on either axis, keeping this size's
    /// aspect ratio. Returned unchanged when it already satisfies `min`.
    pub fn satisfy_min_size(self, min: Size<T>) -> Result<Self, GeometryError> {
        if self.width >= min.width && self.height >= min.height {
            return Ok(self);
        }
        self.grow(min)
    }

    /// Resize to no larger than `max` on either axis, keeping this size's
    /// aspect ratio. Returned unchanged when it already fits.
    pub fn satisfy_max_size(self, max: Size<T>) -> Result<Self, GeometryError> {
        if self.width <= max.width && self.height <= max.height {
            return Ok(self);
        }
        self.shrink(max)
    }

    /// Scale (up or down) until the result covers `target`, keeping this
    /// size's aspect ratio. One axis matches `target` exactly.
    pub fn grow(self, target: Size<T>) -> Result<Self, GeometryError> {
        let aspect = self.aspect()?.value();
        let target_aspect = target.aspect()?.value();
        if aspect > target_aspect {
            // Wider than target: match height, overflow width.
            Ok(Self::new(target.height * aspect, target.height))
        } else {
            Ok(Self::new(target.width, target.width / aspect))
        }
    }

    /// Scale (up or down) until the result fits inside `target`, keeping
    /// this size's aspect ratio. One axis matches `target` exactly.
    pub fn shrink(self, target: Size<T>) -> Result<Self, GeometryError> {
        let aspect = self.aspect()?.value();
        let target_aspect = target.aspect()?.value();
        if aspect < target_aspect {
            // Taller than target: match height, leave width short.
            Ok(Self::new(target.height * aspect, target.height))
        } else {
            Ok(Self::new(target.width, target.width / aspect))
        }
    }

    /// Largest size inside this one with the given aspect ratio.
    ///
    /// The longer dimension is cut; the other is kept.
    pub fn crop(self, aspect: Aspect<T>) -> Result<Self, GeometryError> {
        let current = self.aspect()?.value();
        let target = aspect.value();
        if self.matches_aspect(target) {
            return Ok(self);
        }
        if current > target {
            Ok(Self::new(self.height * target, self.height))
        } else {
            Ok(Self::new(self.width, self.width / target))
        }
    }

    /// Smallest size containing this one with the given aspect ratio.
    ///
    /// The shorter dimension is extended; the other is kept.
    pub fn expand(self, aspect: Aspect<T>) -> Result<Self, GeometryError> {
        let current = self.aspect()?.value();
        let target = aspect.value();
        if self.matches_aspect(target) {
            return Ok(self);
        }
        if current < target {
            Ok(Self::new(self.height * target, self.height))
        } else {
            Ok(Self::new(self.width, self.width / target))
        }
    }

    /// Whether `width / height` equals `target` up to a few ULPs.
    ///
    /// Cross-multiplied so a size produced by `crop`/`expand` (where
    /// `height = width / target` may not multiply back exactly) still counts
    /// as a match, making a second crop or expand a true no-op.
    fn matches_aspect(self, target: T) -> bool {
        let two = T::one() + T::one();
        let slack = T::epsilon() * two * two * self.width;
        (self.width - self.height * target).abs() <= slack
    }

    /// Scale both dimensions by `factor`.
    pub fn multiply(self, factor: T) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Add `amount` to both dimensions.
    pub fn inflate(self, amount: T) -> Self {
        Self::new(self.width + amount, self.height + amount)
    }
}

/// A position in window coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Float> Point<T> {
    /// Clamp each coordinate into `rect` independently.
    ///
    /// Edges are inclusive: a point on the far edge stays there.
    pub fn constrain(self, rect: Rect<T>) -> Self {
        let left = rect.x;
        let right = left + rect.width;
        let top = rect.y;
        let bottom = top + rect.height;
        Self::new(clamp(self.x, left, right), clamp(self.y, top, bottom))
    }
}

impl<T: Float> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Copy> Rect<T> {
    /// Create a new rect.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at `origin` with `size`.
    pub fn from_origin_size(origin: Point<T>, size: Size<T>) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }
}

impl<T: Float> Rect<T> {
    /// Scale the size by `factor`. The origin stays put.
    pub fn multiply(self, factor: T) -> Self {
        Self::from_origin_size(self.origin(), self.size().multiply(factor))
    }

    /// Replace the size, keeping the center where it was.
    pub fn centered_resize(self, size: Size<T>) -> Self {
        let two = T::one() + T::one();
        Self::new(
            self.x - (size.width - self.width) / two,
            self.y - (size.height - self.height) / two,
            size.width,
            size.height,
        )
    }

    /// Move this rect so it lies within `(0, 0, bounds.width, bounds.height)`.
    ///
    /// Only the width and height of `bounds` are used; its origin is ignored.
    /// The size never changes. A rect larger than `bounds` on an axis is
    /// pinned to the far edge and ends up with a negative origin there.
    pub fn clamp_origin(self, bounds: Rect<T>) -> Self {
        let mut x = self.x;
        let mut y = self.y;
        if x < T::zero() {
            x = T::zero();
        }
        if y < T::zero() {
            y = T::zero();
        }
        if x + self.width > bounds.width {
            x = bounds.width - self.width;
        }
        if y + self.height > bounds.height {
            y = bounds.height - self.height;
        }
        Self::new(x, y, self.width, self.height)
    }

    /// Keep this rect inside `bounds`: the origin is pushed forward to the
    /// bounds' origin, then the size is trimmed (never grown) so the far
    /// edges do not pass the bounds' far edges.
    ///
    /// The origin is never pulled back. A rect that starts past the bounds'
    /// far edge keeps its origin and comes back with a negative width or
    /// height, so that `x + width` still lands on the far edge.
    pub fn constrain(self, bounds: Rect<T>) -> Self {
        let mut x = self.x;
        let mut y = self.y;
        let mut width = self.width;
        let mut height = self.height;
        if x < bounds.x {
            x = bounds.x;
        }
        if y < bounds.y {
            y = bounds.y;
        }
        let right = bounds.x + bounds.width;
        let bottom = bounds.y + bounds.height;
        if x + width > right {
            width = right - x;
        }
        if y + height > bottom {
            height = bottom - y;
        }
        Self::new(x, y, width, height)
    }
}

/// Clamp `value` into `[min, max]`.
///
/// The lower bound is applied first, then the upper bound, so with
/// `min > max` the result is `max`. Never panics, unlike [`f64::clamp`].
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let mut v = value;
    if v < min {
        v = min;
    }
    if v > max {
        v = max;
    }
    v
}

/// Geometry computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A width, height or aspect ratio is zero, negative or not finite.
    InvalidDimension,
    /// A value range has `max <= min`.
    DegenerateRange,
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimension => f.write_str("width, height or aspect ratio must be positive"),
            Self::DegenerateRange => f.write_str("range maximum must be greater than its minimum"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}
