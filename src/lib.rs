//! Window and video framing geometry, plus the color string codec used to
//! pass colors to a media player backend.
//!
//! Pure functions over plain value types — no windowing toolkit, no I/O,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`] — Size/Rect/Point, aspect-preserving grow/shrink/crop/expand, bounds clamping
//! - [`aspect`] — Positive aspect ratio values and `"16:9"` parsing
//! - [`slider`] — Slider knob center position
//! - [`color`] — `"R/G/B[/A]"` color string encode/decode
//! - `settings` — Colors in a persisted key-value store (requires `alloc`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod aspect;
pub mod color;
pub mod geometry;
#[cfg(feature = "alloc")]
pub mod settings;
pub mod slider;

// Re-exports: core types
pub use aspect::{Aspect, AspectParseError};
#[cfg(feature = "alloc")]
pub use color::encode;
pub use color::{Color, ColorError, decode};
pub use geometry::{GeometryError, Point, Rect, Size, clamp};
pub use slider::Slider;
