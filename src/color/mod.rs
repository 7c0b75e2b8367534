//! Color-space helpers consumed by the rendering layer.
//!
//! - [`hsv`]: HSV to 8-bit RGB conversion (sector formula)
//! - [`guidelines`]: per-environment saturation guideline ranges

pub mod guidelines;
pub mod hsv;

pub use guidelines::{guidelines_for, Guidelines};
pub use hsv::hsv_to_rgb;
