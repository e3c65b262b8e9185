//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between companded sRGB, linear RGB and the OkLab family.
//!
//! # Color Spaces
//!
//! - **sRGB** ([`Rgba8`], [`Rgba64`]): storage and display encoding. Use for I/O.
//! - **LinearColor**: linear light intensity. Use for light arithmetic.
//! - **Lab** / **Lch**: perceptual coordinates. Use for distances and clipping.
//!
//! # Example
//!
//! ```
//! use okcolor::{Lab, LinearColor, Rgba64, Rgba8};
//!
//! let pixel = Rgba8::new(128, 64, 32, 255);
//! let linear = LinearColor::from(pixel);
//! let lab = Lab::from(linear);
//!
//! // Display conversion clips with the default strategy.
//! let back = Rgba8::from(Rgba64::from(lab));
//! assert_eq!(back, pixel);
//! ```

mod error;
mod linear;
mod model;
mod oklab;
mod oklch;
mod srgb;

pub use error::ParseColorError;
pub use linear::{from_linear, to_linear, LinearColor};
pub use model::{Color, Representation};
pub use oklab::Lab;
pub use oklch::Lch;
pub use srgb::{Rgba64, Rgba8};
