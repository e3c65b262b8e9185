// Matrix and polynomial constants are kept at their published precision.
#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! okcolor: perceptual color conversion and gamut clipping
//!
//! This library converts between companded sRGB, linear-light RGB and the
//! OkLab / OkLCh perceptual color spaces, and maps out-of-gamut perceptual
//! colors back into the displayable sRGB cube.
//!
//! # Quick Start
//!
//! ```
//! use okcolor::{Clipper, Lab, LinearColor, Rgba8};
//!
//! let orange: Rgba8 = "#ff8800".parse().unwrap();
//! let lab = Lab::from(LinearColor::from(orange));
//!
//! // Push the chroma far outside sRGB, then bring it back in.
//! let vivid = Lab::new(lab.l, lab.a * 3.0, lab.b * 3.0, lab.alpha);
//! let shown = vivid.to_linear(Some(Clipper::DEFAULT));
//! assert!(shown.in_gamut_within(1e-4));
//! ```
//!
//! # Color Spaces
//!
//! | Type | Space | Used For |
//! |------|-------|----------|
//! | [`Rgba8`], [`Rgba64`] | Companded sRGB | Input/output, palette files |
//! | [`LinearColor`] | Linear-light RGB | Gamut tests, light arithmetic |
//! | [`Lab`] | OkLab | Perceptual distance, gamut clipping |
//! | [`Lch`] | OkLCh | Hue/chroma manipulation |
//!
//! [`Color`] is the closed union of these representations and
//! [`Representation`] names them; every pair converts explicitly.
//!
//! # Gamut Clipping
//!
//! Converting an OkLab color to RGB can leave the `[0, 1]` cube. A
//! [`Clipper`] projects such a color along a line of constant hue toward an
//! anchor lightness `L0` until it meets the gamut boundary. The boundary is
//! approximated per hue by a triangle through black, white and the hue's
//! cusp (maximum chroma point), then refined with one Halley step against
//! the exact cubic boundary. See [`gamut`] for the strategies.
//!
//! Based on Björn Ottosson's
//! ["sRGB gamut clipping"](https://bottosson.github.io/posts/gamutclipping/).

pub mod color;
pub mod gamut;

#[cfg(test)]
mod domain_tests;

pub use color::{
    from_linear, to_linear, Color, Lab, Lch, LinearColor, ParseColorError, Representation,
    Rgba64, Rgba8,
};
pub use gamut::{find_cusp, find_gamut_intersection, Clipper, Cusp};
