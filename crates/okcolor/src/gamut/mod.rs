//! sRGB gamut clipping in OkLab
//!
//! A [`Clipper`] maps an OkLab color whose linear RGB leaves the `[0, 1]`
//! cube onto the gamut boundary. Hue is always preserved: the color moves
//! along a straight line in the (L, C) plane of its own hue, from itself
//! toward an anchor lightness `L0` on the neutral axis. The strategies differ
//! only in how they choose `L0`.
//!
//! # References
//!
//! Björn Ottosson, "sRGB gamut clipping"
//! <https://bottosson.github.io/posts/gamutclipping/>

mod clipper;
mod cusp;

pub use clipper::Clipper;
pub use cusp::{compute_max_saturation, find_cusp, find_gamut_intersection, Cusp};
