//! OkLCh polar color space
//!
//! OkLCh is the polar form of OkLab, representing colors as:
//! - **L** (Lightness): Same as OkLab L
//! - **C** (Chroma): Colorfulness (distance from neutral axis)
//! - **h** (Hue): Hue angle in radians
//!
//! Scaling chroma or rotating hue is trivial in this form and, unlike HSL/HSV,
//! does not cause perceived hue shifts.

use super::linear::LinearColor;
use super::oklab::Lab;
use super::srgb::{Rgba64, Rgba8};

/// OkLCh: Polar form of OkLab (Lightness, Chroma, Hue).
///
/// # Note
///
/// For achromatic colors (c near zero), hue is undefined. The conversion
/// sets h to 0.0 in this case, which is harmless since zero chroma maps back
/// to zero `a` and `b` regardless of hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in radians
    pub h: f64,
    /// Alpha channel
    pub alpha: u16,
}

impl Lch {
    /// Create a new OkLCh color.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64, alpha: u16) -> Self {
        Self { l, c, h, alpha }
    }
}

impl From<Lab> for Lch {
    /// Cartesian to polar.
    fn from(lab: Lab) -> Self {
        // atan2(0, 0) is 0.0, so achromatic input gets hue 0
        Self {
            l: lab.l,
            c: lab.chroma(),
            h: lab.b.atan2(lab.a),
            alpha: lab.alpha,
        }
    }
}

impl From<Lch> for Lab {
    /// Polar to Cartesian.
    fn from(lch: Lch) -> Self {
        let (sin, cos) = lch.h.sin_cos();
        Self::new(lch.l, lch.c * cos, lch.c * sin, lch.alpha)
    }
}

impl From<LinearColor> for Lch {
    fn from(rgb: LinearColor) -> Self {
        Self::from(Lab::from(rgb))
    }
}

impl From<Lch> for LinearColor {
    fn from(lch: Lch) -> Self {
        Self::from(Lab::from(lch))
    }
}

impl From<Rgba64> for Lch {
    fn from(c: Rgba64) -> Self {
        Self::from(Lab::from(c))
    }
}

impl From<Rgba8> for Lch {
    fn from(c: Rgba8) -> Self {
        Self::from(Lab::from(c))
    }
}

impl From<Lch> for Rgba64 {
    /// Display conversion through [`Lab`], clipping with the default strategy.
    fn from(lch: Lch) -> Self {
        Self::from(Lab::from(lch))
    }
}
