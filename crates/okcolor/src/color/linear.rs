//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! The sRGB transfer curve (IEC 61966-2-1) maps between it and the companded
//! values stored in images and palette files.

use super::srgb::{Rgba64, Rgba8};
use crate::gamut::Clipper;

/// sRGB to linear for a single channel in `0.0..=1.0`.
///
/// Total over all reals; only `[0, 1]` is meaningful.
///
/// # Example
/// ```
/// use okcolor::to_linear;
/// assert!((to_linear(0.5) - 0.214041).abs() < 1e-6);
/// ```
#[inline]
pub fn to_linear(x: f64) -> f64 {
    if x < 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear to sRGB for a single channel in `0.0..=1.0`.
///
/// # Example
/// ```
/// use okcolor::from_linear;
/// assert!((from_linear(0.5) - 0.735357).abs() < 1e-6);
/// ```
#[inline]
pub fn from_linear(x: f64) -> f64 {
    if x < 0.0031308 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in linear RGB color space.
///
/// Channel values represent light intensity proportional to physical light
/// power. They are nominally in `0.0..=1.0`, but values produced by
/// inverse-transforming an out-of-gamut perceptual color may exceed this
/// range. Alpha is carried through unmodified at 16-bit resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearColor {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
    /// Alpha channel
    pub a: u16,
}

impl LinearColor {
    /// Create a new LinearColor from linear RGB values and alpha.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// True if every color channel lies within `0.0..=1.0`.
    #[inline]
    pub fn in_gamut(&self) -> bool {
        self.in_gamut_within(0.0)
    }

    /// True if every color channel lies within `-eps..=1.0 + eps`.
    #[inline]
    pub fn in_gamut_within(&self, eps: f64) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|&v| v >= -eps && v <= 1.0 + eps)
    }

    /// Encode to 16-bit sRGB without gamut mapping.
    ///
    /// Out-of-range channels are clamped after companding, which shifts hue
    /// for colors far outside the cube. Use [`to_display`](Self::to_display)
    /// to clip perceptually first.
    pub fn encode(self) -> Rgba64 {
        let quantize = |v: f64| (from_linear(v) * 65535.0).round().clamp(0.0, 65535.0) as u16;
        Rgba64 {
            r: quantize(self.r),
            g: quantize(self.g),
            b: quantize(self.b),
            a: self.a,
        }
    }

    /// Clip into the sRGB gamut with `clipper`, then encode to 16-bit sRGB.
    ///
    /// # Example
    /// ```
    /// use okcolor::{Clipper, LinearColor};
    ///
    /// let hot = LinearColor::new(1.4, 0.2, -0.1, 0xFFFF);
    /// let shown = hot.to_display(Clipper::PreserveChroma);
    /// assert_eq!(shown.a, 0xFFFF);
    /// ```
    pub fn to_display(self, clipper: Clipper) -> Rgba64 {
        clipper.clip_linear(self).encode()
    }

    /// Squared Euclidean distance over `(R, G, B, alpha)`.
    ///
    /// Alpha is normalised to `0.0..=1.0` so it weighs like a color channel.
    #[inline]
    pub fn distance_squared(&self, other: &LinearColor) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        let da = alpha_delta(self.a, other.a);
        dr * dr + dg * dg + db * db + da * da
    }
}

/// Difference of two 16-bit alphas on the unit scale.
#[inline]
pub(crate) fn alpha_delta(a: u16, b: u16) -> f64 {
    (a as f64 - b as f64) / 65535.0
}

impl From<Rgba64> for LinearColor {
    /// Decode companded 16-bit sRGB into linear light.
    fn from(c: Rgba64) -> Self {
        Self {
            r: to_linear(c.r as f64 / 65535.0),
            g: to_linear(c.g as f64 / 65535.0),
            b: to_linear(c.b as f64 / 65535.0),
            a: c.a,
        }
    }
}

impl From<Rgba8> for LinearColor {
    fn from(c: Rgba8) -> Self {
        Self::from(Rgba64::from(c))
    }
}

impl From<LinearColor> for Rgba64 {
    /// Display conversion: clips with [`Clipper::DEFAULT`] before encoding.
    fn from(c: LinearColor) -> Self {
        c.to_display(Clipper::DEFAULT)
    }
}
