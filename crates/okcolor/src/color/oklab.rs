//! OkLab perceptual color space
//!
//! OkLab is a perceptual color space designed for uniform color perception.
//! It is used for calculating perceptual color differences (e.g., finding
//! the nearest palette color) and as the working space of the gamut clippers.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear::{alpha_delta, LinearColor};
use super::srgb::{Rgba64, Rgba8};
use crate::gamut::Clipper;

/// A color in OkLab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
/// - `alpha`: 16-bit straight alpha, carried through every conversion
///
/// # Note
///
/// Values are not clamped. Out-of-gamut colors may have components outside
/// typical ranges; use [`Lab::to_linear`] with a [`Clipper`] to bring them
/// back into sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f64,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f64,
    /// Alpha channel
    pub alpha: u16,
}

impl Lab {
    /// Create a new OkLab color.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::Lab;
    ///
    /// // Opaque mid-gray (neutral, no chroma)
    /// let gray = Lab::new(0.5, 0.0, 0.0, 0xFFFF);
    /// assert_eq!(gray.chroma(), 0.0);
    /// ```
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64, alpha: u16) -> Self {
        Self { l, a, b, alpha }
    }

    /// Chroma: distance from the neutral axis, `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Inverse transform to linear RGB.
    ///
    /// The result is unclamped when `clipper` is `None`: out-of-gamut OkLab
    /// colors produce channels outside `0.0..=1.0`. With a clipper, a color
    /// whose linear form leaves the cube is clipped first and transformed
    /// again without further clipping.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::{Clipper, Lab};
    ///
    /// let too_bright = Lab::new(1.0, 0.5, 0.5, 0xFFFF);
    /// assert!(!too_bright.to_linear(None).in_gamut());
    /// assert!(too_bright
    ///     .to_linear(Some(Clipper::PreserveChroma))
    ///     .in_gamut_within(1e-4));
    /// ```
    pub fn to_linear(self, clipper: Option<Clipper>) -> LinearColor {
        let rgb = self.unclipped_linear();
        match clipper {
            Some(clipper) if !rgb.in_gamut() => clipper.project(self).unclipped_linear(),
            _ => rgb,
        }
    }

    /// Inverse transform with no gamut handling.
    pub(crate) fn unclipped_linear(self) -> LinearColor {
        // Lab to LMS (inverse M2)
        let l_ = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m_ = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s_ = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        // reverse the nonlinearity
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // LMS to linear sRGB (inverse M1)
        LinearColor {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
            a: self.alpha,
        }
    }

    /// Squared Euclidean distance over `(L, a, b, alpha)`.
    ///
    /// Use squared distance to avoid sqrt when comparing distances. Alpha is
    /// normalised to `0.0..=1.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::Lab;
    ///
    /// let white = Lab::new(1.0, 0.0, 0.0, 0xFFFF);
    /// let black = Lab::new(0.0, 0.0, 0.0, 0xFFFF);
    /// let gray = Lab::new(0.5, 0.0, 0.0, 0xFFFF);
    ///
    /// // Gray is equidistant from black and white
    /// let d_to_black = gray.distance_squared(&black);
    /// let d_to_white = gray.distance_squared(&white);
    /// assert!((d_to_black - d_to_white).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn distance_squared(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        let dalpha = alpha_delta(self.alpha, other.alpha);
        dl * dl + da * da + db * db + dalpha * dalpha
    }
}

impl From<LinearColor> for Lab {
    /// Forward transform from linear RGB, using the 2021-01-25 matrices.
    fn from(rgb: LinearColor) -> Self {
        // Linear sRGB to LMS (M1)
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        // LMS to Lab (M2)
        Lab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
            alpha: rgb.a,
        }
    }
}

impl From<Rgba64> for Lab {
    fn from(c: Rgba64) -> Self {
        Self::from(LinearColor::from(c))
    }
}

impl From<Rgba8> for Lab {
    fn from(c: Rgba8) -> Self {
        Self::from(Rgba64::from(c))
    }
}

impl From<Lab> for LinearColor {
    /// Clips with [`Clipper::DEFAULT`]; use [`Lab::to_linear`] to choose.
    fn from(lab: Lab) -> Self {
        lab.to_linear(Some(Clipper::DEFAULT))
    }
}

impl From<Lab> for Rgba64 {
    /// Display conversion: clips with [`Clipper::DEFAULT`], then encodes.
    fn from(lab: Lab) -> Self {
        lab.to_linear(Some(Clipper::DEFAULT)).encode()
    }
}
