use super::cusp::{find_cusp, find_gamut_intersection, Cusp};
use crate::color::{Lab, LinearColor};

/// Chroma floor guarding the hue normalisation of near-neutral colors.
const EPSILON: f64 = 1e-5;

/// Gamut clipping strategy.
///
/// Every strategy keeps the hue and moves the color along a line toward an
/// anchor lightness `L0` until it meets the sRGB boundary.
///
/// | Strategy | Anchor `L0` |
/// |----------|-------------|
/// | `PreserveChroma` | the color's own lightness, clamped to `[0, 1]` |
/// | `ProjectToMidpoint` | `0.5` |
/// | `ProjectTo { l0 }` | a fixed lightness |
/// | `ProjectToCusp` | the lightness of the hue's cusp |
/// | `AdaptiveMidpoint { alpha }` | between `0.5` and the color's lightness |
/// | `AdaptiveCusp { alpha }` | between the cusp and the color's lightness |
///
/// For the adaptive strategies `alpha` sets how strongly chroma pulls the
/// anchor away from the color's own lightness: `0` behaves like
/// `PreserveChroma`, large values approach the fixed projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clipper {
    PreserveChroma,
    ProjectToMidpoint,
    ProjectTo { l0: f64 },
    ProjectToCusp,
    AdaptiveMidpoint { alpha: f64 },
    AdaptiveCusp { alpha: f64 },
}

impl Clipper {
    /// The strategy used by display conversions.
    pub const DEFAULT: Clipper = Clipper::AdaptiveMidpoint { alpha: 0.05 };

    /// Clip `lab` into the sRGB gamut.
    ///
    /// Colors whose linear RGB already lies in `[0, 1]³` are returned
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::{Clipper, Lab};
    ///
    /// let inside = Lab::new(0.5, 0.05, 0.0, 0xFFFF);
    /// assert_eq!(Clipper::ProjectToCusp.clip(inside), inside);
    ///
    /// let outside = Lab::new(0.6, 0.4, 0.0, 0xFFFF);
    /// let clipped = Clipper::ProjectToCusp.clip(outside);
    /// assert!(clipped.chroma() < outside.chroma());
    /// ```
    pub fn clip(self, lab: Lab) -> Lab {
        if lab.unclipped_linear().in_gamut() {
            lab
        } else {
            self.project(lab)
        }
    }

    /// Project `lab` onto the gamut boundary without testing it first.
    ///
    /// In-gamut colors move outward to the boundary along the same line.
    pub fn project(self, lab: Lab) -> Lab {
        let chroma = lab.chroma();
        let c = EPSILON.max(chroma);
        // a neutral color has no hue; any unit direction gives C = 0 back
        let (a_, b_) = if chroma > 0.0 {
            (lab.a / chroma, lab.b / chroma)
        } else {
            (1.0, 0.0)
        };

        let (l0, cusp) = match self {
            Clipper::PreserveChroma => (lab.l.clamp(0.0, 1.0), find_cusp(a_, b_)),
            Clipper::ProjectToMidpoint => (0.5, find_cusp(a_, b_)),
            Clipper::ProjectTo { l0 } => (l0, find_cusp(a_, b_)),
            Clipper::ProjectToCusp => {
                let cusp = find_cusp(a_, b_);
                (cusp.l, cusp)
            }
            Clipper::AdaptiveMidpoint { alpha } => {
                (adaptive_midpoint(lab.l, c, alpha), find_cusp(a_, b_))
            }
            Clipper::AdaptiveCusp { alpha } => {
                let cusp = find_cusp(a_, b_);
                (adaptive_cusp(lab.l, c, alpha, cusp), cusp)
            }
        };

        let t = find_gamut_intersection(a_, b_, lab.l, c, l0, cusp);
        let l = l0 * (1.0 - t) + t * lab.l;

        // scale the real chroma; the floored one is only for the search
        Lab::new(l, t * lab.a, t * lab.b, lab.alpha)
    }

    /// Clip a linear RGB color.
    ///
    /// In-gamut input is returned unchanged; otherwise the color is clipped
    /// in OkLab and transformed back.
    pub fn clip_linear(self, rgb: LinearColor) -> LinearColor {
        if rgb.in_gamut() {
            rgb
        } else {
            self.project(Lab::from(rgb)).unclipped_linear()
        }
    }
}

impl Default for Clipper {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn adaptive_midpoint(l: f64, c: f64, alpha: f64) -> f64 {
    let ld = l - 0.5;
    let e1 = 0.5 + ld.abs() + alpha * c;
    0.5 * (1.0 + sgn(ld) * (e1 - (e1 * e1 - 2.0 * ld.abs()).sqrt()))
}

fn adaptive_cusp(l: f64, c: f64, alpha: f64, cusp: Cusp) -> f64 {
    let ld = l - cusp.l;
    let k = if ld > 0.0 {
        2.0 * (1.0 - cusp.l)
    } else {
        2.0 * cusp.l
    };
    let e1 = 0.5 * k + ld.abs() + alpha * c / k;
    cusp.l + 0.5 * (sgn(ld) * (e1 - (e1 * e1 - 2.0 * k * ld.abs()).sqrt()))
}

/// Sign with zero mapped to zero, unlike [`f64::signum`].
#[inline]
fn sgn(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}
