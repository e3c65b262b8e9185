//! Gamut boundary primitives: cusp finding and line intersection.
//!
//! For a fixed hue the sRGB gamut in the (L, C) plane is approximated by a
//! triangle through black, white and the cusp. Both primitives take a unit
//! hue vector `(a, b)` with `a² + b² = 1`.

use crate::color::Lab;

/// Coefficients of the LMS contribution of a unit hue, shared by every Halley
/// step below.
#[inline]
fn hue_lms(a: f64, b: f64) -> (f64, f64, f64) {
    (
        0.3963377774 * a + 0.2158037573 * b,
        -0.1055613458 * a - 0.0638541728 * b,
        -0.0894841775 * a - 1.2914855480 * b,
    )
}

/// Inverse-M1 rows: LMS to linear red, green, blue.
const TO_R: [f64; 3] = [4.0767416621, -3.3077115913, 0.2309699292];
const TO_G: [f64; 3] = [-1.2684380046, 2.6097574011, -0.3413193965];
const TO_B: [f64; 3] = [-0.0041960863, -0.7034186147, 1.7076147010];

#[inline]
fn dot(w: [f64; 3], l: f64, m: f64, s: f64) -> f64 {
    w[0] * l + w[1] * m + w[2] * s
}

/// The point of maximum chroma on the gamut boundary for one hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cusp {
    /// Lightness at the cusp
    pub l: f64,
    /// Chroma at the cusp
    pub c: f64,
}

/// Maximum saturation `S = C / L` that stays inside sRGB for hue `(a, b)`.
///
/// The maximum is reached when one of r, g or b goes below zero. Which one
/// depends on the hue sector; each sector has its own polynomial estimate,
/// refined with one Halley step. Error is below 1e-6 except for some blue
/// hues where dS/dh is close to infinite.
pub fn compute_max_saturation(a: f64, b: f64) -> f64 {
    let (k, w) = if -1.88170328 * a - 0.80936493 * b > 1.0 {
        // red
        (
            [1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245],
            TO_R,
        )
    } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
        // green
        (
            [0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204],
            TO_G,
        )
    } else {
        // blue
        (
            [1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167],
            TO_B,
        )
    };

    let sat = k[0] + k[1] * a + k[2] * b + k[3] * a * a + k[4] * a * b;

    let (k_l, k_m, k_s) = hue_lms(a, b);

    let l_ = 1.0 + sat * k_l;
    let m_ = 1.0 + sat * k_m;
    let s_ = 1.0 + sat * k_s;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let l_ds = 3.0 * k_l * l_ * l_;
    let m_ds = 3.0 * k_m * m_ * m_;
    let s_ds = 3.0 * k_s * s_ * s_;

    let l_ds2 = 6.0 * k_l * k_l * l_;
    let m_ds2 = 6.0 * k_m * k_m * m_;
    let s_ds2 = 6.0 * k_s * k_s * s_;

    let f = dot(w, l, m, s);
    let f1 = dot(w, l_ds, m_ds, s_ds);
    let f2 = dot(w, l_ds2, m_ds2, s_ds2);

    sat - f * f1 / (f1 * f1 - 0.5 * f * f2)
}

/// Find the cusp of the gamut triangle for hue `(a, b)`.
///
/// # Example
///
/// ```
/// use okcolor::find_cusp;
///
/// // hue of pure sRGB red
/// let c = (0.224863f64).hypot(0.125846);
/// let cusp = find_cusp(0.224863 / c, 0.125846 / c);
/// assert!((cusp.l - 0.628).abs() < 1e-3);
/// ```
pub fn find_cusp(a: f64, b: f64) -> Cusp {
    let s_cusp = compute_max_saturation(a, b);

    // scale so the largest channel lands exactly on 1
    let rgb = Lab::new(1.0, s_cusp * a, s_cusp * b, 0).unclipped_linear();
    let l_cusp = (1.0 / rgb.r.max(rgb.g).max(rgb.b)).cbrt();

    Cusp {
        l: l_cusp,
        c: l_cusp * s_cusp,
    }
}

/// Intersect the line `L = l0·(1 − t) + t·l1`, `C = t·c1` with the gamut
/// boundary of hue `(a, b)` and return `t`.
///
/// Below the cusp the triangle edge is exact and `t` has a closed form. Above
/// it the triangle is only an estimate, refined with one Halley step against
/// `r = 1`, `g = 1` and `b = 1` at once; the smallest step wins, and a channel
/// whose step points backwards contributes no root.
pub fn find_gamut_intersection(a: f64, b: f64, l1: f64, c1: f64, l0: f64, cusp: Cusp) -> f64 {
    if (l1 - l0) * cusp.c - (cusp.l - l0) * c1 <= 0.0 {
        // lower half
        return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
    }

    // upper half: first intersect with the triangle
    let t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

    let dl = l1 - l0;
    let dc = c1;

    let (k_l, k_m, k_s) = hue_lms(a, b);

    let l_dt = dl + dc * k_l;
    let m_dt = dl + dc * k_m;
    let s_dt = dl + dc * k_s;

    let big_l = l0 * (1.0 - t) + t * l1;
    let big_c = t * c1;

    let l_ = big_l + big_c * k_l;
    let m_ = big_l + big_c * k_m;
    let s_ = big_l + big_c * k_s;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let ldt = 3.0 * l_dt * l_ * l_;
    let mdt = 3.0 * m_dt * m_ * m_;
    let sdt = 3.0 * s_dt * s_ * s_;

    let ldt2 = 6.0 * l_dt * l_dt * l_;
    let mdt2 = 6.0 * m_dt * m_dt * m_;
    let sdt2 = 6.0 * s_dt * s_dt * s_;

    let halley = |w: [f64; 3]| {
        let f = dot(w, l, m, s) - 1.0;
        let f1 = dot(w, ldt, mdt, sdt);
        let f2 = dot(w, ldt2, mdt2, sdt2);
        let u = f1 / (f1 * f1 - 0.5 * f * f2);
        if u >= 0.0 {
            -f * u
        } else {
            f64::MAX
        }
    };

    t + halley(TO_R).min(halley(TO_G)).min(halley(TO_B))
}
