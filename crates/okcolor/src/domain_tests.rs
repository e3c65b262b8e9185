//! Domain-critical regression tests for okcolor.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::{Clipper, Color, Lab, LinearColor, Representation, Rgba64, Rgba8};

    const STRATEGIES: [Clipper; 6] = [
        Clipper::PreserveChroma,
        Clipper::ProjectToMidpoint,
        Clipper::ProjectTo { l0: 0.7 },
        Clipper::ProjectToCusp,
        Clipper::AdaptiveMidpoint { alpha: 0.05 },
        Clipper::AdaptiveCusp { alpha: 0.05 },
    ];

    fn channel_diff(a: Rgba8, b: Rgba8) -> i32 {
        [
            (a.r as i32 - b.r as i32).abs(),
            (a.g as i32 - b.g as i32).abs(),
            (a.b as i32 - b.b as i32).abs(),
            (a.a as i32 - b.a as i32).abs(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    // ========================================================================
    // GAP 1: Boundary colors survive the display conversion
    // ========================================================================

    /// If this breaks, it means: a color sitting exactly on the gamut boundary
    /// is pushed off it by the clipper. Pure red has a zero green and blue
    /// channel; floating point noise after the OkLab round trip leaves it a
    /// hair outside the cube, and the clip must land it back on red.
    #[test]
    fn test_pure_red_survives_default_clip() {
        let red = Rgba8::new(255, 0, 0, 255);
        let lab = Lab::from(Rgba64::from(red));
        let back = Rgba8::from(Rgba64::from(lab));
        assert!(
            channel_diff(red, back) <= 1,
            "REGRESSION: pure red came back as {back:?}"
        );

        for clipper in STRATEGIES {
            let back = Rgba8::from(lab.to_linear(Some(clipper)).encode());
            assert!(
                channel_diff(red, back) <= 1,
                "REGRESSION: {clipper:?} turned pure red into {back:?}"
            );
        }
    }

    /// If this breaks, it means: one of the cube corners is no longer a
    /// fixed point of the display conversion.
    #[test]
    fn test_cube_corners_round_trip() {
        for r in [0u8, 255] {
            for g in [0u8, 255] {
                for b in [0u8, 255] {
                    let c = Rgba8::opaque(r, g, b);
                    let back = Rgba8::from(Rgba64::from(Lab::from(Rgba64::from(c))));
                    assert!(channel_diff(c, back) <= 1, "{c:?} came back as {back:?}");
                }
            }
        }
    }

    // ========================================================================
    // GAP 2: Adaptive anchors follow the sign of the lightness offset
    // ========================================================================

    /// If this breaks, it means: the sign function used by the adaptive
    /// strategies reports 0 for positive offsets below 1, collapsing the
    /// anchor of every bright color onto 0.5. The adaptive result then equals
    /// plain midpoint projection and bright colors lose far too much
    /// lightness.
    #[test]
    fn test_adaptive_midpoint_keeps_bright_colors_bright() {
        let bright = Lab::new(0.9, 0.0, 0.3, 0xFFFF);
        let adaptive = Clipper::AdaptiveMidpoint { alpha: 0.05 }.clip(bright);
        let midpoint = Clipper::ProjectToMidpoint.clip(bright);
        assert!(
            adaptive.l > midpoint.l + 0.05,
            "REGRESSION: adaptive L {} collapsed onto midpoint L {}",
            adaptive.l,
            midpoint.l
        );
    }

    /// If this breaks, it means: the closed-form anchor no longer reduces to
    /// the color's own lightness when chroma has no weight.
    #[test]
    fn test_adaptive_with_zero_alpha_preserves_lightness() {
        let samples = [
            Lab::new(0.9, 0.0, 0.3, 0),
            Lab::new(0.2, 0.3, -0.1, 0),
            Lab::new(0.6, -0.4, 0.1, 0),
            Lab::new(0.05, -0.1, -0.2, 0),
        ];
        for lab in samples {
            let expected = Clipper::PreserveChroma.clip(lab);
            for clipper in [
                Clipper::AdaptiveMidpoint { alpha: 0.0 },
                Clipper::AdaptiveCusp { alpha: 0.0 },
            ] {
                let got = clipper.clip(lab);
                assert!(
                    (got.l - expected.l).abs() < 1e-9
                        && (got.a - expected.a).abs() < 1e-9
                        && (got.b - expected.b).abs() < 1e-9,
                    "{clipper:?} on {lab:?}: {got:?} vs {expected:?}"
                );
            }
        }
    }

    // ========================================================================
    // GAP 3: Degenerate inputs stay finite
    // ========================================================================

    /// If this breaks, it means: a neutral color outside the lightness range
    /// has no hue direction and the cusp search divides zero by zero. Every
    /// strategy must still return a finite, displayable color.
    #[test]
    fn test_neutral_out_of_range_is_finite() {
        for lab in [
            Lab::new(1.2, 0.0, 0.0, 0),
            Lab::new(-0.1, 0.0, 0.0, 0),
            Lab::new(1.1, 1e-7, 0.0, 0),
        ] {
            for clipper in STRATEGIES {
                let out = clipper.clip(lab);
                assert!(
                    out.l.is_finite() && out.a.is_finite() && out.b.is_finite(),
                    "REGRESSION: {clipper:?} produced {out:?} from {lab:?}"
                );
                assert!(
                    out.to_linear(None).in_gamut_within(1e-4),
                    "{clipper:?} left {lab:?} at {out:?}"
                );
            }
        }
    }

    // ========================================================================
    // GAP 4: Alpha is a bounded distance component
    // ========================================================================

    /// If this breaks, it means: the alpha difference is computed in unsigned
    /// 16-bit arithmetic and wraps, so a tiny alpha difference in one
    /// direction looks like a huge one.
    #[test]
    fn test_alpha_distance_is_symmetric_and_bounded() {
        let a = Lab::new(0.5, 0.0, 0.0, 10);
        let b = Lab::new(0.5, 0.0, 0.0, 20);
        assert_eq!(a.distance_squared(&b), b.distance_squared(&a));
        assert!(a.distance_squared(&b) < 1e-6);

        let x = LinearColor::new(0.5, 0.5, 0.5, 0);
        let y = LinearColor::new(0.5, 0.5, 0.5, 0xFFFF);
        assert!((x.distance_squared(&y) - 1.0).abs() < 1e-12);
    }

    // ========================================================================
    // GAP 5: Every representation round-trips through the closed union
    // ========================================================================

    /// If this breaks, it means: one of the pairwise conversions in
    /// [`Color::convert`] routes through the wrong transform.
    #[test]
    fn test_pairwise_conversions_agree() {
        let start = Rgba8::new(200, 30, 120, 77);
        let reps = [
            Representation::Rgba64,
            Representation::Linear,
            Representation::Lab,
            Representation::Lch,
        ];
        for a in reps {
            for b in reps {
                let via = Color::from(start).convert(a).convert(b).to_rgba64();
                assert_eq!(Rgba8::from(via), start, "{a} -> {b}");
            }
        }
    }
}
