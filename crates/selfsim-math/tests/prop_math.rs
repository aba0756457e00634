// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Property-Based Tests (proptest) for selfsim-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for selfsim-math using proptest.
//!
//! Covers: node reproduction and range policy of the angular interpolant,
//! bracketing of interpolated values, norm preservation of the
//! meridional → cylindrical rotation.

use ndarray::Array1;
use proptest::prelude::*;
use selfsim_math::geometry::{
    cylindrical_from_spherical, meridional_to_cylindrical, spherical_from_cylindrical,
};
use selfsim_math::interp::interp1d;

/// Strictly increasing angles in (0, π) built from positive increments.
fn angle_table(steps: &[f64]) -> Array1<f64> {
    let mut acc = 0.05;
    let mut out = Vec::with_capacity(steps.len() + 1);
    out.push(acc);
    for s in steps {
        acc += s;
        out.push(acc);
    }
    Array1::from_vec(out)
}

// ── Interpolation Properties ─────────────────────────────────────────

proptest! {
    /// Interpolating at a tabulated node returns the node value exactly.
    #[test]
    fn interp_reproduces_nodes(
        steps in prop::collection::vec(0.01f64..0.3, 1..20),
        seed in -10.0f64..10.0,
    ) {
        let xs = angle_table(&steps);
        let ys = xs.mapv(|x| seed * (3.0 * x).sin() + x * x);
        for i in 0..xs.len() {
            let val = interp1d(xs.view(), ys.view(), xs[i]);
            prop_assert_eq!(val, Some(ys[i]));
        }
    }

    /// Queries strictly outside [min, max] yield no value.
    #[test]
    fn interp_outside_range_is_none(
        steps in prop::collection::vec(0.01f64..0.3, 1..20),
        gap in 1e-6f64..1.0,
    ) {
        let xs = angle_table(&steps);
        let ys = Array1::from_elem(xs.len(), 1.0);
        let first = xs[0];
        let last = xs[xs.len() - 1];
        prop_assert!(interp1d(xs.view(), ys.view(), first - gap).is_none());
        prop_assert!(interp1d(xs.view(), ys.view(), last + gap).is_none());
    }

    /// Interpolated values stay within the bracketing node values.
    #[test]
    fn interp_bounded_by_bracket(
        steps in prop::collection::vec(0.01f64..0.3, 1..20),
        frac in 0.0f64..1.0,
    ) {
        let xs = angle_table(&steps);
        let ys = xs.mapv(|x| (5.0 * x).cos());
        let x = xs[0] + frac * (xs[xs.len() - 1] - xs[0]);
        let val = interp1d(xs.view(), ys.view(), x).expect("inside range");
        let lo = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(val >= lo - 1e-12 && val <= hi + 1e-12,
            "val = {} outside [{}, {}]", val, lo, hi);
    }

    /// Reversing the table order does not change interpolated values.
    #[test]
    fn interp_direction_independent(
        steps in prop::collection::vec(0.01f64..0.3, 1..20),
        frac in 0.0f64..1.0,
    ) {
        let xs = angle_table(&steps);
        let ys = xs.mapv(|x| x.exp());
        let xs_rev: Array1<f64> = xs.iter().rev().cloned().collect();
        let ys_rev: Array1<f64> = ys.iter().rev().cloned().collect();
        let x = xs[0] + frac * (xs[xs.len() - 1] - xs[0]);
        let a = interp1d(xs.view(), ys.view(), x).expect("inside range");
        let b = interp1d(xs_rev.view(), ys_rev.view(), x).expect("inside range");
        prop_assert!((a - b).abs() < 1e-12 * a.abs().max(1.0), "{} vs {}", a, b);
    }
}

// ── Geometry Properties ──────────────────────────────────────────────

proptest! {
    /// The rotation is orthonormal: |(radial, vertical)| = |(x1, x2)|.
    #[test]
    fn rotation_preserves_norm(
        x1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0,
        theta in 0.0f64..std::f64::consts::PI,
    ) {
        let (radial, vertical) = meridional_to_cylindrical(x1, x2, theta);
        let before = x1 * x1 + x2 * x2;
        let after = radial * radial + vertical * vertical;
        prop_assert!((before - after).abs() <= 1e-10 * before.max(1.0),
            "before = {}, after = {}", before, after);
    }

    /// Spherical coordinates of a cylindrical point invert back.
    #[test]
    fn spherical_roundtrip(
        r in 0.01f64..50.0,
        theta in 0.0f64..std::f64::consts::PI,
    ) {
        let (rc, z) = cylindrical_from_spherical(r, theta);
        let (r2, theta2) = spherical_from_cylindrical(rc, z);
        prop_assert!((r2 - r).abs() < 1e-10 * r.max(1.0));
        prop_assert!((theta2 - theta).abs() < 1e-10);
    }
}
