// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Angular Interpolation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Piecewise-linear interpolation over a tabulated 1D coordinate.
//!
//! Queries outside the tabulated range yield no value instead of being
//! clamped or extrapolated; the range end points themselves are valid.

use ndarray::ArrayView1;

/// Linear interpolation of `(xs, ys)` at `x`.
///
/// `xs` must be strictly monotonic, increasing or decreasing, with at least
/// two nodes. Returns `None` for NaN queries or `x` strictly outside
/// `[min(xs), max(xs)]`. A query that hits a node returns that node's value
/// exactly.
pub fn interp1d(xs: ArrayView1<'_, f64>, ys: ArrayView1<'_, f64>, x: f64) -> Option<f64> {
    let n = xs.len();
    if n < 2 || ys.len() != n || x.is_nan() {
        return None;
    }
    let ascending = xs[n - 1] > xs[0];
    let (lo, hi) = if ascending {
        (xs[0], xs[n - 1])
    } else {
        (xs[n - 1], xs[0])
    };
    if x < lo || x > hi {
        return None;
    }

    // Bisect for the last node not past x along the table's own ordering.
    let not_past = |v: f64| if ascending { v <= x } else { v >= x };
    let mut left = 0usize;
    let mut right = n;
    while right - left > 1 {
        let mid = (left + right) / 2;
        if not_past(xs[mid]) {
            left = mid;
        } else {
            right = mid;
        }
    }

    let i = left;
    if xs[i] == x || i == n - 1 {
        return Some(ys[i]);
    }
    let t = (x - xs[i]) / (xs[i + 1] - xs[i]);
    Some(ys[i] + t * (ys[i + 1] - ys[i]))
}

/// [`interp1d`] with missing values encoded as NaN, for storage in arrays.
pub fn interp1d_or_nan(xs: ArrayView1<'_, f64>, ys: ArrayView1<'_, f64>, x: f64) -> f64 {
    interp1d(xs, ys, x).unwrap_or(f64::NAN)
}
