// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Meridional Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spherical ↔ cylindrical relations on a meridional (R, Z) slice.
//!
//! The polar angle is measured from the +Z axis: theta = atan2(R, Z).
//! A point on the midplane (Z = 0, R > 0) has theta = π/2.

use ndarray::{Array, Dimension, Zip};

/// Spherical `(r, theta)` of the cylindrical point `(R, Z)`.
#[inline]
pub fn spherical_from_cylindrical(r_cyl: f64, z: f64) -> (f64, f64) {
    (r_cyl.hypot(z), r_cyl.atan2(z))
}

/// Cylindrical `(R, Z)` of the spherical point `(r, theta)`.
#[inline]
pub fn cylindrical_from_spherical(r: f64, theta: f64) -> (f64, f64) {
    let (s, c) = theta.sin_cos();
    (r * s, r * c)
}

/// Rotate meridional components `(x1 along r, x2 along theta)` into
/// cylindrical `(radial, vertical)` components at polar angle `theta`.
#[inline]
pub fn meridional_to_cylindrical(x1: f64, x2: f64, theta: f64) -> (f64, f64) {
    let (s, c) = theta.sin_cos();
    (x1 * s + x2 * c, x1 * c - x2 * s)
}

/// Self-similar closure q(r, theta) = r^zeta * shape(theta).
#[inline]
pub fn self_similar_scale(shape: f64, r: f64, zeta: f64) -> f64 {
    r.powf(zeta) * shape
}

/// Elementwise spherical radius and polar angle of a coordinate grid.
pub fn spherical_coordinates<D: Dimension>(
    r_cyl: &Array<f64, D>,
    z: &Array<f64, D>,
) -> (Array<f64, D>, Array<f64, D>) {
    let radius = Zip::from(r_cyl).and(z).map_collect(|&rc, &zc| rc.hypot(zc));
    let theta = Zip::from(r_cyl).and(z).map_collect(|&rc, &zc| rc.atan2(zc));
    (radius, theta)
}

/// Elementwise [`meridional_to_cylindrical`] over a grid, returning
/// `(radial, vertical)` arrays.
pub fn rotate_to_cylindrical<D: Dimension>(
    x1: &Array<f64, D>,
    x2: &Array<f64, D>,
    theta: &Array<f64, D>,
) -> (Array<f64, D>, Array<f64, D>) {
    let radial = Zip::from(x1)
        .and(x2)
        .and(theta)
        .map_collect(|&a, &b, &t| meridional_to_cylindrical(a, b, t).0);
    let vertical = Zip::from(x1)
        .and(x2)
        .and(theta)
        .map_collect(|&a, &b, &t| meridional_to_cylindrical(a, b, t).1);
    (radial, vertical)
}
