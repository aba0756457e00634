// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — MHD Diagnostics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pointwise MHD diagnostics of a mapped self-similar field.
//!
//! Only the poloidal (meridional) components enter the Alfvén speed,
//! the flow speed and the plasma beta. Zero denominators are not guarded:
//! they yield inf/NaN, which downstream plotting treats as missing.

use ndarray::{Array, Dimension, Zip};
use selfsim_types::state::Diagnostics;

/// c_s = sqrt(p / rho)
#[inline]
pub fn sound_speed(prs: f64, rho: f64) -> f64 {
    (prs / rho).sqrt()
}

/// v_A = |B_p| / sqrt(rho)
#[inline]
pub fn alfven_speed(bx1: f64, bx2: f64, rho: f64) -> f64 {
    (bx1 * bx1 + bx2 * bx2).sqrt() / rho.sqrt()
}

/// |v_p| = sqrt(vx1² + vx2²)
#[inline]
pub fn poloidal_speed(vx1: f64, vx2: f64) -> f64 {
    (vx1 * vx1 + vx2 * vx2).sqrt()
}

/// beta = 2 p / B_p²
#[inline]
pub fn plasma_beta(prs: f64, bx1: f64, bx2: f64) -> f64 {
    2.0 * prs / (bx1 * bx1 + bx2 * bx2)
}

/// Evaluate all diagnostics elementwise over mapped arrays of one shape.
pub fn compute_diagnostics<D: Dimension>(
    rho: &Array<f64, D>,
    prs: &Array<f64, D>,
    vx1: &Array<f64, D>,
    vx2: &Array<f64, D>,
    bx1: &Array<f64, D>,
    bx2: &Array<f64, D>,
) -> Diagnostics<D> {
    let sound = Zip::from(prs).and(rho).map_collect(|&p, &d| sound_speed(p, d));
    let alfven = Zip::from(bx1)
        .and(bx2)
        .and(rho)
        .map_collect(|&b1, &b2, &d| alfven_speed(b1, b2, d));
    let vp = Zip::from(vx1).and(vx2).map_collect(|&v1, &v2| poloidal_speed(v1, v2));
    let mach = Zip::from(&vp).and(&sound).map_collect(|&v, &c| v / c);
    let alfven_mach = Zip::from(&vp).and(&alfven).map_collect(|&v, &a| v / a);
    let beta = Zip::from(prs)
        .and(bx1)
        .and(bx2)
        .map_collect(|&p, &b1, &b2| plasma_beta(p, b1, b2));

    Diagnostics {
        sound_speed: sound,
        alfven_speed: alfven,
        poloidal_velocity: vp,
        mach,
        alfven_mach,
        plasma_beta: beta,
    }
}
