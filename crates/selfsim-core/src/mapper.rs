// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Self-Similar Mapper
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reconstruction of 2D fields from a 1D self-similar profile.
//!
//! For every grid point (R, Z):
//!   r     = sqrt(R² + Z²)
//!   theta = atan2(R, Z)
//!   q     = r^zeta(q) * interp(theta)
//!
//! Points with theta outside the tabulated range get the NaN sentinel and
//! are false in the coverage mask, which is derived from theta alone.
//! Meridional velocity and field pairs are then rotated to (R, Z)
//! components using the same theta array.

use crate::diagnostics::compute_diagnostics;
use ndarray::{Array, Dimension, Zip};
use selfsim_math::geometry::{rotate_to_cylindrical, self_similar_scale, spherical_coordinates};
use selfsim_math::interp::{interp1d, interp1d_or_nan};
use selfsim_types::config::{MapperConfig, ScalingExponents};
use selfsim_types::state::{FieldMap, ProfileTable, Quantity, TargetGrid};
use tracing::{debug, warn};

/// Maps self-similar profiles onto meridional grids with a fixed
/// exponent table.
#[derive(Debug, Clone, Default)]
pub struct SelfSimilarMapper {
    exponents: ScalingExponents,
    parallel: bool,
}

impl SelfSimilarMapper {
    pub fn new(exponents: ScalingExponents) -> Self {
        SelfSimilarMapper {
            exponents,
            parallel: false,
        }
    }

    pub fn from_config(config: &MapperConfig) -> Self {
        SelfSimilarMapper {
            exponents: config.exponents.clone(),
            parallel: config.parallel,
        }
    }

    /// Evaluate grid cells on the rayon pool. Cells are independent, so
    /// the result matches the serial path bit for bit.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn exponents(&self) -> &ScalingExponents {
        &self.exponents
    }

    /// Value of `q` at spherical `(r, theta)`, or `None` when theta lies
    /// outside the profile.
    pub fn map_point(
        &self,
        table: &ProfileTable,
        q: Quantity,
        r: f64,
        theta: f64,
    ) -> Option<f64> {
        let shape = interp1d(table.angles().view(), table.field(q).view(), theta)?;
        Some(self_similar_scale(shape, r, self.exponents.zeta(q)))
    }

    /// Map a single quantity onto precomputed spherical coordinates.
    pub fn map_quantity<D: Dimension>(
        &self,
        table: &ProfileTable,
        q: Quantity,
        radius: &Array<f64, D>,
        theta: &Array<f64, D>,
    ) -> Array<f64, D> {
        let xs = table.angles().view();
        let ys = table.field(q).view();
        let zeta = self.exponents.zeta(q);
        let point = |&r: &f64, &t: &f64| self_similar_scale(interp1d_or_nan(xs, ys, t), r, zeta);

        let cells = Zip::from(radius).and(theta);
        if self.parallel {
            cells.par_map_collect(point)
        } else {
            cells.map_collect(point)
        }
    }

    /// Reconstruct every quantity, the cylindrical vector projections and
    /// the MHD diagnostics on `grid`.
    pub fn map_field<D: Dimension>(
        &self,
        table: &ProfileTable,
        grid: &TargetGrid<D>,
    ) -> FieldMap<D> {
        debug!(shape = ?grid.shape(), exponents = ?self.exponents, "mapping self-similar field");
        let (radius, theta) = spherical_coordinates(&grid.r, &grid.z);

        let [rho, prs, vx1, vx2, vx3, bx1, bx2, bx3, am, rm] =
            Quantity::ALL.map(|q| self.map_quantity(table, q, &radius, &theta));

        let (v_r, v_z) = rotate_to_cylindrical(&vx1, &vx2, &theta);
        let (b_r, b_z) = rotate_to_cylindrical(&bx1, &bx2, &theta);
        let diagnostics = compute_diagnostics(&rho, &prs, &vx1, &vx2, &bx1, &bx2);
        let coverage = theta.mapv(|t| table.covers(t));

        let map = FieldMap {
            r: radius,
            theta,
            rho,
            prs,
            vx1,
            vx2,
            vx3,
            bx1,
            bx2,
            bx3,
            am,
            rm,
            v_r,
            v_z,
            b_r,
            b_z,
            diagnostics,
            coverage,
        };

        let covered = map.covered_fraction();
        if covered < 1.0 {
            let (theta_min, theta_max) = table.angle_range();
            warn!(
                covered,
                theta_min, theta_max, "part of the grid lies outside the profile's angular range"
            );
        }
        map
    }
}

/// [`SelfSimilarMapper::map_field`] with the standard exponent table.
pub fn map_field<D: Dimension>(table: &ProfileTable, grid: &TargetGrid<D>) -> FieldMap<D> {
    SelfSimilarMapper::default().map_field(table, grid)
}
