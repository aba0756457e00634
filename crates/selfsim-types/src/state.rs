// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Self-Similar State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{MIN_PROFILE_ROWS, PROFILE_COLUMNS};
use crate::error::{SelfSimError, SelfSimResult};
use ndarray::{Array, Array1, Dimension, Ix2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical quantities tabulated by the self-similar solution.
/// Discriminants follow the data column order after theta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    #[serde(rename = "rho")]
    Rho,
    #[serde(rename = "prs")]
    Prs,
    #[serde(rename = "vx1")]
    Vx1,
    #[serde(rename = "vx2")]
    Vx2,
    #[serde(rename = "vx3")]
    Vx3,
    #[serde(rename = "Bx1")]
    Bx1,
    #[serde(rename = "Bx2")]
    Bx2,
    #[serde(rename = "Bx3")]
    Bx3,
    #[serde(rename = "Am")]
    Am,
    #[serde(rename = "Rm")]
    Rm,
}

impl Quantity {
    pub const COUNT: usize = PROFILE_COLUMNS - 1;

    /// All quantities in file column order.
    pub const ALL: [Quantity; Quantity::COUNT] = [
        Quantity::Rho,
        Quantity::Prs,
        Quantity::Vx1,
        Quantity::Vx2,
        Quantity::Vx3,
        Quantity::Bx1,
        Quantity::Bx2,
        Quantity::Bx3,
        Quantity::Am,
        Quantity::Rm,
    ];

    /// Position among the mapped quantities (0 = density).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column in a profile data row (column 0 holds theta).
    pub fn column(self) -> usize {
        self.index() + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Rho => "rho",
            Quantity::Prs => "prs",
            Quantity::Vx1 => "vx1",
            Quantity::Vx2 => "vx2",
            Quantity::Vx3 => "vx3",
            Quantity::Bx1 => "Bx1",
            Quantity::Bx2 => "Bx2",
            Quantity::Bx3 => "Bx3",
            Quantity::Am => "Am",
            Quantity::Rm => "Rm",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 1D self-similar solution sampled in polar angle.
///
/// Immutable after construction: `angles` is strictly monotonic (either
/// direction) and finite, and every field column has one value per angle.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    angles: Array1<f64>,
    fields: Vec<Array1<f64>>,
}

impl ProfileTable {
    /// Build a table from an angle column and one column per quantity,
    /// ordered as [`Quantity::ALL`].
    pub fn new(angles: Array1<f64>, fields: Vec<Array1<f64>>) -> SelfSimResult<Self> {
        if fields.len() != Quantity::COUNT {
            return Err(SelfSimError::MalformedProfile(format!(
                "expected {} field columns, got {}",
                Quantity::COUNT,
                fields.len()
            )));
        }
        let n = angles.len();
        if n < MIN_PROFILE_ROWS {
            return Err(SelfSimError::MalformedProfile(format!(
                "profile needs at least {MIN_PROFILE_ROWS} rows, got {n}"
            )));
        }
        for (q, column) in Quantity::ALL.iter().zip(fields.iter()) {
            if column.len() != n {
                return Err(SelfSimError::MalformedProfile(format!(
                    "column '{q}' has {} entries, expected {n}",
                    column.len()
                )));
            }
        }
        if let Some(i) = angles.iter().position(|a| !a.is_finite()) {
            return Err(SelfSimError::MalformedProfile(format!(
                "theta at row {} is not finite: {}",
                i + 1,
                angles[i]
            )));
        }
        let increasing = angles[1] > angles[0];
        for i in 1..n {
            let ordered = if increasing {
                angles[i] > angles[i - 1]
            } else {
                angles[i] < angles[i - 1]
            };
            if !ordered {
                return Err(SelfSimError::MalformedProfile(format!(
                    "theta is not strictly monotonic at row {}: {} follows {}",
                    i + 1,
                    angles[i],
                    angles[i - 1]
                )));
            }
        }
        Ok(ProfileTable { angles, fields })
    }

    /// Build a table from parsed data rows `[theta, rho, prs, ..., Rm]`.
    pub fn from_rows(rows: &[[f64; PROFILE_COLUMNS]]) -> SelfSimResult<Self> {
        let angles = Array1::from_iter(rows.iter().map(|row| row[0]));
        let fields = Quantity::ALL
            .iter()
            .map(|q| Array1::from_iter(rows.iter().map(|row| row[q.column()])))
            .collect();
        Self::new(angles, fields)
    }

    pub fn angles(&self) -> &Array1<f64> {
        &self.angles
    }

    pub fn field(&self, q: Quantity) -> &Array1<f64> {
        &self.fields[q.index()]
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// (min, max) of the tabulated polar angles.
    pub fn angle_range(&self) -> (f64, f64) {
        let first = self.angles[0];
        let last = self.angles[self.angles.len() - 1];
        (first.min(last), first.max(last))
    }

    /// True when `theta` lies within the tabulated angles, end points
    /// included. NaN is never covered.
    pub fn covers(&self, theta: f64) -> bool {
        let (lo, hi) = self.angle_range();
        theta >= lo && theta <= hi
    }
}

/// Sample points of a meridional (R, Z) slice. Both arrays share one shape
/// of any rank; 2D grids from [`TargetGrid::from_axes`] use `ij` indexing,
/// i.e. shape `[nR, nZ]`.
#[derive(Debug, Clone)]
pub struct TargetGrid<D: Dimension = Ix2> {
    pub r: Array<f64, D>,
    pub z: Array<f64, D>,
}

impl<D: Dimension> TargetGrid<D> {
    pub fn new(r: Array<f64, D>, z: Array<f64, D>) -> SelfSimResult<Self> {
        if r.shape() != z.shape() {
            return Err(SelfSimError::ShapeMismatch {
                expected: r.shape().to_vec(),
                found: z.shape().to_vec(),
            });
        }
        Ok(TargetGrid { r, z })
    }

    pub fn shape(&self) -> &[usize] {
        self.r.shape()
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }
}

impl TargetGrid<Ix2> {
    /// Outer product of 1D axes, `R2d[[i, j]] = r[i]`, `Z2d[[i, j]] = z[j]`.
    pub fn from_axes(r_axis: &Array1<f64>, z_axis: &Array1<f64>) -> Self {
        let shape = (r_axis.len(), z_axis.len());
        let r = Array::from_shape_fn(shape, |(i, _)| r_axis[i]);
        let z = Array::from_shape_fn(shape, |(_, j)| z_axis[j]);
        TargetGrid { r, z }
    }
}

/// Scalar MHD diagnostics derived pointwise from a [`FieldMap`].
/// Zero denominators propagate as inf/NaN.
#[derive(Debug, Clone)]
pub struct Diagnostics<D: Dimension = Ix2> {
    /// sqrt(p / rho)
    pub sound_speed: Array<f64, D>,
    /// sqrt(Bx1² + Bx2²) / sqrt(rho)
    pub alfven_speed: Array<f64, D>,
    /// sqrt(vx1² + vx2²)
    pub poloidal_velocity: Array<f64, D>,
    pub mach: Array<f64, D>,
    pub alfven_mach: Array<f64, D>,
    /// 2 p / (Bx1² + Bx2²)
    pub plasma_beta: Array<f64, D>,
}

/// Self-similar fields reconstructed on a [`TargetGrid`].
///
/// Every array has the grid's shape. Points whose polar angle lies outside
/// the profile hold [`crate::constants::MISSING`] in all angular-derived arrays.
#[derive(Debug, Clone)]
pub struct FieldMap<D: Dimension = Ix2> {
    /// Spherical radius sqrt(R² + Z²).
    pub r: Array<f64, D>,
    /// Polar angle atan2(R, Z), measured from the +Z axis.
    pub theta: Array<f64, D>,
    pub rho: Array<f64, D>,
    pub prs: Array<f64, D>,
    pub vx1: Array<f64, D>,
    pub vx2: Array<f64, D>,
    pub vx3: Array<f64, D>,
    pub bx1: Array<f64, D>,
    pub bx2: Array<f64, D>,
    pub bx3: Array<f64, D>,
    pub am: Array<f64, D>,
    pub rm: Array<f64, D>,
    pub v_r: Array<f64, D>,
    pub v_z: Array<f64, D>,
    pub b_r: Array<f64, D>,
    pub b_z: Array<f64, D>,
    pub diagnostics: Diagnostics<D>,
    /// True where the polar angle lies within the profile's range.
    pub coverage: Array<bool, D>,
}

impl<D: Dimension> FieldMap<D> {
    pub fn get(&self, q: Quantity) -> &Array<f64, D> {
        match q {
            Quantity::Rho => &self.rho,
            Quantity::Prs => &self.prs,
            Quantity::Vx1 => &self.vx1,
            Quantity::Vx2 => &self.vx2,
            Quantity::Vx3 => &self.vx3,
            Quantity::Bx1 => &self.bx1,
            Quantity::Bx2 => &self.bx2,
            Quantity::Bx3 => &self.bx3,
            Quantity::Am => &self.am,
            Quantity::Rm => &self.rm,
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.r.shape()
    }

    /// Angular coverage mask. It depends on theta alone, so non-finite
    /// profile values and the exponent table do not affect it.
    pub fn coverage(&self) -> &Array<bool, D> {
        &self.coverage
    }

    pub fn covered_fraction(&self) -> f64 {
        let n = self.coverage.len();
        if n == 0 {
            return 0.0;
        }
        let covered = self.coverage.iter().filter(|&&c| c).count();
        covered as f64 / n as f64
    }
}
