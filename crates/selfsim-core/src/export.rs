// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Field Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! NumPy `.npz` export of a mapped field, for contour and streamline
//! plotting outside this crate.
//!
//! Keys: `R Z r theta rho prs vx1 vx2 vx3 Bx1 Bx2 Bx3 Am Rm vR vZ BR BZ
//! cs va vp M Ma beta`. Missing points are stored as NaN.

use ndarray::{Array, Dimension};
use ndarray_npy::NpzWriter;
use selfsim_types::error::{SelfSimError, SelfSimResult};
use selfsim_types::state::{FieldMap, Quantity, TargetGrid};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Named arrays of a mapped field, in archive order.
pub fn named_arrays<'a, D: Dimension>(
    map: &'a FieldMap<D>,
    grid: &'a TargetGrid<D>,
) -> Vec<(&'static str, &'a Array<f64, D>)> {
    let mut out = vec![
        ("R", &grid.r),
        ("Z", &grid.z),
        ("r", &map.r),
        ("theta", &map.theta),
    ];
    out.extend(Quantity::ALL.iter().map(|&q| (q.name(), map.get(q))));
    let d = &map.diagnostics;
    out.extend([
        ("vR", &map.v_r),
        ("vZ", &map.v_z),
        ("BR", &map.b_r),
        ("BZ", &map.b_z),
        ("cs", &d.sound_speed),
        ("va", &d.alfven_speed),
        ("vp", &d.poloidal_velocity),
        ("M", &d.mach),
        ("Ma", &d.alfven_mach),
        ("beta", &d.plasma_beta),
    ]);
    out
}

/// Write `map` and its grid coordinates to an uncompressed `.npz` archive.
pub fn write_npz<D: Dimension, P: AsRef<Path>>(
    map: &FieldMap<D>,
    grid: &TargetGrid<D>,
    path: P,
) -> SelfSimResult<()> {
    let path = path.as_ref();
    if map.shape() != grid.shape() {
        return Err(SelfSimError::ShapeMismatch {
            expected: grid.shape().to_vec(),
            found: map.shape().to_vec(),
        });
    }
    let file = File::create(path)?;
    let mut npz = NpzWriter::new(file);
    let arrays = named_arrays(map, grid);
    for (name, array) in &arrays {
        npz.add_array(*name, *array).map_err(|e| {
            SelfSimError::Export(format!("Failed to add '{name}' to '{}': {e}", path.display()))
        })?;
    }
    npz.finish().map_err(|e| {
        SelfSimError::Export(format!("Failed to finish '{}': {e}", path.display()))
    })?;
    info!(path = %path.display(), arrays = arrays.len(), "wrote field archive");
    Ok(())
}
