// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Self-Similar Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reconstruction of axisymmetric 2D fields from 1D self-similar profiles.
//!
//! Profile loading, r^zeta mapping onto a meridional grid, cylindrical
//! projection of meridional vectors, MHD diagnostics and `.npz` export.

pub mod diagnostics;
pub mod export;
pub mod mapper;
pub mod profile;
pub mod summary;
