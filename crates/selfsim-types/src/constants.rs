// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Self-Similar Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Header lines skipped unconditionally at the top of a profile file.
pub const HEADER_LINES: usize = 7;

/// Columns per data row: theta followed by the ten mapped quantities.
pub const PROFILE_COLUMNS: usize = 11;

/// Piecewise-linear interpolation needs at least one interval.
pub const MIN_PROFILE_ROWS: usize = 2;

/// Profile read when no path is given on the command line.
pub const DEFAULT_PROFILE_FILE: &str = "beta=1.0e+05-Am=1-Rm=inf.dat";

/// Archive written when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "selfsim_fields.npz";

/// Sentinel stored in mapped arrays where the polar angle falls outside
/// the tabulated range. Never a valid physical value.
pub const MISSING: f64 = f64::NAN;

/// Self-similar exponents zeta in q(r, theta) = r^zeta * q(theta).
pub const ZETA_DENSITY: f64 = -1.5;
pub const ZETA_PRESSURE: f64 = -2.5;
pub const ZETA_VELOCITY: f64 = -0.5;
pub const ZETA_MAGNETIC: f64 = -1.25;
pub const ZETA_DIMENSIONLESS: f64 = 0.0;

/// Default meridional window (half-open, arange semantics).
pub const DEFAULT_R_MIN: f64 = 0.3;
pub const DEFAULT_R_MAX: f64 = 10.0;
pub const DEFAULT_Z_MIN: f64 = -8.0;
pub const DEFAULT_Z_MAX: f64 = 8.0;
pub const DEFAULT_GRID_STEP: f64 = 0.02;
