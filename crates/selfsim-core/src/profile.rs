// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Self-Similar Profile Loader
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reader for tabulated self-similar solutions.
//!
//! Expected layout:
//! ```text
//! <7 header lines, ignored>
//! theta rho prs vx1 vx2 vx3 bx1 bx2 bx3 Am Rm
//! ...
//! ```
//! After the header, `#` starts a comment that runs to the end of the
//! line; lines left blank are skipped.

use selfsim_types::constants::{HEADER_LINES, PROFILE_COLUMNS};
use selfsim_types::error::{SelfSimError, SelfSimResult};
use selfsim_types::state::ProfileTable;
use std::path::Path;
use tracing::{debug, info};

fn parse_value(line_no: usize, column: usize, token: &str) -> SelfSimResult<f64> {
    token.parse::<f64>().map_err(|e| {
        SelfSimError::ProfileRead(format!(
            "line {line_no}, column {}: cannot parse '{token}' as a number: {e}",
            column + 1
        ))
    })
}

/// Parse a profile from its text content.
pub fn parse_profile(text: &str) -> SelfSimResult<ProfileTable> {
    let mut lines = text.lines().enumerate();
    let header = lines.by_ref().take(HEADER_LINES).count();
    if header < HEADER_LINES {
        return Err(SelfSimError::ProfileRead(format!(
            "expected {HEADER_LINES} header lines, found {header}"
        )));
    }

    let mut rows: Vec<[f64; PROFILE_COLUMNS]> = Vec::new();
    for (idx, raw_line) in lines {
        let line = raw_line
            .split_once('#')
            .map_or(raw_line, |(data, _)| data)
            .trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != PROFILE_COLUMNS {
            return Err(SelfSimError::ProfileRead(format!(
                "line {line_no}: expected {PROFILE_COLUMNS} columns, found {}",
                tokens.len()
            )));
        }
        let mut row = [0.0; PROFILE_COLUMNS];
        for (column, token) in tokens.iter().enumerate() {
            row[column] = parse_value(line_no, column, token)?;
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), "parsed profile rows");

    ProfileTable::from_rows(&rows)
}

/// Read and parse a profile file. An unreadable file is a
/// [`SelfSimError::ProfileRead`], not an I/O error.
pub fn load_profile<P: AsRef<Path>>(path: P) -> SelfSimResult<ProfileTable> {
    let path = path.as_ref();
    info!(path = %path.display(), "opening self-similar profile");
    let text = std::fs::read_to_string(path).map_err(|e| {
        SelfSimError::ProfileRead(format!("cannot read '{}': {e}", path.display()))
    })?;
    let table = parse_profile(&text)?;
    let (theta_min, theta_max) = table.angle_range();
    info!(rows = table.len(), theta_min, theta_max, "profile loaded");
    Ok(table)
}
