// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Self-Similar Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfSimError {
    /// Missing file, short header, wrong column count or non-numeric token.
    #[error("Profile read error: {0}")]
    ProfileRead(String),

    /// Table parsed but violates the interpolation contract.
    #[error("Malformed profile: {0}")]
    MalformedProfile(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Grid shape mismatch: R has shape {expected:?}, Z has shape {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SelfSimResult<T> = Result<T, SelfSimError>;
