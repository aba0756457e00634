// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Field Summary
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{ArrayBase, Data, Dimension};
use std::fmt;

/// Range of the finite values of a mapped array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    pub min: f64,
    pub max: f64,
    pub finite: usize,
    pub total: usize,
}

impl FieldSummary {
    pub fn from_array<S, D>(values: &ArrayBase<S, D>) -> Self
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let mut summary = FieldSummary {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            finite: 0,
            total: values.len(),
        };
        for &v in values.iter().filter(|v| v.is_finite()) {
            summary.min = summary.min.min(v);
            summary.max = summary.max.max(v);
            summary.finite += 1;
        }
        summary
    }

    /// Fraction of entries that are finite (0 for an empty array).
    pub fn finite_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.finite as f64 / self.total as f64
        }
    }
}

impl fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.finite == 0 {
            return write!(f, "no finite values ({} points)", self.total);
        }
        write!(
            f,
            "[{:.4e}, {:.4e}] over {}/{} points",
            self.min, self.max, self.finite, self.total
        )
    }
}
