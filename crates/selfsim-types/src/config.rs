// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Self-Similar Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::*;
use crate::error::{SelfSimError, SelfSimResult};
use crate::state::{Quantity, TargetGrid};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level mapper configuration. Every section is optional in JSON;
/// an empty object `{}` reproduces the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapperConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub exponents: ScalingExponents,
    /// Map quantities concurrently. Output is identical to the serial path.
    #[serde(default)]
    pub parallel: bool,
}

/// Half-open meridional window sampled with a fixed step on each axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(rename = "R_min", default = "default_r_min")]
    pub r_min: f64,
    #[serde(rename = "R_max", default = "default_r_max")]
    pub r_max: f64,
    #[serde(rename = "dR", default = "default_step")]
    pub dr: f64,
    #[serde(rename = "Z_min", default = "default_z_min")]
    pub z_min: f64,
    #[serde(rename = "Z_max", default = "default_z_max")]
    pub z_max: f64,
    #[serde(rename = "dZ", default = "default_step")]
    pub dz: f64,
}

fn default_r_min() -> f64 {
    DEFAULT_R_MIN
}
fn default_r_max() -> f64 {
    DEFAULT_R_MAX
}
fn default_z_min() -> f64 {
    DEFAULT_Z_MIN
}
fn default_z_max() -> f64 {
    DEFAULT_Z_MAX
}
fn default_step() -> f64 {
    DEFAULT_GRID_STEP
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            r_min: default_r_min(),
            r_max: default_r_max(),
            dr: default_step(),
            z_min: default_z_min(),
            z_max: default_z_max(),
            dz: default_step(),
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> SelfSimResult<()> {
        let axes = [
            ("R", self.r_min, self.r_max, self.dr),
            ("Z", self.z_min, self.z_max, self.dz),
        ];
        for (name, lo, hi, step) in axes {
            if !lo.is_finite() || !hi.is_finite() || !step.is_finite() {
                return Err(SelfSimError::ConfigError(format!(
                    "{name} axis bounds must be finite: min={lo}, max={hi}, step={step}"
                )));
            }
            if step <= 0.0 {
                return Err(SelfSimError::ConfigError(format!(
                    "{name} axis step must be positive, got {step}"
                )));
            }
            if hi <= lo {
                return Err(SelfSimError::ConfigError(format!(
                    "{name} axis is empty: min={lo} >= max={hi}"
                )));
            }
        }
        Ok(())
    }

    /// R and Z axes, `min + k * step` for all values below `max`.
    pub fn axes(&self) -> SelfSimResult<(Array1<f64>, Array1<f64>)> {
        self.validate()?;
        Ok((
            Array1::range(self.r_min, self.r_max, self.dr),
            Array1::range(self.z_min, self.z_max, self.dz),
        ))
    }

    pub fn create_grid(&self) -> SelfSimResult<TargetGrid> {
        let (r_axis, z_axis) = self.axes()?;
        Ok(TargetGrid::from_axes(&r_axis, &z_axis))
    }
}

/// Radial exponents zeta of the self-similar scaling q ∝ r^zeta,
/// grouped by physical class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingExponents {
    #[serde(default = "default_zeta_density")]
    pub density: f64,
    #[serde(default = "default_zeta_pressure")]
    pub pressure: f64,
    /// Applies to vx1, vx2, vx3.
    #[serde(default = "default_zeta_velocity")]
    pub velocity: f64,
    /// Applies to Bx1, Bx2, Bx3.
    #[serde(default = "default_zeta_magnetic")]
    pub magnetic: f64,
    /// Applies to the Am and Rm numbers.
    #[serde(default = "default_zeta_dimensionless")]
    pub dimensionless: f64,
}

fn default_zeta_density() -> f64 {
    ZETA_DENSITY
}
fn default_zeta_pressure() -> f64 {
    ZETA_PRESSURE
}
fn default_zeta_velocity() -> f64 {
    ZETA_VELOCITY
}
fn default_zeta_magnetic() -> f64 {
    ZETA_MAGNETIC
}
fn default_zeta_dimensionless() -> f64 {
    ZETA_DIMENSIONLESS
}

impl Default for ScalingExponents {
    fn default() -> Self {
        ScalingExponents {
            density: ZETA_DENSITY,
            pressure: ZETA_PRESSURE,
            velocity: ZETA_VELOCITY,
            magnetic: ZETA_MAGNETIC,
            dimensionless: ZETA_DIMENSIONLESS,
        }
    }
}

impl ScalingExponents {
    pub fn zeta(&self, q: Quantity) -> f64 {
        match q {
            Quantity::Rho => self.density,
            Quantity::Prs => self.pressure,
            Quantity::Vx1 | Quantity::Vx2 | Quantity::Vx3 => self.velocity,
            Quantity::Bx1 | Quantity::Bx2 | Quantity::Bx3 => self.magnetic,
            Quantity::Am | Quantity::Rm => self.dimensionless,
        }
    }

    pub fn validate(&self) -> SelfSimResult<()> {
        for q in Quantity::ALL {
            let zeta = self.zeta(q);
            if !zeta.is_finite() {
                return Err(SelfSimError::ConfigError(format!(
                    "exponent for '{q}' must be finite, got {zeta}"
                )));
            }
        }
        Ok(())
    }
}

impl MapperConfig {
    /// Load from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SelfSimResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SelfSimResult<()> {
        self.grid.validate()?;
        self.exponents.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exponents() {
        let zeta = ScalingExponents::default();
        assert_eq!(zeta.zeta(Quantity::Rho), -1.5);
        assert_eq!(zeta.zeta(Quantity::Prs), -2.5);
        for q in [Quantity::Vx1, Quantity::Vx2, Quantity::Vx3] {
            assert_eq!(zeta.zeta(q), -0.5);
        }
        for q in [Quantity::Bx1, Quantity::Bx2, Quantity::Bx3] {
            assert_eq!(zeta.zeta(q), -1.25);
        }
        assert_eq!(zeta.zeta(Quantity::Am), 0.0);
        assert_eq!(zeta.zeta(Quantity::Rm), 0.0);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let cfg: MapperConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.exponents, ScalingExponents::default());
        assert!(!cfg.parallel);
        assert!((cfg.grid.r_min - 0.3).abs() < 1e-15);
        assert!((cfg.grid.z_max - 8.0).abs() < 1e-15);
    }

    #[test]
    fn test_partial_json_overrides() {
        let json = r#"{"grid": {"R_max": 2.0, "dZ": 0.5}, "exponents": {"magnetic": -1.0}}"#;
        let cfg: MapperConfig = serde_json::from_str(json).unwrap();
        assert!((cfg.grid.r_max - 2.0).abs() < 1e-15);
        assert!((cfg.grid.dz - 0.5).abs() < 1e-15);
        assert!((cfg.grid.dr - DEFAULT_GRID_STEP).abs() < 1e-15);
        assert_eq!(cfg.exponents.zeta(Quantity::Bx3), -1.0);
        assert_eq!(cfg.exponents.zeta(Quantity::Rho), -1.5);
    }

    #[test]
    fn test_default_grid_matches_arange() {
        let (r, z) = GridConfig::default().axes().unwrap();
        // arange(0.3, 10, 0.02) and arange(-8, 8, 0.02)
        assert!((484..=486).contains(&r.len()), "nR = {}", r.len());
        assert!((799..=801).contains(&z.len()), "nZ = {}", z.len());
        assert!((r[0] - 0.3).abs() < 1e-15);
        assert!(r[r.len() - 1] < 10.0);
        assert!((z[1] - z[0] - 0.02).abs() < 1e-12);
        let grid = GridConfig::default().create_grid().unwrap();
        assert_eq!(grid.shape(), &[r.len(), z.len()]);
    }

    #[test]
    fn test_grid_rejects_bad_step() {
        let cfg = GridConfig {
            dr: 0.0,
            ..GridConfig::default()
        };
        let err = cfg.validate().expect_err("zero step must fail");
        match err {
            SelfSimError::ConfigError(msg) => assert!(msg.contains("step")),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_grid_rejects_empty_axis() {
        let cfg = GridConfig {
            z_min: 1.0,
            z_max: 1.0,
            ..GridConfig::default()
        };
        assert!(cfg.create_grid().is_err());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = MapperConfig {
            parallel: true,
            ..MapperConfig::default()
        };
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert!(json.contains("\"R_min\""));
        let cfg2: MapperConfig = serde_json::from_str(&json).unwrap();
        assert!(cfg2.parallel);
        assert_eq!(cfg.exponents, cfg2.exponents);
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        let path = std::env::temp_dir().join("selfsim_config_does_not_exist.json");
        let err = MapperConfig::from_file(&path).expect_err("missing file");
        assert!(matches!(err, SelfSimError::Io(_)));
    }

    #[test]
    fn test_from_file_accepts_path() {
        let path = std::env::temp_dir().join(format!(
            "selfsim_config_{}_{}.json",
            std::process::id(),
            line!()
        ));
        std::fs::write(&path, r#"{"parallel": true, "exponents": {"density": -2.0}}"#)
            .expect("write fixture");
        let cfg = MapperConfig::from_file(&path);
        let _ = std::fs::remove_file(&path);
        let cfg = cfg.expect("load must succeed");
        assert!(cfg.parallel);
        assert_eq!(cfg.exponents.zeta(Quantity::Rho), -2.0);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_file_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"selfsim_config_\xff.json");
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "{}").expect("write fixture");
        let cfg = MapperConfig::from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(cfg.expect("load must succeed").exponents, ScalingExponents::default());
    }
}
