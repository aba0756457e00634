// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Self-Similar Map CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! selfsim-map: reconstruct 2D fields from a 1D self-similar profile and
//! write them to a `.npz` archive for plotting.

use anyhow::{Context, Result};
use clap::Parser;
use selfsim_core::export::write_npz;
use selfsim_core::mapper::SelfSimilarMapper;
use selfsim_core::profile::load_profile;
use selfsim_core::summary::FieldSummary;
use selfsim_types::config::MapperConfig;
use selfsim_types::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_PROFILE_FILE};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "selfsim-map")]
#[command(about = "Map a self-similar wind/accretion profile onto an (R, Z) grid")]
#[command(version)]
struct Args {
    /// Profile data file (7 header lines, then 11 columns per row)
    profile: Option<PathBuf>,

    /// JSON configuration (grid window, exponents, parallel)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output .npz archive
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Evaluate grid cells in parallel
    #[arg(long)]
    parallel: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let profile_path = match &args.profile {
        Some(path) => path.clone(),
        None => {
            info!("No filename given. Using default {DEFAULT_PROFILE_FILE}");
            PathBuf::from(DEFAULT_PROFILE_FILE)
        }
    };

    let mut config = match &args.config {
        Some(path) => MapperConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => MapperConfig::default(),
    };
    config.parallel |= args.parallel;

    let table = load_profile(&profile_path)
        .with_context(|| format!("Failed to load profile: {}", profile_path.display()))?;
    let grid = config
        .grid
        .create_grid()
        .context("Failed to build the (R, Z) grid")?;
    info!(shape = ?grid.shape(), parallel = config.parallel, "mapping");

    let mapper = SelfSimilarMapper::from_config(&config);
    let map = mapper.map_field(&table, &grid);

    info!("coverage: {:.1}% of grid points", 100.0 * map.covered_fraction());
    info!("rho:  {}", FieldSummary::from_array(&map.rho));
    info!("M:    {}", FieldSummary::from_array(&map.diagnostics.mach));
    info!("M_A:  {}", FieldSummary::from_array(&map.diagnostics.alfven_mach));
    info!("beta: {}", FieldSummary::from_array(&map.diagnostics.plasma_beta));

    write_npz(&map, &grid, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
