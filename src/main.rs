use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::io;
use std::path::PathBuf;

use polystat::commands::CommandHandler;
use polystat::config::FileConfig;
use polystat::store::PolygonSet;

/// Load polygons from a file and answer area/vertex statistics read from stdin
///
/// Polygon lines look like `3 (0;0) (0;1) (1;0)`. After loading, each polygon
/// is echoed, then one command per stdin line is answered:
///   ECHO <polygon>
///   GET_AREA <polygon>
///   AREA ODD | EVEN | MEAN | <vertex count>
///   MAX AREA | VERTEXES
///   MIN AREA | VERTEXES
///
/// Examples:
///   # Answer commands typed interactively against tests.txt
///   polystat commands.txt
///
///   # Read polygons from another file and pipe commands in
///   polystat commands.txt --polygons shapes.txt < commands.txt
#[derive(Parser, Debug)]
#[command(name = "polystat")]
#[command(version, about, long_about = None)]
struct Args {
    /// Instruction file name (required, recorded in the log only)
    filename: PathBuf,

    /// Polygon data file (defaults to tests.txt)
    #[arg(short = 'p', long)]
    polygons: Option<PathBuf>,

    /// Path to config file (optional, auto-searches polystat.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (file_config, rejected) = match args.config {
        Some(ref config_path) => (Some(FileConfig::from_path(config_path)?), Vec::new()),
        None => {
            let discovered = FileConfig::discover();
            (discovered.config, discovered.rejected)
        }
    };
    let config = file_config.unwrap_or_default();

    init_logging(args.verbose || config.verbose);
    for (path, reason) in &rejected {
        warn!("Failed to parse config file {:?}: {}", path, reason);
    }

    let polygons_path = args.polygons.clone().unwrap_or(config.polygons);
    debug!("Instruction file: {}", args.filename.display());

    let report = PolygonSet::load_file(&polygons_path).context("Failed to load polygons")?;
    if !report.skipped.is_empty() {
        info!(
            "Skipped {} malformed lines in {}",
            report.skipped.len(),
            polygons_path.display()
        );
    }

    let handler = CommandHandler::new(report.set);
    let mut out = io::stdout().lock();

    handler
        .print_polygons(&mut out)
        .context("Failed to write polygons")?;
    handler
        .run(io::stdin().lock(), &mut out)
        .context("Command loop failed")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
