//! Offline boundary dataset checks.
//!
//! Loads every dataset in a directory, reports division counts and overlapping
//! divisions, and resolves one-off points from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geo::Point;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use electorate::config::Config;
use electorate::pip::find_overlaps;
use electorate::{BoundaryStore, DirectorySource, ElectorateResolver, Jurisdiction};

#[derive(Parser, Debug)]
#[command(name = "check")]
#[command(about = "Validate boundary datasets and resolve points")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Boundary dataset directory (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load every dataset present and look for overlapping divisions
    Audit {
        /// Smallest intersection area, in square degrees, reported as an overlap
        #[arg(long, default_value = "1e-10")]
        min_area: f64,

        /// Exit with an error if any overlap is found
        #[arg(long)]
        strict: bool,
    },

    /// Resolve a single point
    Resolve {
        /// Longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// State or territory code
        #[arg(short, long)]
        jurisdiction: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    match args.command {
        Command::Audit { min_area, strict } => audit(&config, min_area, strict),
        Command::Resolve {
            lon,
            lat,
            jurisdiction,
        } => resolve(&config, Point::new(lon, lat), &jurisdiction),
    }
}

fn audit(config: &Config, min_area: f64, strict: bool) -> Result<()> {
    let source = DirectorySource::new(&config.data_dir);
    let present: Vec<Jurisdiction> = Jurisdiction::all()
        .iter()
        .copied()
        .filter(|j| source.has_dataset(*j))
        .collect();

    if !present.contains(&Jurisdiction::Federal) {
        anyhow::bail!(
            "No FEDERAL dataset at {}",
            source.path_for(Jurisdiction::Federal).display()
        );
    }

    for j in &config.supported {
        if !present.contains(j) {
            warn!("{} is marked supported but has no dataset", j);
        }
    }

    let store = BoundaryStore::new(source);
    let mut failed: Vec<Jurisdiction> = Vec::new();
    let mut overlapping = 0;

    for jurisdiction in present {
        let set = match store.ensure_loaded(jurisdiction) {
            Ok(set) => set,
            Err(e) => {
                error!("{}", e);
                failed.push(e.jurisdiction());
                continue;
            }
        };

        info!(
            "{} ({}): {} divisions",
            jurisdiction,
            jurisdiction.display_name(),
            set.len()
        );

        if jurisdiction.is_federal() {
            for state in Jurisdiction::states() {
                let owned = set.iter().filter(|d| d.owner == Some(*state)).count();
                info!("  {}: {} federal divisions", state, owned);
            }
        }

        for overlap in find_overlaps(&set, min_area) {
            warn!(
                "{}: {:?} overlaps {:?} by {:.3e} sq deg ({:?} wins)",
                jurisdiction, overlap.first, overlap.second, overlap.area, overlap.first
            );
            overlapping += 1;
        }
    }

    if !failed.is_empty() {
        let codes: Vec<&str> = failed.iter().map(|j| j.code()).collect();
        anyhow::bail!("Datasets failed to load: {}", codes.join(", "));
    }
    if strict && overlapping > 0 {
        anyhow::bail!("{} overlapping division pair(s)", overlapping);
    }

    info!("Audit complete: {} overlapping pair(s)", overlapping);
    Ok(())
}

fn resolve(config: &Config, point: Point<f64>, code: &str) -> Result<()> {
    let store = BoundaryStore::new(DirectorySource::new(&config.data_dir));
    let resolver = ElectorateResolver::new(store, config.supported.iter().copied());

    let resolution = resolver
        .resolve_code(point, code)
        .with_context(|| format!("Failed to resolve ({}, {}) in {}", point.x(), point.y(), code))?;

    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}
