mod app;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use numberline_core::{TimelineDataset, TimelineViewer, ViewerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: numberline <numbers.json>");
        std::process::exit(1);
    }

    init_logging()?;

    let path = PathBuf::from(&args[1]);
    let dataset = match load_dataset(&path) {
        Ok(dataset) => dataset,
        Err(err) => {
            // No retry and nothing rendered; the terminal is never entered.
            tracing::error!(path = %path.display(), error = %err, "failed to load dataset");
            return Err(err);
        }
    };
    tracing::info!(path = %path.display(), entries = dataset.len(), "dataset loaded");

    let viewer = TimelineViewer::new(dataset, ViewerConfig::default());
    app::run(viewer)
}

fn load_dataset(path: &Path) -> Result<TimelineDataset> {
    let data =
        std::fs::read(path).with_context(|| format!("reading dataset {}", path.display()))?;
    let dataset = numberline_core::parse_dataset(&data)
        .with_context(|| format!("parsing dataset {}", path.display()))?;
    Ok(dataset)
}

/// Logs go to a file: stdout belongs to the terminal UI.
fn init_logging() -> Result<()> {
    let file = std::fs::File::create("numberline.log").context("creating log file")?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("numberline=info,numberline_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
