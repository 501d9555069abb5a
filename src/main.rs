use anyhow::{Context, Result};
use clap::Parser;
use clusterplot::{
    DEFAULT_INPUT, FigureConfig, LoadError, aggregate, load, output_path_for, partition,
    render_with,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

/// Render DBSCAN clustering results as a multi-panel PNG
#[derive(Parser, Debug)]
#[command(name = "clusterplot", version)]
struct Cli {
    /// CSV with a header line followed by x,y,label rows
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&cli.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(LoadError::FileNotFound { path }) = err.downcast_ref::<LoadError>() {
                eprintln!("Error: File '{}' not found", path.display());
                eprintln!("Run the DBSCAN test program first to generate the CSV file");
            } else {
                eprintln!("Error: {:?}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path) -> Result<()> {
    let records =
        load(input).with_context(|| format!("Failed to load {}", input.display()))?;
    println!("Loaded {} points from {}", records.len(), input.display());

    let parts = partition(&records);
    let aggregates = aggregate(&parts.clusters);
    tracing::info!(
        clusters = aggregates.len(),
        noise = parts.noise.len(),
        "aggregated clusters"
    );

    let output = output_path_for(input);
    let config = FigureConfig::default()
        .title(format!("DBSCAN Comprehensive Analysis - {}", input.display()));

    render_with(&records, &parts, &aggregates, &output, &config)
        .with_context(|| format!("Failed to render {}", output.display()))?;
    println!("Saved comprehensive plot to: {}", output.display());

    Ok(())
}
