use anyhow::Result;
use clap::Parser;
use proc_advisor::{config::Config, dataset::Manifest, pipeline, report};
use std::path::PathBuf;
use tracing::{info, warn};

/// Scans usage snapshots and proposes low-value processes to terminate.
///
/// Snapshot acquisition and process termination are handled by separate
/// tools; this command only runs the classification pipeline over files
/// named explicitly on the command line.
#[derive(Parser, Debug)]
#[command(name = "proc-advisor", version)]
struct Cli {
    /// Snapshot CSV file (repeatable); required
    #[arg(long = "snapshot", required = true)]
    snapshots: Vec<PathBuf>,

    /// Historical reference CSV file (repeatable); optional
    #[arg(long = "reference")]
    references: Vec<PathBuf>,

    /// Config file path (defaults to the per-user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output artifact path, overriding the configured one
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = if config_path.exists() {
        match Config::load(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };
    if let Some(output) = cli.output {
        config.output.artifact = output;
    }

    let manifest = Manifest {
        snapshots: cli.snapshots,
        references: cli.references,
    };

    let run = pipeline::run(&manifest, &config)?;

    println!("Model accuracy: {:.2}", run.evaluation.accuracy);

    if run.removable.is_empty() {
        println!("No removable low-value processes found.");
    } else {
        println!("Suggested removable processes based on usage patterns:");
        println!("{}", report::candidate_table(&run.removable));
    }

    println!(
        "\nTop {} processes by combined usage:",
        run.top_consumers.len()
    );
    println!("{}", report::candidate_table(&run.top_consumers));
    println!("Candidate table saved to {}.", run.artifact.display());

    Ok(())
}
