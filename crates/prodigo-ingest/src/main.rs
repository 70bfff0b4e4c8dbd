//! prodigo-ingest: load Prodigo output into an In-Memoria database.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use prodigo_core::config::{CliOverrides, IngestConfig};
use prodigo_core::errors::IngestErrorCode;
use prodigo_ingest::paths::resolve_path;
use prodigo_ingest::{run, IngestPaths, IngestSummary};

#[derive(Parser)]
#[command(name = "prodigo-ingest", version)]
#[command(about = "Ingest Prodigo output into an In-Memoria database")]
#[command(after_help = "\
Example:
    prodigo-ingest ./prodigo-output/manifests/WRBank::01.01.01

Reads rules.jsonl and pipeline-summary.json from the manifests directory and
edges.jsonl / nodes.jsonl from the graph directory, then upserts project
metadata, semantic concepts, features, entry points, and key directories.")]
struct Cli {
    /// Path to the Prodigo manifests directory (e.g., prodigo-output/manifests/AppName::Version)
    manifests_dir: PathBuf,

    /// Graph directory (defaults to ../../graph/<AppName::Version> relative to the manifests directory)
    #[arg(long)]
    graph_dir: Option<PathBuf>,

    /// Database file, relative to the manifests directory (default: in-memoria.db)
    #[arg(long = "db")]
    db_file: Option<String>,

    /// Config file (default: prodigo.toml in the manifests directory, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    prodigo_core::tracing::init_tracing();
    let cli = Cli::parse();

    let manifests_dir = resolve_path(&cli.manifests_dir);
    let overrides = CliOverrides {
        graph_dir: cli.graph_dir.as_deref().map(resolve_path),
        db_file: cli.db_file,
    };

    let config = match IngestConfig::load(&manifests_dir, cli.config.as_deref(), Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.report_string());
            return ExitCode::FAILURE;
        }
    };

    let paths = IngestPaths::new(&manifests_dir, &config);
    match run(&paths, &config) {
        Ok(summary) => {
            print_summary(&summary, &paths);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if !e.is_preflight() {
                tracing::error!(error = %e, "ingestion aborted");
            }
            eprintln!("Error: {}", e.report_string());
            ExitCode::FAILURE
        }
    }
}

fn print_summary(summary: &IngestSummary, paths: &IngestPaths) {
    println!("Ingestion complete for {}", summary.project_id);
    println!("   - {} semantic concepts", summary.concepts);
    if summary.features_mapped {
        println!("   - {} features mapped", summary.features);
    } else {
        println!("   - {} features mapped (graph directory not found)", summary.features);
    }
    println!("   - {} entry points", summary.entry_points);
    println!("   - {} key directories", summary.key_directories);
    println!();
    println!("Database: {}", summary.db_path.display());
    println!("Project path: {}", paths.project_path());
}
