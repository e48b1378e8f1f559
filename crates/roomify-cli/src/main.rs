mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roomify", about = "Floor plan upload and visualizer tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and encode a floor plan, then hand it off to a visualizer view
    Upload(commands::upload::UploadArgs),
    /// Open the visualizer view for a handed-off floor plan
    Visualize(commands::visualize::VisualizeArgs),
    /// Print or save the default upload config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Upload(args) => commands::upload::run(args),
        Commands::Visualize(args) => commands::visualize::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
