use clap::{Parser, Subcommand};
use std::path::PathBuf;

use profiler_connector::ScanConfig;

#[derive(Parser)]
#[command(name = "pconn")]
#[command(about = "Profiler connector - schema-aligned batch reads over heterogeneous sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scan configuration and print it with defaults applied
    Validate {
        /// Path to scan YAML file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => {
            let scan = ScanConfig::from_yaml_file(&config)?;
            println!("{}", serde_json::to_string_pretty(&scan)?);
            println!("✓ Scan configuration is valid");
        }
        Commands::Version => {
            println!("pconn version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
