//! Birthsign Tools - validator and viewer for birthsign data files

use std::path::PathBuf;
use std::process::ExitCode;

use birthsign_core::loader::DEFAULT_DATA_FILE;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "birthsign-tools")]
#[command(about = "Validate and inspect birthsign data files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the structure of every birthsign in a data file
    Validate {
        /// Path to the birthsign JSON file
        #[arg(default_value = DEFAULT_DATA_FILE)]
        path: PathBuf,
    },
    /// Print the bonuses of one birthsign
    Show {
        /// Birthsign name (case-insensitive)
        name: String,

        /// Path to the birthsign JSON file
        #[arg(long, short, default_value = DEFAULT_DATA_FILE)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating birthsigns in: {}", path.display());
            birthsign_tools::validate::validate_data_file(&path, &mut stdout)
        }
        Commands::Show { name, file } => {
            birthsign_tools::show::show_birthsign(&file, &name, &mut stdout).map(|()| true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
