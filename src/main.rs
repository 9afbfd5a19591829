//! CLI entry point for folio.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use folio::commands;
use folio::config::Config;
use folio::error::Error;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio allocation visualizer and rebalancing advisor")]
#[command(version)]
struct Cli {
    /// Path to folio.toml (defaults are used if the file does not exist)
    #[arg(long, default_value = "folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive allocation view
    Show {
        /// Path to the portfolio JSON file
        #[arg(default_value = "investments.json")]
        portfolio: PathBuf,
    },

    /// Print the allocation breakdown and suggestion
    Report {
        /// Path to the portfolio JSON file
        #[arg(default_value = "investments.json")]
        portfolio: PathBuf,
    },

    /// Print only the rebalancing suggestion
    Suggest {
        /// Path to the portfolio JSON file
        #[arg(default_value = "investments.json")]
        portfolio: PathBuf,
    },

    /// Validate a portfolio file
    Check {
        /// Path to the portfolio JSON file
        #[arg(default_value = "investments.json")]
        portfolio: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Show { portfolio } => commands::show(&config, &portfolio),
        Command::Report { portfolio } => commands::report(&config, &portfolio),
        Command::Suggest { portfolio } => commands::suggest(&config, &portfolio),
        Command::Check { portfolio } => commands::check(&config, &portfolio),
    };

    if let Err(e) = result {
        match &e {
            Error::Portfolio(_) | Error::Allocation(_) => {
                eprintln!("Invalid portfolio: {e}");
                process::exit(2);
            }
            _ => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}
