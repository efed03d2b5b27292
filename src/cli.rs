use clap::{Parser, Subcommand};

use crate::commands;
use crate::constants::{DEFAULT_CHART_PORT, DEFAULT_HANGMAN_PORT, DEFAULT_MAX_FAILS};
use crate::utils::init_tracing;

#[derive(Parser)]
#[command(name = "gold-hangman")]
#[command(about = "Gold MACD chart viewer and hangman game", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the gold futures price and MACD chart
    Chart {
        /// Interface to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_CHART_PORT)]
        port: u16,
        /// Verbose logging
        #[arg(long)]
        debug: bool,
        /// Run without a market data source
        #[arg(long)]
        offline: bool,
    },
    /// Serve the hangman game
    Hangman {
        /// Interface to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_HANGMAN_PORT)]
        port: u16,
        /// Verbose logging
        #[arg(long)]
        debug: bool,
        /// Wrong guesses allowed per game
        #[arg(long, default_value_t = DEFAULT_MAX_FAILS, value_parser = clap::value_parser!(u32).range(1..))]
        max_fails: u32,
    },
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { host, port, debug, offline } => {
            init_tracing(debug);
            commands::chart::run(host, port, offline).await;
        }
        Commands::Hangman { host, port, debug, max_fails } => {
            init_tracing(debug);
            commands::hangman::run(host, port, max_fails).await;
        }
    }
}
