//! Capnote CLI - Command Line Operations for Capped-Gain Pricing
//!
//! This is the operational entry point for the capnote pricing library.
//!
//! # Commands
//!
//! - `capnote price` - Price a capped-gain note by direct quadrature
//!
//! # Exit Codes
//!
//! Returns 0 on success; invalid parameters and convergence failures exit
//! non-zero with a structured error message.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Capnote Capped-Gain Pricing CLI
#[derive(Parser)]
#[command(name = "capnote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a capped-gain note by quadrature against the lognormal density
    Price {
        /// Initial asset price (S0)
        #[arg(long, default_value = "100.0")]
        spot: f64,

        /// Participation factor applied to the gain (alpha)
        #[arg(long, default_value = "0.8")]
        participation: f64,

        /// Cap threshold on the terminal price (H)
        #[arg(long, default_value = "120.0")]
        cap: f64,

        /// Drift / risk-free rate (r)
        #[arg(long, default_value = "0.05")]
        rate: f64,

        /// Volatility (sigma)
        #[arg(long, default_value = "0.2")]
        volatility: f64,

        /// Time horizon in years (T)
        #[arg(long, default_value = "1.0")]
        expiry: f64,

        /// Acceptance tolerance on the quadrature error bound
        #[arg(long, default_value = "1e-6")]
        tolerance: f64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            participation,
            cap,
            rate,
            volatility,
            expiry,
            tolerance,
            format,
        } => commands::price::run(
            spot,
            participation,
            cap,
            rate,
            volatility,
            expiry,
            tolerance,
            &format,
        ),
    }
}
