//! Price command implementation
//!
//! Computes the expected capped-gain payoff through the capnote_models
//! quadrature pricer and prints the valuation.

use tracing::info;

use capnote_models::density::LognormalTerminal;
use capnote_models::payoff::CappedGainPayoff;
use capnote_models::pricing::{
    ExpectationError, PricingConfig, QuadratureConfig, QuadraturePricer,
};

use crate::{CliError, Result};

/// Run the price command
#[allow(clippy::too_many_arguments)]
pub fn run(
    spot: f64,
    participation: f64,
    cap: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    tolerance: f64,
    format: &str,
) -> Result<()> {
    info!("Starting capped-gain pricing...");
    info!("  Spot: {}", spot);
    info!("  Participation: {}", participation);
    info!("  Cap: {}", cap);
    info!("  Rate: {}", rate);
    info!("  Volatility: {}", volatility);
    info!("  Expiry: {}", expiry);
    info!("  Tolerance: {}", tolerance);

    if tolerance <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Tolerance must be positive, got {}",
            tolerance
        )));
    }

    let model =
        LognormalTerminal::new(spot, rate, volatility, expiry).map_err(ExpectationError::from)?;
    let payoff = CappedGainPayoff::new(participation, cap).map_err(ExpectationError::from)?;

    let config = PricingConfig::new(QuadratureConfig::default(), tolerance);
    let valuation = QuadraturePricer::new(config).expected_payoff(&model, &payoff)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&valuation)?);
        }
        "table" => {
            println!("\n┌────────────────────┬──────────────────┐");
            println!("│ {:<18} │ {:>16.8} │", "Expected payoff", valuation.expected);
            println!("│ {:<18} │ {:>16.2e} │", "Error bound", valuation.abs_error);
            println!("│ {:<18} │ {:>16} │", "Subdivisions", valuation.subdivisions);
            println!("└────────────────────┴──────────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Pricing complete");
    Ok(())
}
