//! Error types for density model construction.

use capnote_core::types::PricingError;
use thiserror::Error;

/// Density model parameter errors.
///
/// Each variant carries the offending value so callers can report exactly
/// which input was rejected.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidExpiry`: Non-positive time horizon
///
/// # Examples
/// ```
/// use capnote_models::density::DensityError;
///
/// let err = DensityError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DensityError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid time horizon (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },
}

impl From<DensityError> for PricingError {
    fn from(err: DensityError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
