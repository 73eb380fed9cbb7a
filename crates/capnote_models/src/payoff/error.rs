//! Error types for payoff construction.

use capnote_core::types::PricingError;
use thiserror::Error;

/// Payoff parameter errors.
///
/// # Variants
/// - `InvalidCap`: Non-positive cap threshold
///
/// # Examples
/// ```
/// use capnote_models::payoff::PayoffError;
///
/// let err = PayoffError::InvalidCap { cap: 0.0 };
/// assert!(format!("{}", err).contains("cap"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PayoffError {
    /// Invalid cap threshold (non-positive).
    #[error("Invalid cap threshold: H = {cap}")]
    InvalidCap {
        /// The invalid cap value
        cap: f64,
    },
}

impl From<PayoffError> for PricingError {
    fn from(err: PayoffError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cap_display() {
        let err = PayoffError::InvalidCap { cap: -5.0 };
        assert_eq!(format!("{}", err), "Invalid cap threshold: H = -5");
    }

    #[test]
    fn test_conversion_to_pricing_error() {
        let err = PayoffError::InvalidCap { cap: 0.0 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("cap")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
