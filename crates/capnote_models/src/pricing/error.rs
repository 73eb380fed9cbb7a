//! Error types for expectation pricing.

use capnote_core::types::{PricingError, QuadratureError};
use thiserror::Error;

use crate::density::DensityError;
use crate::payoff::PayoffError;

/// Expectation pricing errors.
///
/// Parameter rejections happen at the boundary, before any integration; a
/// convergence shortfall is surfaced after the fact with the best estimate
/// and its error bound attached, so callers can still decide whether the
/// precision is acceptable.
///
/// # Variants
/// - `Density`: Invalid model parameters
/// - `Payoff`: Invalid payoff parameters
/// - `Quadrature`: Quadrature engine misuse (non-finite integrand values)
/// - `NotConverged`: Error bound above the acceptance tolerance
///
/// # Examples
/// ```
/// use capnote_models::pricing::ExpectationError;
///
/// let err = ExpectationError::NotConverged {
///     estimate: 1.37,
///     abs_error: 1e-3,
///     tolerance: 1e-6,
/// };
/// assert!(format!("{}", err).contains("tolerance"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExpectationError {
    /// Invalid density model parameters.
    #[error(transparent)]
    Density(#[from] DensityError),

    /// Invalid payoff parameters.
    #[error(transparent)]
    Payoff(#[from] PayoffError),

    /// Quadrature engine failure.
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    /// Combined error bound exceeded the acceptance tolerance.
    #[error(
        "Expectation did not converge: estimate {estimate} carries error bound {abs_error} above tolerance {tolerance}"
    )]
    NotConverged {
        /// Best estimate of the expected payoff
        estimate: f64,
        /// Combined absolute error bound on the estimate
        abs_error: f64,
        /// Acceptance tolerance that was violated
        tolerance: f64,
    },
}

impl From<ExpectationError> for PricingError {
    fn from(err: ExpectationError) -> Self {
        match err {
            ExpectationError::Density(inner) => inner.into(),
            ExpectationError::Payoff(inner) => inner.into(),
            ExpectationError::Quadrature(inner) => inner.into(),
            ExpectationError::NotConverged { .. } => PricingError::NotConverged(err.to_string()),
        }
    }
}
