//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Umbrella errors for pricing operations
//! - `QuadratureError`: Errors from the adaptive quadrature engine

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Umbrella error type for callers that do not want to distinguish which
/// layer rejected the computation. Layer-specific errors convert into this
/// type via `From` implementations.
///
/// # Variants
/// - `InvalidInput`: Invalid model or payoff parameters
/// - `NotConverged`: Numerical result did not meet the requested tolerance
/// - `NumericalInstability`: Computation produced unusable values
///
/// # Examples
/// ```
/// use capnote_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Result did not converge to the requested tolerance
    NotConverged(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NotConverged(msg) => write!(f, "Did not converge: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Adaptive quadrature errors.
///
/// These mark misuse of the engine rather than convergence shortfalls; a
/// convergence shortfall is reported inside the result so the estimate and
/// its error bound are not lost.
///
/// # Variants
/// - `InvalidBounds`: Region endpoints are non-finite or out of order
/// - `NonFiniteIntegrand`: Integrand produced NaN or an infinity
///
/// # Examples
/// ```
/// use capnote_core::types::QuadratureError;
///
/// let err = QuadratureError::InvalidBounds { lower: 2.0, upper: 1.0 };
/// assert!(format!("{}", err).contains("bounds"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadratureError {
    /// Region endpoints are non-finite or out of order.
    #[error("Invalid integration bounds [{lower}, {upper}]")]
    InvalidBounds {
        /// Left endpoint as given
        lower: f64,
        /// Right endpoint as given
        upper: f64,
    },

    /// Integrand produced a non-finite value at a sampled point.
    #[error("Integrand evaluated to a non-finite value at x = {at}")]
    NonFiniteIntegrand {
        /// Sample point where the integrand failed
        at: f64,
    },
}

impl From<QuadratureError> for PricingError {
    fn from(err: QuadratureError) -> Self {
        PricingError::NumericalInstability(err.to_string())
    }
}
