//! Expected-payoff pricing by direct quadrature.
//!
//! The expectation of the capped-gain payoff is assembled from two tagged
//! integration regions: the bounded region `[0, H]`, where the payoff is
//! linear in the terminal price, and the tail `[H, ∞)`, where it is the
//! capped constant. One integrand closure (payoff times density) serves
//! both; only the region tag changes.
//!
//! ## Example
//!
//! ```
//! use capnote_models::pricing::expected_capped_gain;
//!
//! let valuation = expected_capped_gain(100.0, 0.8, 120.0, 0.05, 0.2, 1.0).unwrap();
//! assert!(valuation.expected > 0.0);
//! assert!(valuation.abs_error < 1e-6);
//! ```

pub mod engine;
pub mod error;

// Re-export main types at module level
pub use engine::{expected_capped_gain, PricingConfig, QuadraturePricer, Valuation};
pub use error::ExpectationError;

// Quadrature configuration is part of this module's public surface.
pub use capnote_core::math::quadrature::QuadratureConfig;
