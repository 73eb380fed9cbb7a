//! # capnote_core: Numerical Foundation for the Capnote Pricing Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! capnote_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Adaptive Gauss-Kronrod quadrature (`math::quadrature`)
//! - Error types: `PricingError`, `QuadratureError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other capnote_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use capnote_core::math::distributions::norm_cdf;
//! use capnote_core::math::quadrature::{AdaptiveQuadrature, IntegrationRegion};
//!
//! // Distribution functions
//! let p = norm_cdf(0.0_f64);
//! assert!((p - 0.5).abs() < 1e-7);
//!
//! // Adaptive quadrature over a bounded region
//! let quad = AdaptiveQuadrature::with_defaults();
//! let region = IntegrationRegion::bounded(0.0, 1.0).unwrap();
//! let result = quad.integrate(|x| x * x, region).unwrap();
//! assert!((result.value - 1.0 / 3.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error and result types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
