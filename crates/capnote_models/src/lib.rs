//! # Capnote Models (L2: Business Logic)
//!
//! Terminal-price distribution, capped-gain payoff, and the quadrature
//! pricing engine.
//!
//! This crate provides:
//! - The lognormal terminal-price density with validated parameters
//!   (`density`)
//! - The capped-gain payoff profile (`payoff`)
//! - The expected-payoff integrator assembling a bounded and a tail
//!   integral through adaptive quadrature (`pricing`)
//!
//! ## Design Principles
//!
//! - **Validate once, at the boundary**: constructors reject invalid
//!   parameters before any density value is computed
//! - **Estimates travel with error bounds**: every valuation carries the
//!   quadrature error bound, and a convergence shortfall surfaces the best
//!   estimate instead of discarding it
//! - **Generic over `T: Float`** on the pure-math surface, `f64` in the
//!   integration engine

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod density;
pub mod payoff;
pub mod pricing;
