//! Terminal-price distribution models.
//!
//! This module provides the lognormal terminal-price density used by the
//! expectation integrator, together with its closed-form cumulative
//! complement for validation.

pub mod error;
pub mod lognormal;

// Re-export main types at module level
pub use error::DensityError;
pub use lognormal::LognormalTerminal;
