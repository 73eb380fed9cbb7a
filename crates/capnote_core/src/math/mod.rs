//! Numerical building blocks shared by the pricing layers.
//!
//! This module provides:
//! - `distributions`: standard normal pdf/cdf and the complementary error
//!   function, generic over `T: Float`
//! - `quadrature`: adaptive Gauss-Kronrod integration over bounded and
//!   semi-infinite regions

pub mod distributions;
pub mod quadrature;
