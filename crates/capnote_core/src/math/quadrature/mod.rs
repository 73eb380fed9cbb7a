//! Adaptive numerical integration over bounded and semi-infinite regions.
//!
//! The integrator is a globally adaptive Gauss-Kronrod 7/15 rule: the region
//! is cut into initial cells, each cell is estimated with the 15-point
//! Kronrod rule, and the cell with the largest error estimate is bisected
//! until the summed error bound meets the configured tolerance or the
//! subdivision budget runs out. Semi-infinite regions are folded onto
//! `[0, 1)` with the substitution `s = a + t / (1 - t)`.
//!
//! ## Configuration
//!
//! [`QuadratureConfig`] controls:
//! - `abs_tolerance` / `rel_tolerance`: convergence targets (default 1e-12 /
//!   1e-10)
//! - `max_subdivisions`: bisection budget bounding worst-case latency
//! - `initial_cells`: uniform pre-partitioning, so narrow features cannot
//!   hide between the samples of a single wide panel
//!
//! ## Results
//!
//! [`AdaptiveQuadrature::integrate`] always returns the estimate together
//! with its absolute error bound ([`QuadratureResult`]); an exhausted
//! subdivision budget is reported through `converged = false` rather than by
//! discarding the estimate. Errors are reserved for misuse: invalid bounds
//! or an integrand producing non-finite values.
//!
//! ## Examples
//!
//! ```
//! use capnote_core::math::quadrature::{AdaptiveQuadrature, IntegrationRegion};
//!
//! let quad = AdaptiveQuadrature::with_defaults();
//!
//! // Bounded region
//! let region = IntegrationRegion::bounded(0.0, 2.0).unwrap();
//! let result = quad.integrate(|x| x.exp(), region).unwrap();
//! assert!((result.value - (2.0_f64.exp() - 1.0)).abs() < 1e-9);
//!
//! // Semi-infinite region
//! let tail = IntegrationRegion::semi_infinite(0.0).unwrap();
//! let result = quad.integrate(|x: f64| (-x).exp(), tail).unwrap();
//! assert!((result.value - 1.0).abs() < 1e-8);
//! ```

pub mod config;
pub mod gauss_kronrod;
pub mod region;

pub use config::QuadratureConfig;
pub use gauss_kronrod::{AdaptiveQuadrature, QuadratureResult};
pub use region::IntegrationRegion;
