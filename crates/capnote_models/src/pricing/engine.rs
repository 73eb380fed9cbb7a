//! Quadrature pricing engine for the capped-gain expectation.

use capnote_core::math::quadrature::{AdaptiveQuadrature, IntegrationRegion, QuadratureConfig};

use super::error::ExpectationError;
use crate::density::LognormalTerminal;
use crate::payoff::CappedGainPayoff;

/// Log-space half-span, in standard deviations, of the anchor grid the
/// pricer partitions its regions at.
const ANCHOR_SPAN: i32 = 8;

/// Configuration for the expectation pricer.
///
/// # Example
///
/// ```
/// use capnote_models::pricing::PricingConfig;
///
/// let config = PricingConfig::default();
/// assert!((config.rel_tolerance - 1e-6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingConfig {
    /// Configuration forwarded to the quadrature engine.
    pub quadrature: QuadratureConfig,

    /// Acceptance tolerance on the combined error bound, relative to the
    /// estimate (with an absolute floor of the same magnitude for estimates
    /// below one). A valuation whose bound exceeds this is reported as
    /// `ExpectationError::NotConverged`.
    pub rel_tolerance: f64,
}

impl Default for PricingConfig {
    /// Default configuration: default quadrature settings, acceptance
    /// tolerance 1e-6.
    fn default() -> Self {
        Self {
            quadrature: QuadratureConfig::default(),
            rel_tolerance: 1e-6,
        }
    }
}

impl PricingConfig {
    /// Create a configuration with explicit values.
    ///
    /// # Panics
    ///
    /// Panics if `rel_tolerance <= 0`.
    pub fn new(quadrature: QuadratureConfig, rel_tolerance: f64) -> Self {
        assert!(rel_tolerance > 0.0, "rel_tolerance must be positive");
        Self {
            quadrature,
            rel_tolerance,
        }
    }
}

/// Result of an expectation computation.
///
/// The estimate always carries the combined absolute error bound reported by
/// the quadrature engine, so downstream consumers can judge the precision
/// instead of trusting the scalar blindly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    /// Expected payoff.
    pub expected: f64,

    /// Combined absolute error bound on `expected`.
    pub abs_error: f64,

    /// Total number of quadrature cell bisections across both regions.
    pub subdivisions: usize,
}

/// Expected-payoff pricer integrating payoff times density.
///
/// The expectation is split into the bounded region `[0, H]` (linear payoff)
/// and the tail `[H, ∞)` (capped constant payoff), both integrated with the
/// same integrand closure through the shared quadrature engine. Regions are
/// pre-partitioned at anchor levels `exp(m + k·σ√T)`, so the density's peak
/// always falls inside cells the engine samples, no matter how far the cap
/// sits from the bulk of the mass.
///
/// # Example
///
/// ```
/// use capnote_models::density::LognormalTerminal;
/// use capnote_models::payoff::CappedGainPayoff;
/// use capnote_models::pricing::QuadraturePricer;
///
/// let model = LognormalTerminal::new(100.0_f64, 0.05, 0.2, 1.0).unwrap();
/// let payoff = CappedGainPayoff::new(0.8_f64, 120.0).unwrap();
///
/// let valuation = QuadraturePricer::with_defaults()
///     .expected_payoff(&model, &payoff)
///     .unwrap();
/// assert!(valuation.expected > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct QuadraturePricer {
    /// Pricer configuration.
    config: PricingConfig,
}

impl QuadraturePricer {
    /// Create a pricer with the given configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Create a pricer with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }

    /// Compute the expected capped-gain payoff under the given terminal
    /// distribution.
    ///
    /// # Errors
    /// - `ExpectationError::Quadrature` if the integrand produces non-finite
    ///   values (does not happen for validated parameters)
    /// - `ExpectationError::NotConverged` if the combined error bound
    ///   exceeds the acceptance tolerance; the variant carries the best
    ///   estimate, its bound and the violated tolerance
    pub fn expected_payoff(
        &self,
        model: &LognormalTerminal<f64>,
        payoff: &CappedGainPayoff<f64>,
    ) -> Result<Valuation, ExpectationError> {
        let spot = model.spot();
        let cap = payoff.cap();
        let integrand = |level: f64| payoff.value(level, spot) * model.pdf(level);

        let engine = AdaptiveQuadrature::new(self.config.quadrature);
        let mut expected = 0.0;
        let mut abs_error = 0.0;
        let mut subdivisions = 0;
        let mut converged = true;

        for region in self.partition(model, cap)? {
            let result = engine.integrate(&integrand, region)?;
            expected += result.value;
            abs_error += result.abs_error;
            subdivisions += result.subdivisions;
            converged &= result.converged;
        }

        let tolerance = self.config.rel_tolerance * expected.abs().max(1.0);
        if !converged || abs_error > tolerance {
            return Err(ExpectationError::NotConverged {
                estimate: expected,
                abs_error,
                tolerance,
            });
        }

        Ok(Valuation {
            expected,
            abs_error,
            subdivisions,
        })
    }

    /// Cut `[0, cap]` and `[cap, ∞)` at the model's anchor levels.
    ///
    /// A single cell spanning many decades can straddle the density's peak
    /// without any quadrature node landing on it; anchoring guarantees the
    /// peak is bracketed by cells of width `σ√T` in log space.
    fn partition(
        &self,
        model: &LognormalTerminal<f64>,
        cap: f64,
    ) -> Result<Vec<IntegrationRegion>, ExpectationError> {
        let anchors = anchor_levels(model);
        let mut regions = Vec::with_capacity(anchors.len() + 2);

        let mut lower = 0.0;
        for &level in &anchors {
            if level > lower && level < cap {
                regions.push(IntegrationRegion::bounded(lower, level)?);
                lower = level;
            }
        }
        regions.push(IntegrationRegion::bounded(lower, cap)?);

        let mut tail_lower = cap;
        for &level in &anchors {
            if level > tail_lower {
                regions.push(IntegrationRegion::bounded(tail_lower, level)?);
                tail_lower = level;
            }
        }
        regions.push(IntegrationRegion::semi_infinite(tail_lower)?);

        Ok(regions)
    }
}

/// Price levels at whole-standard-deviation steps of `ln(S_T)` around its
/// mean, restricted to finite positive values.
fn anchor_levels(model: &LognormalTerminal<f64>) -> Vec<f64> {
    let centre = model.log_mean();
    let spread = model.log_deviation();
    (-ANCHOR_SPAN..=ANCHOR_SPAN)
        .map(|k| (centre + f64::from(k) * spread).exp())
        .filter(|level| level.is_finite() && *level > 0.0)
        .collect()
}

/// Expected capped-gain payoff with default settings.
///
/// The single-call surface over the six scalar inputs: builds the validated
/// model and payoff, prices with default tolerances, and returns the
/// valuation with its error bound.
///
/// # Arguments
/// * `spot` - Initial price (S0, must be positive)
/// * `participation` - Scaling factor (α, any sign)
/// * `cap` - Cap threshold (H, must be positive)
/// * `rate` - Drift / risk-free rate (r)
/// * `volatility` - Volatility (σ, must be positive)
/// * `expiry` - Time horizon in years (T, must be positive)
///
/// # Errors
/// Invalid parameters are rejected before any integration; a convergence
/// shortfall surfaces the best estimate inside the error.
///
/// # Examples
/// ```
/// use capnote_models::pricing::expected_capped_gain;
///
/// let valuation = expected_capped_gain(100.0, 0.8, 120.0, 0.05, 0.2, 1.0).unwrap();
/// assert!((valuation.expected - 1.3705).abs() < 1e-3);
///
/// assert!(expected_capped_gain(100.0, 0.8, 120.0, 0.05, 0.0, 1.0).is_err());
/// ```
pub fn expected_capped_gain(
    spot: f64,
    participation: f64,
    cap: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
) -> Result<Valuation, ExpectationError> {
    let model = LognormalTerminal::new(spot, rate, volatility, expiry)?;
    let payoff = CappedGainPayoff::new(participation, cap)?;
    QuadraturePricer::with_defaults().expected_payoff(&model, &payoff)
}
