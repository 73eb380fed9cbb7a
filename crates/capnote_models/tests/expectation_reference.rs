//! Reference tests for the capped-gain expectation.
//!
//! These tests verify the quadrature pricer against closed-form quantities
//! of the lognormal distribution:
//!
//! 1. **Normalisation**: the density integrates to one
//! 2. **Reference scenario**: pinned high-precision regression baseline
//! 3. **Tail identity**: direct tail quadrature equals the capped constant
//!    times the closed-form tail probability
//! 4. **Limits**: uncapped limit and degenerate cap

use approx::assert_relative_eq;
use capnote_core::math::quadrature::{AdaptiveQuadrature, IntegrationRegion};
use capnote_models::density::LognormalTerminal;
use capnote_models::payoff::CappedGainPayoff;
use capnote_models::pricing::{expected_capped_gain, QuadraturePricer};

/// Reference parameters used across the suite.
fn reference_params() -> (f64, f64, f64, f64, f64, f64) {
    (100.0, 0.8, 120.0, 0.05, 0.2, 1.0) // spot, participation, cap, rate, vol, expiry
}

fn reference_model() -> LognormalTerminal<f64> {
    let (spot, _, _, rate, vol, expiry) = reference_params();
    LognormalTerminal::new(spot, rate, vol, expiry).unwrap()
}

// ============================================================================
// Density Normalisation
// ============================================================================

#[test]
fn test_density_integrates_to_one() {
    let model = reference_model();
    let quad = AdaptiveQuadrature::with_defaults();

    let bulk = quad
        .integrate(
            |s| model.pdf(s),
            IntegrationRegion::bounded(0.0, 500.0).unwrap(),
        )
        .unwrap();
    let tail = quad
        .integrate(
            |s| model.pdf(s),
            IntegrationRegion::semi_infinite(500.0).unwrap(),
        )
        .unwrap();

    assert!(bulk.converged && tail.converged);
    assert_relative_eq!(bulk.value + tail.value, 1.0, epsilon = 1e-9);
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_reference_scenario_regression_baseline() {
    // Closed form: 0.8 · (S0·e^{rT}·Φ(d - σ√T) + H·(1 - Φ(d)) - S0)
    // with d = (ln H - m)/σ√T = 0.7616078, giving 1.370511.
    let (spot, participation, cap, rate, vol, expiry) = reference_params();
    let valuation = expected_capped_gain(spot, participation, cap, rate, vol, expiry).unwrap();

    assert_relative_eq!(valuation.expected, 1.370_511, epsilon = 1e-3);
    assert!(valuation.abs_error < 1e-6);
}

#[test]
fn test_tail_quadrature_matches_closed_form() {
    let (spot, participation, cap, rate, vol, expiry) = reference_params();
    let model = LognormalTerminal::new(spot, rate, vol, expiry).unwrap();
    let payoff = CappedGainPayoff::new(participation, cap).unwrap();

    let quad = AdaptiveQuadrature::with_defaults();
    let tail = quad
        .integrate(
            |s| payoff.value(s, spot) * model.pdf(s),
            IntegrationRegion::semi_infinite(cap).unwrap(),
        )
        .unwrap();

    // Constant payoff above the cap: α·(H - S0)·P(S_T >= H)
    let closed_form = participation * (cap - spot) * model.tail_probability(cap);
    assert_relative_eq!(tail.value, closed_form, epsilon = 1e-5);
}

// ============================================================================
// Limiting Behaviour
// ============================================================================

#[test]
fn test_expected_payoff_monotone_in_cap() {
    let (spot, participation, _, rate, vol, expiry) = reference_params();
    let caps = [60.0, 80.0, 100.0, 120.0, 150.0, 200.0, 500.0];

    let mut previous = f64::NEG_INFINITY;
    for cap in caps {
        let valuation =
            expected_capped_gain(spot, participation, cap, rate, vol, expiry).unwrap();
        assert!(
            valuation.expected >= previous - 1e-9,
            "expectation decreased at cap {}",
            cap
        );
        previous = valuation.expected;
    }
}

#[test]
fn test_uncapped_limit() {
    // With the cap far above the distribution the expectation approaches
    // α·(E[S_T] - S0) = α·S0·(e^{rT} - 1).
    let (spot, participation, _, rate, vol, expiry) = reference_params();
    let valuation = expected_capped_gain(spot, participation, 1e6, rate, vol, expiry).unwrap();

    let uncapped = participation * spot * ((rate * expiry).exp() - 1.0);
    assert_relative_eq!(valuation.expected, uncapped, max_relative = 1e-6);
}

#[test]
fn test_degenerate_cap_far_below_spot() {
    // A cap near zero turns the payoff into the constant α·(H - S0) over
    // essentially the whole distribution.
    let (spot, participation, _, rate, vol, expiry) = reference_params();
    let cap = 0.01;
    let valuation = expected_capped_gain(spot, participation, cap, rate, vol, expiry).unwrap();

    assert_relative_eq!(
        valuation.expected,
        participation * (cap - spot),
        epsilon = 1e-6
    );
}

#[test]
fn test_cap_at_spot_prices_below_zero() {
    // Cap exactly at the spot: every outcome above the spot pays zero, every
    // outcome below pays a loss, so the expectation is negative.
    let (spot, participation, _, rate, vol, expiry) = reference_params();
    let valuation = expected_capped_gain(spot, participation, spot, rate, vol, expiry).unwrap();
    assert!(valuation.expected < 0.0);
}

// ============================================================================
// Scaling
// ============================================================================

#[test]
fn test_linear_in_participation() {
    let (spot, _, cap, rate, vol, expiry) = reference_params();
    let base = expected_capped_gain(spot, 0.8, cap, rate, vol, expiry).unwrap();
    let doubled = expected_capped_gain(spot, 1.6, cap, rate, vol, expiry).unwrap();
    let negated = expected_capped_gain(spot, -0.8, cap, rate, vol, expiry).unwrap();

    assert_relative_eq!(doubled.expected, 2.0 * base.expected, max_relative = 1e-8);
    assert_relative_eq!(negated.expected, -base.expected, max_relative = 1e-8);
}

// ============================================================================
// Invalid Inputs
// ============================================================================

#[test]
fn test_invalid_parameters_fail_before_integration() {
    let (spot, participation, cap, rate, vol, expiry) = reference_params();

    // Each invalid field is rejected as a structured error, never NaN.
    assert!(expected_capped_gain(0.0, participation, cap, rate, vol, expiry).is_err());
    assert!(expected_capped_gain(-spot, participation, cap, rate, vol, expiry).is_err());
    assert!(expected_capped_gain(spot, participation, 0.0, rate, vol, expiry).is_err());
    assert!(expected_capped_gain(spot, participation, cap, rate, 0.0, expiry).is_err());
    assert!(expected_capped_gain(spot, participation, cap, rate, -vol, expiry).is_err());
    assert!(expected_capped_gain(spot, participation, cap, rate, vol, 0.0).is_err());
    assert!(expected_capped_gain(spot, participation, cap, rate, vol, -expiry).is_err());
}

#[test]
fn test_narrow_density_still_prices() {
    // Small σ√T concentrates the density near the forward; the anchored
    // partition keeps the peak visible to the quadrature.
    let valuation = expected_capped_gain(100.0, 0.8, 120.0, 0.05, 0.01, 0.25).unwrap();
    // Essentially deterministic terminal price S0·e^{rT} ≈ 101.26, well
    // below the cap, so the payoff is α·(E[S_T] - S0).
    let forward_gain = 0.8 * 100.0 * (0.05_f64 * 0.25).exp() - 0.8 * 100.0;
    assert_relative_eq!(valuation.expected, forward_gain, epsilon = 1e-6);
}

#[test]
fn test_pricer_reuse_is_deterministic() {
    let model = reference_model();
    let payoff = CappedGainPayoff::new(0.8, 120.0).unwrap();
    let pricer = QuadraturePricer::with_defaults();

    let first = pricer.expected_payoff(&model, &payoff).unwrap();
    let second = pricer.expected_payoff(&model, &payoff).unwrap();
    assert_eq!(first, second);
}
