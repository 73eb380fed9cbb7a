//! Lognormal terminal-price density.
//!
//! Under geometric Brownian motion with drift `r` and volatility `σ`, the
//! terminal price satisfies `ln(S_T) ~ Normal(m, σ²T)` with
//! `m = ln(S0) + (r - σ²/2)·T`. This module evaluates that distribution's
//! density and cumulative complement at arbitrary price levels.

use num_traits::Float;

use capnote_core::math::distributions::{norm_cdf, norm_pdf};

use super::error::DensityError;

/// Lognormal distribution of the terminal asset price.
///
/// Holds the validated model parameters and evaluates the terminal density,
/// the cumulative distribution, and the tail probability. The support is
/// strictly positive: the density is exactly zero at and below zero, checked
/// before any logarithm is taken, so integrators may sample the boundary
/// `s = 0` freely.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use capnote_models::density::LognormalTerminal;
///
/// let model = LognormalTerminal::new(100.0_f64, 0.05, 0.2, 1.0).unwrap();
///
/// // Strictly positive support
/// assert_eq!(model.pdf(0.0), 0.0);
/// assert_eq!(model.pdf(-5.0), 0.0);
/// assert!(model.pdf(100.0) > 0.0);
///
/// // Invalid parameters are rejected up front
/// assert!(LognormalTerminal::new(100.0_f64, 0.05, 0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LognormalTerminal<T: Float> {
    /// Spot price (S0)
    spot: T,
    /// Drift / risk-free rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
    /// Time horizon in years (T)
    expiry: T,
}

impl<T: Float> LognormalTerminal<T> {
    /// Creates a terminal-price distribution with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial price (must be positive)
    /// * `rate` - Drift / risk-free rate (annualised, any sign)
    /// * `volatility` - Volatility (must be positive)
    /// * `expiry` - Time horizon in years (must be positive)
    ///
    /// # Errors
    /// - `DensityError::InvalidSpot` if `spot <= 0`
    /// - `DensityError::InvalidVolatility` if `volatility <= 0`
    /// - `DensityError::InvalidExpiry` if `expiry <= 0`
    ///
    /// # Examples
    /// ```
    /// use capnote_models::density::LognormalTerminal;
    ///
    /// let model = LognormalTerminal::new(100.0_f64, 0.05, 0.2, 1.0);
    /// assert!(model.is_ok());
    ///
    /// assert!(LognormalTerminal::new(-1.0_f64, 0.05, 0.2, 1.0).is_err());
    /// assert!(LognormalTerminal::new(100.0_f64, 0.05, -0.2, 1.0).is_err());
    /// assert!(LognormalTerminal::new(100.0_f64, 0.05, 0.2, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T, expiry: T) -> Result<Self, DensityError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(DensityError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(DensityError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry <= zero {
            return Err(DensityError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            expiry,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the drift rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the time horizon.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Mean of `ln(S_T)`: `m = ln(S0) + (r - σ²/2)·T`.
    #[inline]
    pub fn log_mean(&self) -> T {
        let half = T::from(0.5).unwrap();
        self.spot.ln() + (self.rate - half * self.volatility * self.volatility) * self.expiry
    }

    /// Standard deviation of `ln(S_T)`: `σ√T`.
    #[inline]
    pub fn log_deviation(&self) -> T {
        self.volatility * self.expiry.sqrt()
    }

    /// Expected terminal price `E[S_T] = S0·e^{rT}`.
    #[inline]
    pub fn mean(&self) -> T {
        self.spot * (self.rate * self.expiry).exp()
    }

    /// Probability density of the terminal price at `level`.
    ///
    /// Returns exactly `0.0` for `level <= 0` (the support is strictly
    /// positive); otherwise
    /// `pdf(s) = φ(z) / (s·σ√T)` with `z = (ln(s) - m) / (σ√T)`.
    ///
    /// Never fails for finite input; the parameters making the expression
    /// ill-defined are rejected by [`LognormalTerminal::new`].
    ///
    /// # Examples
    /// ```
    /// use capnote_models::density::LognormalTerminal;
    ///
    /// let model = LognormalTerminal::new(100.0_f64, 0.05, 0.2, 1.0).unwrap();
    /// let peak = model.pdf(100.0);
    /// assert!(peak > model.pdf(60.0));
    /// assert!(peak > model.pdf(160.0));
    /// ```
    #[inline]
    pub fn pdf(&self, level: T) -> T {
        if level <= T::zero() {
            return T::zero();
        }
        let deviation = self.log_deviation();
        let z = (level.ln() - self.log_mean()) / deviation;
        norm_pdf(z) / (level * deviation)
    }

    /// Cumulative distribution `P(S_T <= level)`.
    ///
    /// Zero for `level <= 0`.
    #[inline]
    pub fn cdf(&self, level: T) -> T {
        if level <= T::zero() {
            return T::zero();
        }
        let z = (level.ln() - self.log_mean()) / self.log_deviation();
        norm_cdf(z)
    }

    /// Tail probability `P(S_T >= level)`.
    ///
    /// One for `level <= 0`. Evaluated as `Φ(-z)` rather than `1 - Φ(z)` to
    /// stay accurate for deep tails.
    #[inline]
    pub fn tail_probability(&self, level: T) -> T {
        if level <= T::zero() {
            return T::one();
        }
        let z = (level.ln() - self.log_mean()) / self.log_deviation();
        norm_cdf(-z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_model() -> LognormalTerminal<f64> {
        LognormalTerminal::new(100.0, 0.05, 0.2, 1.0).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let model = reference_model();
        assert_eq!(model.spot(), 100.0);
        assert_eq!(model.rate(), 0.05);
        assert_eq!(model.volatility(), 0.2);
        assert_eq!(model.expiry(), 1.0);
    }

    #[test]
    fn test_new_invalid_spot() {
        let result = LognormalTerminal::new(0.0_f64, 0.05, 0.2, 1.0);
        match result.unwrap_err() {
            DensityError::InvalidSpot { spot } => assert_eq!(spot, 0.0),
            other => panic!("Expected InvalidSpot, got {:?}", other),
        }
    }

    #[test]
    fn test_new_invalid_volatility() {
        let result = LognormalTerminal::new(100.0_f64, 0.05, -0.2, 1.0);
        match result.unwrap_err() {
            DensityError::InvalidVolatility { volatility } => assert_eq!(volatility, -0.2),
            other => panic!("Expected InvalidVolatility, got {:?}", other),
        }
    }

    #[test]
    fn test_new_invalid_expiry() {
        let result = LognormalTerminal::new(100.0_f64, 0.05, 0.2, -1.0);
        match result.unwrap_err() {
            DensityError::InvalidExpiry { expiry } => assert_eq!(expiry, -1.0),
            other => panic!("Expected InvalidExpiry, got {:?}", other),
        }
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(LognormalTerminal::new(100.0_f64, -0.02, 0.2, 1.0).is_ok());
    }

    // ==========================================================
    // Support Tests
    // ==========================================================

    #[test]
    fn test_pdf_zero_outside_support() {
        let model = reference_model();
        assert_eq!(model.pdf(0.0), 0.0);
        assert_eq!(model.pdf(-1.0), 0.0);
        assert_eq!(model.pdf(-1e300), 0.0);
    }

    #[test]
    fn test_pdf_non_negative_everywhere() {
        let model = reference_model();
        for i in -10..=300 {
            let level = i as f64;
            assert!(model.pdf(level) >= 0.0, "pdf negative at {}", level);
        }
    }

    #[test]
    fn test_pdf_finite_for_extreme_levels() {
        let model = reference_model();
        assert!(model.pdf(1e-300).is_finite());
        assert!(model.pdf(1e300).is_finite());
        assert_eq!(model.pdf(1e300), 0.0);
    }

    // ==========================================================
    // Shape Tests
    // ==========================================================

    #[test]
    fn test_pdf_mode_location() {
        // Mode of the lognormal is exp(m - σ²T)
        let model = reference_model();
        let mode = (model.log_mean() - model.log_deviation().powi(2)).exp();
        let at_mode = model.pdf(mode);
        assert!(at_mode > model.pdf(mode * 0.9));
        assert!(at_mode > model.pdf(mode * 1.1));
    }

    #[test]
    fn test_pdf_reference_value() {
        // At the spot: z = -(r - σ²/2)T / (σ√T) = -0.15,
        // pdf = φ(-0.15) / (100 · 0.2) = 0.397...e-1 / 20
        let model = reference_model();
        let z: f64 = -0.15;
        let expected = (-0.5 * z * z).exp() / (2.0 * std::f64::consts::PI).sqrt() / 20.0;
        assert_relative_eq!(model.pdf(100.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_log_moments() {
        let model = reference_model();
        assert_relative_eq!(model.log_mean(), 100.0_f64.ln() + 0.03, epsilon = 1e-12);
        assert_relative_eq!(model.log_deviation(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(model.mean(), 100.0 * 0.05_f64.exp(), epsilon = 1e-12);
    }

    // ==========================================================
    // CDF / Tail Tests
    // ==========================================================

    #[test]
    fn test_cdf_and_tail_sum_to_one() {
        let model = reference_model();
        for level in [20.0, 80.0, 100.0, 120.0, 250.0] {
            let total = model.cdf(level) + model.tail_probability(level);
            assert_relative_eq!(total, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cdf_reference_value() {
        // P(S_T <= 120) = Φ((ln 120 - m) / σ√T) = Φ(0.7616078)
        let model = reference_model();
        assert_relative_eq!(model.cdf(120.0), 0.776_852_9, epsilon = 1e-6);
    }

    #[test]
    fn test_cdf_boundaries() {
        let model = reference_model();
        assert_eq!(model.cdf(0.0), 0.0);
        assert_eq!(model.cdf(-1.0), 0.0);
        assert_eq!(model.tail_probability(0.0), 1.0);
        assert!(model.cdf(1e6) > 1.0 - 1e-9);
    }

    #[test]
    fn test_cdf_monotonic() {
        let model = reference_model();
        let mut previous = 0.0;
        for i in 1..=60 {
            let level = i as f64 * 5.0;
            let value = model.cdf(level);
            assert!(value >= previous, "cdf not monotonic at {}", level);
            previous = value;
        }
    }

    // ==========================================================
    // f32 Compatibility Tests
    // ==========================================================

    #[test]
    fn test_f32_compatibility() {
        let model = LognormalTerminal::new(100.0_f32, 0.05, 0.2, 1.0).unwrap();
        assert!(model.pdf(100.0_f32) > 0.0);
        assert_eq!(model.pdf(-1.0_f32), 0.0);
    }
}
