//! Capped-gain payoff profile.

use num_traits::Float;

use super::error::PayoffError;

/// Capped-gain payoff on a terminal price.
///
/// Pays `participation · (S_T - S0)` while the terminal price stays below
/// the cap, and the constant `participation · (cap - S0)` once the cap is
/// reached: `value(s) = participation · (min(s, cap) - S0)`.
///
/// Only `cap > 0` is enforced. A cap at or below the spot is deliberately
/// accepted; the payoff then degenerates to the capped constant over most of
/// the distribution, which prices accordingly.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use capnote_models::payoff::CappedGainPayoff;
///
/// let payoff = CappedGainPayoff::new(0.8_f64, 120.0).unwrap();
///
/// // Linear region
/// assert!((payoff.value(110.0, 100.0) - 8.0).abs() < 1e-12);
///
/// // Capped region
/// assert!((payoff.value(150.0, 100.0) - 16.0).abs() < 1e-12);
///
/// // Non-positive caps are rejected
/// assert!(CappedGainPayoff::new(0.8_f64, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedGainPayoff<T: Float> {
    /// Participation / scaling factor (α)
    participation: T,
    /// Cap threshold (H)
    cap: T,
}

impl<T: Float> CappedGainPayoff<T> {
    /// Creates a capped-gain payoff with validation.
    ///
    /// # Arguments
    /// * `participation` - Scaling factor applied to the gain (any sign)
    /// * `cap` - Cap threshold (must be positive)
    ///
    /// # Errors
    /// - `PayoffError::InvalidCap` if `cap <= 0`
    pub fn new(participation: T, cap: T) -> Result<Self, PayoffError> {
        if cap <= T::zero() {
            return Err(PayoffError::InvalidCap {
                cap: cap.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            participation,
            cap,
        })
    }

    /// Returns the participation factor.
    #[inline]
    pub fn participation(&self) -> T {
        self.participation
    }

    /// Returns the cap threshold.
    #[inline]
    pub fn cap(&self) -> T {
        self.cap
    }

    /// Payoff at terminal price `terminal` relative to the initial `spot`.
    ///
    /// `participation · (min(terminal, cap) - spot)`
    #[inline]
    pub fn value(&self, terminal: T, spot: T) -> T {
        self.participation * (terminal.min(self.cap) - spot)
    }
}
