//! Globally adaptive Gauss-Kronrod 7/15 integration.

use super::{IntegrationRegion, QuadratureConfig};
use crate::types::QuadratureError;

/// Kronrod abscissae for the 15-point rule on `[-1, 1]` (non-negative half,
/// descending). Odd indices are the embedded 7-point Gauss abscissae.
const KRONROD_NODES: [f64; 8] = [
    0.991_455_371_120_812_639_2,
    0.949_107_912_342_758_524_5,
    0.864_864_423_359_769_072_8,
    0.741_531_185_599_394_439_9,
    0.586_087_235_467_691_130_3,
    0.405_845_151_377_397_166_9,
    0.207_784_955_007_898_467_6,
    0.0,
];

/// Kronrod weights matching `KRONROD_NODES`.
const KRONROD_WEIGHTS: [f64; 8] = [
    0.022_935_322_010_529_224_96,
    0.063_092_092_629_978_553_29,
    0.104_790_010_322_250_183_8,
    0.140_653_259_715_525_918_7,
    0.169_004_726_639_267_902_8,
    0.190_350_578_064_785_409_9,
    0.204_432_940_075_298_892_4,
    0.209_482_141_084_727_828_0,
];

/// Weights of the embedded 7-point Gauss rule, matching the odd-index
/// Kronrod nodes (and the centre node last).
const GAUSS_WEIGHTS: [f64; 4] = [
    0.129_484_966_168_869_693_3,
    0.279_705_391_489_276_667_9,
    0.381_830_050_505_118_945_0,
    0.417_959_183_673_469_387_8,
];

/// Outcome of an adaptive integration.
///
/// The estimate always travels with its absolute error bound, so callers can
/// apply their own acceptance threshold instead of trusting the estimate
/// blindly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadratureResult {
    /// Integral estimate.
    pub value: f64,

    /// Estimated absolute error bound on `value`.
    pub abs_error: f64,

    /// Number of cell bisections performed.
    pub subdivisions: usize,

    /// Whether the error bound met the configured tolerance before the
    /// subdivision budget ran out.
    pub converged: bool,
}

/// One refinement cell with its local estimate and error bound.
struct Cell {
    lower: f64,
    upper: f64,
    value: f64,
    error: f64,
}

/// Adaptive Gauss-Kronrod quadrature engine.
///
/// Estimates each cell with the 15-point Kronrod rule; the difference from
/// the embedded 7-point Gauss estimate serves as the cell's error bound. The
/// cell with the largest bound is bisected until the summed bound meets the
/// tolerance or the budget is exhausted.
///
/// The rule is open (no endpoint is ever sampled), so integrands only need
/// to be defined on the interior of the region.
///
/// # Example
///
/// ```
/// use capnote_core::math::quadrature::{AdaptiveQuadrature, IntegrationRegion};
///
/// let quad = AdaptiveQuadrature::with_defaults();
/// let region = IntegrationRegion::bounded(0.0, 1.0).unwrap();
///
/// // atan'(x) = 1 / (1 + x^2), so this integrates to pi / 4
/// let result = quad.integrate(|x| 1.0 / (1.0 + x * x), region).unwrap();
/// assert!((result.value - std::f64::consts::FRAC_PI_4).abs() < 1e-10);
/// assert!(result.converged);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveQuadrature {
    /// Engine configuration.
    config: QuadratureConfig,
}

impl AdaptiveQuadrature {
    /// Create an engine with the given configuration.
    pub fn new(config: QuadratureConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: QuadratureConfig::default(),
        }
    }

    /// Integrate `f` over `region`.
    ///
    /// Semi-infinite regions are folded onto `[0, 1)` with the substitution
    /// `s = lower + t / (1 - t)`, `ds = dt / (1 - t)^2`; the open rule never
    /// samples `t = 1`.
    ///
    /// # Errors
    /// `QuadratureError::NonFiniteIntegrand` if `f` returns NaN or an
    /// infinity at a sampled point.
    pub fn integrate<F>(
        &self,
        f: F,
        region: IntegrationRegion,
    ) -> Result<QuadratureResult, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        match region {
            IntegrationRegion::Bounded { lower, upper } => self.refine(&f, lower, upper),
            IntegrationRegion::SemiInfinite { lower } => {
                let folded = |t: f64| {
                    let remainder = 1.0 - t;
                    f(lower + t / remainder) / (remainder * remainder)
                };
                self.refine(&folded, 0.0, 1.0)
            }
        }
    }

    /// Adaptive refinement loop over `[lower, upper]`.
    fn refine<F>(&self, f: &F, lower: f64, upper: f64) -> Result<QuadratureResult, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        let cells = self.config.initial_cells;
        let width = (upper - lower) / cells as f64;

        let mut active: Vec<Cell> = Vec::with_capacity(cells + self.config.max_subdivisions);
        for i in 0..cells {
            let a = lower + i as f64 * width;
            let b = if i + 1 == cells {
                upper
            } else {
                lower + (i + 1) as f64 * width
            };
            active.push(kronrod_panel(f, a, b)?);
        }

        let mut subdivisions = 0;
        loop {
            let value: f64 = active.iter().map(|cell| cell.value).sum();
            let error: f64 = active.iter().map(|cell| cell.error).sum();
            let tolerance = self
                .config
                .abs_tolerance
                .max(self.config.rel_tolerance * value.abs());

            if error <= tolerance {
                return Ok(QuadratureResult {
                    value,
                    abs_error: error,
                    subdivisions,
                    converged: true,
                });
            }
            if subdivisions >= self.config.max_subdivisions {
                return Ok(QuadratureResult {
                    value,
                    abs_error: error,
                    subdivisions,
                    converged: false,
                });
            }

            // Bisect the cell with the largest error bound.
            let worst = active
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.error.total_cmp(&b.1.error))
                .map(|(index, _)| index)
                .unwrap_or(0);
            let cell = active.swap_remove(worst);
            let midpoint = 0.5 * (cell.lower + cell.upper);
            active.push(kronrod_panel(f, cell.lower, midpoint)?);
            active.push(kronrod_panel(f, midpoint, cell.upper)?);
            subdivisions += 1;
        }
    }
}

/// Evaluate the 15-point Kronrod rule and its embedded 7-point Gauss rule
/// over `[a, b]`, returning the cell with `|K15 - G7|` as the error bound.
fn kronrod_panel<F>(f: &F, a: f64, b: f64) -> Result<Cell, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let half_width = 0.5 * (b - a);
    let centre = 0.5 * (a + b);

    let mut kronrod = 0.0;
    let mut gauss = 0.0;

    for (i, (&node, &weight)) in KRONROD_NODES.iter().zip(&KRONROD_WEIGHTS).enumerate() {
        if node == 0.0 {
            let middle = sample(f, centre)?;
            kronrod += weight * middle;
            gauss += GAUSS_WEIGHTS[3] * middle;
        } else {
            let offset = half_width * node;
            let pair = sample(f, centre - offset)? + sample(f, centre + offset)?;
            kronrod += weight * pair;
            if i % 2 == 1 {
                gauss += GAUSS_WEIGHTS[i / 2] * pair;
            }
        }
    }

    Ok(Cell {
        lower: a,
        upper: b,
        value: kronrod * half_width,
        error: ((kronrod - gauss) * half_width).abs(),
    })
}

/// Evaluate the integrand, rejecting non-finite values.
#[inline]
fn sample<F>(f: &F, x: f64) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let y = f(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(QuadratureError::NonFiniteIntegrand { at: x })
    }
}
