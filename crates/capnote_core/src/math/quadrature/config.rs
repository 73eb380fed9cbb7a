//! Quadrature configuration types.

/// Configuration for the adaptive quadrature engine.
///
/// Provides the convergence targets and the work budget shared by all
/// integration calls.
///
/// # Example
///
/// ```
/// use capnote_core::math::quadrature::QuadratureConfig;
///
/// // Use default configuration
/// let config = QuadratureConfig::default();
/// assert!(config.rel_tolerance <= 1e-8);
/// assert!(config.max_subdivisions >= 100);
///
/// // Custom configuration
/// let custom = QuadratureConfig {
///     rel_tolerance: 1e-12,
///     ..QuadratureConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    /// Absolute convergence target for the summed error bound.
    ///
    /// Refinement stops once the error bound drops below
    /// `max(abs_tolerance, rel_tolerance * |estimate|)`.
    pub abs_tolerance: f64,

    /// Relative convergence target, scaled by the current estimate.
    pub rel_tolerance: f64,

    /// Maximum number of cell bisections before refinement gives up.
    ///
    /// Exhausting the budget does not discard the estimate; the result is
    /// returned with `converged = false`.
    pub max_subdivisions: usize,

    /// Number of uniform cells the region is cut into before refinement.
    ///
    /// A single wide panel can straddle a narrow feature and report a
    /// deceptively small error; pre-partitioning keeps every feature within
    /// reach of at least one cell's samples.
    pub initial_cells: usize,
}

impl Default for QuadratureConfig {
    /// Default configuration: abs 1e-12, rel 1e-10, 256 subdivisions,
    /// 16 initial cells.
    fn default() -> Self {
        Self {
            abs_tolerance: 1e-12,
            rel_tolerance: 1e-10,
            max_subdivisions: 256,
            initial_cells: 16,
        }
    }
}

impl QuadratureConfig {
    /// Create a configuration with explicit values.
    ///
    /// # Panics
    ///
    /// Panics if either tolerance is non-positive or either count is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use capnote_core::math::quadrature::QuadratureConfig;
    ///
    /// let config = QuadratureConfig::new(1e-14, 1e-12, 512, 32);
    /// assert_eq!(config.max_subdivisions, 512);
    /// ```
    pub fn new(
        abs_tolerance: f64,
        rel_tolerance: f64,
        max_subdivisions: usize,
        initial_cells: usize,
    ) -> Self {
        assert!(abs_tolerance > 0.0, "abs_tolerance must be positive");
        assert!(rel_tolerance > 0.0, "rel_tolerance must be positive");
        assert!(max_subdivisions > 0, "max_subdivisions must be > 0");
        assert!(initial_cells > 0, "initial_cells must be > 0");
        Self {
            abs_tolerance,
            rel_tolerance,
            max_subdivisions,
            initial_cells,
        }
    }

    /// Configuration with tighter tolerances and a larger work budget.
    pub fn high_precision() -> Self {
        Self {
            abs_tolerance: 1e-14,
            rel_tolerance: 1e-12,
            max_subdivisions: 1024,
            initial_cells: 32,
        }
    }

    /// Configuration trading precision for speed.
    pub fn fast() -> Self {
        Self {
            abs_tolerance: 1e-8,
            rel_tolerance: 1e-6,
            max_subdivisions: 64,
            initial_cells: 8,
        }
    }
}
