/// Configuration for the multi-root regula falsi solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Residual and bracket-width tolerance; also the root de-duplication
    /// threshold.
    pub tol: f64,
    /// Maximum number of false-position iterations per subinterval.
    pub max_iter: usize,
    /// Number of equal subintervals the outer bracket is split into.
    pub num_intervals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iter: 100,
            num_intervals: 10,
        }
    }
}

impl Config {
    /// Validates the tolerance and subinterval count.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if
    /// there are no subintervals to scan.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err("tol must be finite and non-negative");
        }
        if self.num_intervals == 0 {
            return Err("num_intervals must be at least 1");
        }
        Ok(())
    }
}
