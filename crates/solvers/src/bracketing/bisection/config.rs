/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Approximate relative error threshold, as a percentage.
    pub tol: f64,
    /// Maximum number of halving iterations.
    pub max_iter: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 0.5,
            max_iter: 50,
        }
    }
}

impl Config {
    /// Validates the tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err("tol must be finite and non-negative");
        }
        Ok(())
    }
}
