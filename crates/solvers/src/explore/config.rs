/// Configuration for domain suggestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Wide probing window searched for crossings.
    pub wide_range: [f64; 2],
    /// Number of evenly spaced probe samples.
    pub samples: usize,
    /// Fractional padding added around the discovered roots.
    pub padding_factor: f64,
    /// Smallest absolute padding, in x units.
    pub min_padding: f64,
    /// Smallest suggested window width.
    pub min_window: f64,
    /// Window returned when no roots are discovered.
    pub fallback: [f64; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wide_range: [-50.0, 50.0],
            samples: 1000,
            padding_factor: 0.2,
            min_padding: 2.0,
            min_window: 4.0,
            fallback: [-10.0, 10.0],
        }
    }
}

impl Config {
    /// Validates the probing window and sample count.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is non-finite or degenerate, or there
    /// are too few samples to form an interval.
    pub fn validate(&self) -> Result<(), &'static str> {
        let [lo, hi] = self.wide_range;
        if !lo.is_finite() || !hi.is_finite() {
            return Err("wide_range must be finite");
        }
        if lo >= hi {
            return Err("wide_range must have positive width");
        }
        if self.samples < 2 {
            return Err("samples must be at least 2");
        }
        if !self.padding_factor.is_finite() || self.padding_factor < 0.0 {
            return Err("padding_factor must be finite and non-negative");
        }
        Ok(())
    }
}
