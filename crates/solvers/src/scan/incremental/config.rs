/// Configuration for the incremental search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Fixed step between consecutive samples.
    pub step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { step: 0.1 }
    }
}

impl Config {
    /// Validates the step size.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is non-positive or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Err("step must be positive and finite");
        }
        Ok(())
    }
}
