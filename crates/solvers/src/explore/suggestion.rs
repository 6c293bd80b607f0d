/// A suggested viewing window for a function, with the evidence behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Suggested left edge.
    pub x_min: f64,
    /// Suggested right edge.
    pub x_max: f64,
    /// Estimated period, when the probe judged the function periodic.
    pub period: Option<f64>,
    /// Candidate roots inside the window, sorted and de-duplicated.
    pub roots: Vec<f64>,
}

impl Suggestion {
    /// Whether the probe judged the function periodic.
    #[must_use]
    pub fn is_periodic(&self) -> bool {
        self.period.is_some()
    }
}
