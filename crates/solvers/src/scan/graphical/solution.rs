use rootsweep_core::Trace;

/// The result of a graphical scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Interpolated roots and one record per grid sample.
    pub trace: Trace,
    /// Estimated period when the sign changes arrive regularly enough.
    pub period: Option<f64>,
}

impl Solution {
    /// Whether the scan judged the function periodic.
    #[must_use]
    pub fn is_periodic(&self) -> bool {
        self.period.is_some()
    }
}
