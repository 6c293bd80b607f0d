use crate::Record;

/// The result of one solver run: the roots it accepted and the iteration
/// records it produced, both in discovery order.
///
/// Either sequence may be empty. A failed or budget-exhausted run still
/// returns the records accumulated up to the point it stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    /// Accepted roots, rounded for display at acceptance time.
    pub roots: Vec<f64>,
    /// Per-iteration records in production order.
    pub records: Vec<Record>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted root.
    pub fn push_root(&mut self, root: f64) {
        self.roots.push(root);
    }

    /// Appends an iteration record.
    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Whether an already-accepted root lies within `tol` of `x`.
    ///
    /// Multi-subinterval scanners use this to suppress near-duplicate roots
    /// within a single run.
    #[must_use]
    pub fn has_root_near(&self, x: f64, tol: f64) -> bool {
        self.roots.iter().any(|root| (x - root).abs() < tol)
    }

    /// Whether the run produced neither roots nor records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_nearby_roots() {
        let mut trace = Trace::new();
        trace.push_root(2.0);

        assert!(trace.has_root_near(2.0 + 1e-7, 1e-6));
        assert!(!trace.has_root_near(2.1, 1e-6));
    }

    #[test]
    fn empty_means_no_roots_and_no_records() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());

        trace.push_record(Record::new().with("x", 1.0));
        assert!(!trace.is_empty());
    }
}
