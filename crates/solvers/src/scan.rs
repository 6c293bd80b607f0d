//! Grid-scanning methods.
//!
//! Scanners walk a fixed grid over a wide domain and report every sample,
//! tolerating pointwise failures: an undefined value or a failed evaluation
//! becomes a labeled record, not an abort. They trade precision for
//! coverage, which makes them the discovery layer the single-root methods
//! refine from.

pub mod graphical;
pub mod incremental;
pub mod periodicity;
