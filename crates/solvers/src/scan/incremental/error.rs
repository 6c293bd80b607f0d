use thiserror::Error;

/// Errors that can occur during an incremental search.
///
/// Evaluation failures are deliberately absent: the scan records them as
/// diagnostics and keeps walking.
#[derive(Debug, Error)]
pub enum Error {
    #[error("scan bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
