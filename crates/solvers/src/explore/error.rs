use thiserror::Error;

/// Errors that can occur during domain suggestion.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
