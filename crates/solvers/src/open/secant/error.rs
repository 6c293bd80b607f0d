use thiserror::Error;

use rootsweep_core::EvalError;

/// Errors that can occur during secant solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("starting guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
