use thiserror::Error;

use rootsweep_core::EvalError;

use crate::bracketing::BracketError;

/// Errors that can occur during regula falsi solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("degenerate bracket: left {left} is not below right {right}")]
    DegenerateBracket { left: f64, right: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

impl From<BracketError> for Error {
    fn from(err: BracketError) -> Self {
        match err {
            BracketError::NonFinite { value } => Self::NonFiniteBracket { value },
            BracketError::Degenerate { left, right } => Self::DegenerateBracket { left, right },
        }
    }
}
