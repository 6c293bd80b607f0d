use thiserror::Error;

use rootsweep_core::EvalError;

/// Errors that can occur during a graphical scan.
#[derive(Debug, Error)]
pub enum Error {
    #[error("step size must be positive and finite, got {step}")]
    InvalidStep { step: f64 },

    #[error("grid bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
