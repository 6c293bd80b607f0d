use std::error::Error as StdError;

use thiserror::Error;

/// The objective evaluation failed to produce any value at `x`.
///
/// This is distinct from the function being undefined at `x`: an adapter that
/// can evaluate `1/x` at zero should return `Ok(f64::INFINITY)`, not an error.
/// `EvalError` is for adapters (equation parsers, external models) that fail
/// outright.
#[derive(Debug, Error)]
#[error("objective evaluation failed at x = {x}")]
pub struct EvalError {
    /// The point at which evaluation was attempted.
    pub x: f64,
    /// The underlying adapter failure, if one was captured.
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl EvalError {
    /// Creates an evaluation error at `x` with no underlying cause.
    #[must_use]
    pub fn at(x: f64) -> Self {
        Self { x, source: None }
    }

    /// Creates an evaluation error at `x` wrapping an adapter failure.
    pub fn caused_by(x: f64, source: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            x,
            source: Some(Box::new(source)),
        }
    }
}

/// A single-variable real function supplied by an external adapter.
///
/// Implementations must be side-effect-free and re-entrant: a solver may
/// evaluate the same point twice, and independent solver invocations may
/// share one objective across threads.
pub trait Objective {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter fails to produce a value. Undefined
    /// or unbounded points are reported as `Ok(NAN)` / `Ok(±INFINITY)`.
    fn eval(&self, x: f64) -> Result<f64, EvalError>;
}

/// Infallible closures are objectives.
impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        Ok(self(x))
    }
}

/// Adapts a fallible closure into an [`Objective`].
///
/// Closures returning `Result` cannot get a blanket impl without overlapping
/// the infallible one, so they go through this newtype.
pub struct Fallible<F>(pub F);

impl<F> Objective for Fallible<F>
where
    F: Fn(f64) -> Result<f64, EvalError>,
{
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        (self.0)(x)
    }
}

/// An objective that also supplies its first derivative.
pub trait Differentiable: Objective {
    /// Evaluates the derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter fails to produce a value.
    fn derivative(&self, x: f64) -> Result<f64, EvalError>;
}

/// Pairs a function closure with its derivative closure.
///
/// This is the shape an equation parser hands to Newton-Raphson: the parsed
/// expression and its symbolic derivative as two independent callables.
pub struct WithDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a differentiable objective from `f` and `f'`.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> Objective for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        Ok((self.f)(x))
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> Result<f64, EvalError> {
        Ok((self.df)(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_are_objectives() {
        let f = |x: f64| x * x - 4.0;
        assert_relative_eq!(f.eval(3.0).unwrap(), 5.0);
    }

    #[test]
    fn undefined_points_are_ok_values() {
        let f = |x: f64| 1.0 / x;
        assert!(f.eval(0.0).unwrap().is_infinite());
    }

    #[test]
    fn fallible_adapter_surfaces_errors() {
        let f = Fallible(|x: f64| {
            if x < 0.0 {
                Err(EvalError::at(x))
            } else {
                Ok(x.sqrt())
            }
        });

        assert_relative_eq!(f.eval(4.0).unwrap(), 2.0);
        let err = f.eval(-1.0).unwrap_err();
        assert_relative_eq!(err.x, -1.0);
    }

    #[test]
    fn with_derivative_evaluates_both_closures() {
        let f = WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
        assert_relative_eq!(f.eval(1.0).unwrap(), -3.0);
        assert_relative_eq!(f.derivative(1.0).unwrap(), 2.0);
    }
}
