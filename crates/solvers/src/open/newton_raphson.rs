//! Newton-Raphson iteration from a single starting guess.
//!
//! Finding several roots with this method is the caller's job: the
//! [`explore`](crate::explore) layer runs it repeatedly from evenly spaced
//! guesses and merges the results.
//!
//! A derivative with magnitude below `1e-10` stalls the trajectory: the
//! iteration records the flat point (with an empty `ea` cell) and terminates
//! without a root rather than dividing by zero.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use rootsweep_core::{Differentiable, Record, Trace, Value, round_to};

use crate::Action;

/// Iteration event emitted by the Newton-Raphson solver.
pub struct Event<'a> {
    /// Iteration counter (0-based, matching the record).
    pub iter: usize,
    /// Current iterate, before the update.
    pub x: f64,
    /// The record built for this iteration, before it joins the trace.
    pub record: &'a Record,
}

/// Finds a root of `f` starting from `x0` using Newton-Raphson.
///
/// Observers see each iteration's record and may return
/// [`Action::StopEarly`] to halt with the partial trace.
///
/// # Errors
///
/// Returns an error if the guess is non-finite, the config is invalid, or
/// the objective or its derivative fails to evaluate.
pub fn solve<F, Obs>(f: &F, x0: f64, config: &Config, mut observer: Obs) -> Result<Trace, Error>
where
    F: Differentiable,
    Obs: for<'a> rootsweep_core::Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { value: x0 });
    }

    let mut trace = Trace::new();
    let mut x = x0;

    for iter in 0..config.max_iter {
        let fx = f.eval(x)?;
        let dfx = f.derivative(x)?;

        // Derivative too flat to divide by: record the stall and stop.
        if dfx.abs() < 1e-10 {
            let record = Record::new()
                .with("No. of iteration", iter as u64)
                .with("xi", round_to(x, 6))
                .with("ea", Value::Missing)
                .with("f(xi)", round_to(fx, 6))
                .with("f'(xi)", round_to(dfx, 6));

            let event = Event {
                iter,
                x,
                record: &record,
            };
            observer.observe(&event);
            trace.push_record(record);
            break;
        }

        let x_new = x - fx / dfx;
        let ea = if x_new == 0.0 {
            0.0
        } else {
            ((x_new - x) / x_new).abs()
        };

        let record = Record::new()
            .with("No. of iteration", iter as u64)
            .with("xi", round_to(x, 6))
            .with("ea", round_to(ea * 100.0, 3))
            .with("f(xi)", round_to(fx, 6))
            .with("f'(xi)", round_to(dfx, 6));

        let event = Event {
            iter,
            x,
            record: &record,
        };
        let action = observer.observe(&event);
        trace.push_record(record);

        if let Some(Action::StopEarly) = action {
            return Ok(trace);
        }

        if ea < config.tol {
            trace.push_root(round_to(x_new, 6));
            break;
        }

        x = x_new;

        if iter == config.max_iter - 1 {
            if let Some(last) = trace.records.last_mut() {
                last.push("Status", "Max iterations reached");
            }
        }
    }

    Ok(trace)
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the guess is non-finite, the config is invalid, or
/// the objective or its derivative fails to evaluate.
pub fn solve_unobserved<F>(f: &F, x0: f64, config: &Config) -> Result<Trace, Error>
where
    F: Differentiable,
{
    solve(f, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use rootsweep_core::{Value, WithDerivative};

    fn parabola() -> impl Differentiable {
        WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x)
    }

    #[test]
    fn converges_quadratically_on_parabola() {
        let trace = solve_unobserved(&parabola(), 1.0, &Config::default()).expect("should solve");

        assert_eq!(trace.roots.len(), 1);
        assert_abs_diff_eq!(trace.roots[0], 2.0, epsilon = 0.001);
        assert!(trace.records.len() < 10);
    }

    #[test]
    fn flat_derivative_stalls_without_root() {
        let trace = solve_unobserved(&parabola(), 0.0, &Config::default()).expect("should stall");

        assert!(trace.roots.is_empty());
        assert_eq!(trace.records.len(), 1);
        assert_eq!(trace.records[0].get("ea"), Some(&Value::Missing));
    }

    #[test]
    fn records_carry_the_contract_columns() {
        let trace = solve_unobserved(&parabola(), 1.0, &Config::default()).expect("should solve");

        assert_eq!(
            trace.records[0].field_names(),
            vec!["No. of iteration", "xi", "ea", "f(xi)", "f'(xi)"]
        );
        assert_eq!(
            trace.records[0].get("No. of iteration"),
            Some(&Value::Int(0))
        );
    }

    #[test]
    fn exhaustion_annotates_the_last_record() {
        // f(x) = x^(1/3) makes Newton diverge; the cube-root update doubles
        // the iterate's distance from zero every step.
        let f = WithDerivative::new(
            |x: f64| x.signum() * x.abs().cbrt(),
            |x: f64| x.abs().powf(-2.0 / 3.0) / 3.0,
        );
        let config = Config {
            max_iter: 20,
            ..Config::default()
        };

        let trace = solve_unobserved(&f, 1.0, &config).expect("should exhaust");

        assert!(trace.roots.is_empty());
        let last = trace.records.last().expect("has records");
        assert_eq!(
            last.get("Status"),
            Some(&Value::Text("Max iterations reached".into()))
        );
    }

    #[test]
    fn errors_on_non_finite_guess() {
        let result = solve_unobserved(&parabola(), f64::NAN, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event<'_>| {
            if event.iter >= 1 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let trace = solve(&parabola(), 10.0, &Config::default(), observer).expect("should stop");

        assert_eq!(trace.records.len(), 2);
        assert!(trace.roots.is_empty());
    }
}
