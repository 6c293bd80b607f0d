//! Secant iteration over a two-point trajectory.
//!
//! The method replaces Newton's derivative with a finite-difference slope
//! through the two most recent iterates. Acceptance is stricter than
//! Newton-Raphson's: both the approximate relative error and the residual at
//! the new iterate must fall below `tol`.
//!
//! A secant slope with magnitude below `1e-10` aborts the trajectory before
//! any record is written for that iteration, protecting the update against
//! division by zero.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use rootsweep_core::{Objective, Record, Trace, round_to};

use crate::Action;

/// Iteration event emitted by the secant solver.
pub struct Event<'a> {
    /// Iteration counter (1-based, matching the record).
    pub iter: usize,
    /// The trajectory window `(x_{i-1}, x_i)` before the update.
    pub window: [f64; 2],
    /// The record built for this iteration, before it joins the trace.
    pub record: &'a Record,
}

/// Finds a root of `f` from the starting pair `(x0, x1)` using the secant
/// method.
///
/// Observers see each iteration's record and may return
/// [`Action::StopEarly`] to halt with the partial trace.
///
/// # Errors
///
/// Returns an error if either guess is non-finite, the config is invalid,
/// or the objective fails to evaluate.
pub fn solve<F, Obs>(
    f: &F,
    x0: f64,
    x1: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Trace, Error>
where
    F: Objective,
    Obs: for<'a> rootsweep_core::Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    for value in [x0, x1] {
        if !value.is_finite() {
            return Err(Error::NonFiniteGuess { value });
        }
    }

    let mut trace = Trace::new();
    let (mut xi_prev, mut xi) = (x0, x1);

    for iter in 1..=config.max_iter {
        let f_prev = f.eval(xi_prev)?;
        let f_curr = f.eval(xi)?;

        // Slope underflow: the update would divide by (nearly) zero.
        if (f_curr - f_prev).abs() < 1e-10 {
            break;
        }

        let xi_next = xi - f_curr * (xi - xi_prev) / (f_curr - f_prev);
        let ea = if xi_next == 0.0 {
            0.0
        } else {
            ((xi_next - xi) / xi_next).abs()
        };
        let f_next = f.eval(xi_next)?;

        let record = Record::new()
            .with("Iteration Number", iter as u64)
            .with("xi-1", round_to(xi_prev, 6))
            .with("xi", round_to(xi, 6))
            .with("xi+1", round_to(xi_next, 6))
            .with("ea", round_to(ea * 100.0, 3))
            .with("f(xi-1)", round_to(f_prev, 6))
            .with("f(xi)", round_to(f_curr, 6))
            .with("f(xi+1)", round_to(f_next, 6));

        let event = Event {
            iter,
            window: [xi_prev, xi],
            record: &record,
        };
        let action = observer.observe(&event);
        trace.push_record(record);

        if let Some(Action::StopEarly) = action {
            return Ok(trace);
        }

        if ea < config.tol && f_next.abs() < config.tol {
            trace.push_root(round_to(xi_next, 6));
            break;
        }

        xi_prev = xi;
        xi = xi_next;

        if iter == config.max_iter {
            if let Some(last) = trace.records.last_mut() {
                last.push("Status", "Max iterations reached");
            }
        }
    }

    Ok(trace)
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if either guess is non-finite, the config is invalid,
/// or the objective fails to evaluate.
pub fn solve_unobserved<F>(f: &F, x0: f64, x1: f64, config: &Config) -> Result<Trace, Error>
where
    F: Objective,
{
    solve(f, x0, x1, config, ())
}
