//! Bisection with a percentage-error stopping rule.
//!
//! Each iteration halves the bracket at the midpoint `c`, keeps the half with
//! the sign change, and reports the approximate relative error
//! `|c_new − c_old| / |c_new| × 100` from the second iteration onward.
//!
//! One quirk is preserved deliberately: the half selection tests only
//! `f(a)·f(c) < 0` and otherwise assumes the root lies in the second half,
//! without re-checking `f(c)·f(b)`. Floating-point noise near the root can
//! make both products positive, and the method still proceeds as if the
//! second half were correct.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use rootsweep_core::{Objective, Record, Trace, round_to};

use crate::Action;
use crate::bracketing::validate_bracket;

/// Iteration event emitted by the bisection solver.
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket after this iteration's halving.
    pub bracket: [f64; 2],
    /// The record built for this iteration, before it joins the trace.
    pub record: &'a Record,
}

/// Finds one root of `f` in `[a, b]` by bisection.
///
/// Returns an empty trace when `f(a)·f(b) > 0` (no guaranteed sign change).
/// Observers see each iteration's record and may return
/// [`Action::StopEarly`] to halt with the partial trace.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or degenerate, the config
/// is invalid, or the objective fails to evaluate.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
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

    let [mut a, mut b] = validate_bracket::<Error>(bracket)?;

    let mut trace = Trace::new();

    if f.eval(a)? * f.eval(b)? > 0.0 {
        return Ok(trace);
    }

    let mut x_old: Option<f64> = None;

    for iter in 1..=config.max_iter {
        let c = (a + b) / 2.0;
        let fc = f.eval(c)?;
        let fa = f.eval(a)?;
        let fb = f.eval(b)?;

        let error = match x_old {
            Some(old) => ((c - old) / c).abs() * 100.0,
            None => 0.0,
        };

        let remark = if fa * fc < 0.0 {
            b = c;
            "1st subinterval"
        } else {
            a = c;
            "2nd subinterval"
        };

        // xl/xu reflect the narrowed bracket while f(xl)/f(xu) keep the
        // endpoint values evaluated before the halving.
        let record = Record::new()
            .with("Iteration", iter as u64)
            .with("xl", round_to(a, 7))
            .with("xr", round_to(c, 7))
            .with("xu", round_to(b, 7))
            .with("f(xl)", round_to(fa, 7))
            .with("f(xr)", round_to(fc, 7))
            .with("f(xu)", round_to(fb, 7))
            .with("|ea|%", round_to(error, 7))
            .with("f(xl)·f(xu)", if fa * fb < 0.0 { "< 0" } else { "> 0" })
            .with("Remark", remark);

        let event = Event {
            iter,
            bracket: [a, b],
            record: &record,
        };
        let action = observer.observe(&event);
        trace.push_record(record);

        if let Some(Action::StopEarly) = action {
            return Ok(trace);
        }

        if error < config.tol && iter > 1 {
            trace.push_root(round_to(c, 7));
            break;
        }

        x_old = Some(c);

        if fc.abs() < 1e-10 {
            trace.push_root(round_to(c, 7));
            break;
        }
    }

    Ok(trace)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or degenerate, the config
/// is invalid, or the objective fails to evaluate.
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Trace, Error>
where
    F: Objective,
{
    solve(f, bracket, config, ())
}
