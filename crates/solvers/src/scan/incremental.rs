//! Incremental search with per-sample failure tolerance.
//!
//! The scan walks from `a` to `b` in fixed steps and classifies each sample
//! into one of three outcomes, each with its own remark: a valid
//! sign-product test, an undefined or infinite value, or an outright
//! evaluation failure. No single bad point aborts the scan — the record gets
//! a diagnostic placeholder and the walk continues, which is what lets it
//! cross a pole like `1/x` at zero.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use rootsweep_core::{Objective, Record, Trace, Value, round_to};

use crate::Action;

/// Sample event emitted by the incremental search.
pub struct Event<'a> {
    /// One-based sample counter, matching the record's `i` field.
    pub iter: usize,
    /// Left edge of the interval being tested.
    pub x: f64,
    /// The record built for this sample, before it joins the trace.
    pub record: &'a Record,
}

/// Scans `f` from `a` to `b` in steps of `config.step`, estimating a root in
/// every interval whose endpoints change sign.
///
/// Observers see each sample's record and may return [`Action::StopEarly`]
/// to halt with the partial trace.
///
/// # Errors
///
/// Returns an error if a bound is non-finite or the config is invalid.
/// Objective failures never surface here; they become records.
pub fn solve<F, Obs>(
    f: &F,
    range: [f64; 2],
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

    let [a, b] = range;
    for value in [a, b] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBound { value });
        }
    }

    let mut trace = Trace::new();
    let mut x = a;
    let mut iter = 1usize;

    while x <= b {
        let x_next = x + config.step;

        let record = match (f.eval(x), f.eval(x_next)) {
            (Ok(fx), Ok(fx_next)) => {
                if !fx.is_finite() || !fx_next.is_finite() {
                    Record::new()
                        .with("i", iter as u64)
                        .with("xi", round_to(x, 3))
                        .with(
                            "f(xi)",
                            if fx.is_finite() {
                                Value::Num(round_to(fx, 6))
                            } else {
                                Value::Text("Undefined or Infinite".into())
                            },
                        )
                        .with("f(xi)*f(xi+1)", "Undefined or Infinite")
                        .with("Remark", "Function is undefined or infinite at this point")
                } else {
                    let product = fx * fx_next;
                    let remark = if product > 0.0 {
                        "No root in this interval"
                    } else {
                        "A root exists in this interval"
                    };

                    if product <= 0.0 {
                        let denominator = fx_next - fx;
                        let root = if denominator.abs() < 1e-10 {
                            // Slope too small to interpolate against.
                            (x + x_next) / 2.0
                        } else {
                            x - config.step * fx / denominator
                        };

                        if root.is_finite() {
                            trace.push_root(round_to(root, 6));
                        }
                    }

                    Record::new()
                        .with("i", iter as u64)
                        .with("xi", round_to(x, 3))
                        .with("f(xi)", round_to(fx, 6))
                        .with("f(xi)*f(xi+1)", round_to(product, 6))
                        .with("Remark", remark)
                }
            }
            _ => Record::new()
                .with("i", iter as u64)
                .with("xi", round_to(x, 3))
                .with("f(xi)", "Unable to evaluate function")
                .with("f(xi)*f(xi+1)", "Unable to evaluate function")
                .with("Remark", "Function evaluation failed at this point"),
        };

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

        x = x_next;
        iter += 1;
    }

    Ok(trace)
}

/// Runs the incremental search without observation.
///
/// # Errors
///
/// Returns an error if a bound is non-finite or the config is invalid.
pub fn solve_unobserved<F>(f: &F, range: [f64; 2], config: &Config) -> Result<Trace, Error>
where
    F: Objective,
{
    solve(f, range, config, ())
}
