//! Graphical method: sample a grid, record every point, interpolate roots.
//!
//! Every sampled `(x, f(x))` pair becomes a record — the table a caller
//! would plot. A sign change between consecutive samples yields a linearly
//! interpolated root, with no de-duplication: a grid that crosses zero twice
//! in quick succession reports two nearby roots, which is accepted behavior.
//!
//! When at least five crossings arrive at regular grid intervals the scan
//! declares the function periodic (see [`periodicity`](super::periodicity))
//! and appends a synthetic trailing record carrying the estimated period.

mod error;
mod solution;

pub use error::Error;
pub use solution::Solution;

use rootsweep_core::{Objective, Record, Trace, round_to};

use crate::Action;
use crate::scan::periodicity;

/// Sample event emitted by the graphical scan.
pub struct Event<'a> {
    /// Zero-based grid index of the sample.
    pub index: usize,
    /// Sample location.
    pub x: f64,
    /// The record built for this sample, before it joins the trace.
    pub record: &'a Record,
}

/// Scans `f` on the closed grid `x_min, x_min + step, …, x_max`.
///
/// The grid is half-open at `x_max + step / 2`: the bias keeps the right
/// endpoint despite floating-point drift without sampling a full extra step
/// past `x_max`. Observers see each sample's record
/// and may return [`Action::StopEarly`] to halt with the partial trace (an
/// early-stopped scan reports no period).
///
/// # Errors
///
/// Returns an error if `step` is non-positive or non-finite, a bound is
/// non-finite, or the objective fails to evaluate.
pub fn solve<F, Obs>(
    f: &F,
    x_min: f64,
    x_max: f64,
    step: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: for<'a> rootsweep_core::Observer<Event<'a>, Action>,
{
    if !(step > 0.0) || !step.is_finite() {
        return Err(Error::InvalidStep { step });
    }
    for value in [x_min, x_max] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBound { value });
        }
    }

    let mut trace = Trace::new();
    let mut crossings = Vec::new();
    let mut y_prev = f64::NAN;

    let mut index = 0usize;
    loop {
        let x = x_min + index as f64 * step;
        if x >= x_max + step / 2.0 {
            break;
        }

        let y = f.eval(x)?;

        let record = Record::new()
            .with("x", round_to(x, 3))
            .with("f(x)", round_to(y, 8));

        let event = Event {
            index,
            x,
            record: &record,
        };
        let action = observer.observe(&event);
        trace.push_record(record);

        if let Some(Action::StopEarly) = action {
            return Ok(Solution { trace, period: None });
        }

        // NaN in either sample makes the product NaN, which fails the test
        // and skips the crossing, as intended.
        if index > 0 && y_prev * y <= 0.0 {
            let x_prev = x - step;
            let x_root = x_prev - y_prev * (x - x_prev) / (y - y_prev);
            trace.push_root(round_to(x_root, 6));
        }

        // Periodicity counts true sign transitions, not the looser product
        // test above: a sample landing exactly on zero satisfies the product
        // test on both sides and would corrupt the gap statistics.
        if index > 0 && y_prev.is_sign_negative() != y.is_sign_negative() {
            crossings.push(index);
        }

        y_prev = y;
        index += 1;
    }

    let period = periodicity::detect(&crossings, step);
    if let Some(p) = period {
        trace.push_record(Record::new().with("x", "Period").with("f(x)", format!("{p:.6}")));
    }

    Ok(Solution { trace, period })
}

/// Runs the graphical scan without observation.
///
/// # Errors
///
/// Returns an error if `step` is non-positive or non-finite, a bound is
/// non-finite, or the objective fails to evaluate.
pub fn solve_unobserved<F>(f: &F, x_min: f64, x_max: f64, step: f64) -> Result<Solution, Error>
where
    F: Objective,
{
    solve(f, x_min, x_max, step, ())
}
