//! Multi-root regula falsi (false position) over a partitioned bracket.
//!
//! The outer bracket is split into equal subintervals. Subintervals without
//! a sign change are skipped outright; each remaining one runs its own
//! false-position iteration and may contribute one root. Roots within `tol`
//! of an already-accepted root are suppressed, so a crossing straddling a
//! partition boundary is reported once.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use rootsweep_core::{Objective, Record, Trace, round_to};

use crate::Action;
use crate::bracketing::validate_bracket;

/// Iteration event emitted by the regula falsi solver.
pub struct Event<'a> {
    /// Bounds of the subinterval being iterated.
    pub subinterval: [f64; 2],
    /// Iteration counter within the subinterval (1-based).
    pub iter: usize,
    /// The record built for this iteration, before it joins the trace.
    pub record: &'a Record,
}

/// Finds roots of `f` in `[a, b]` by false position over equal subintervals.
///
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

    let [a, b] = validate_bracket::<Error>(bracket)?;

    let mut trace = Trace::new();
    let subinterval_size = (b - a) / config.num_intervals as f64;

    for i in 0..config.num_intervals {
        let x1 = a + i as f64 * subinterval_size;
        let x2 = x1 + subinterval_size;

        let mut fl = f.eval(x1)?;
        let mut fr = f.eval(x2)?;

        // No guaranteed sign change in this subinterval.
        if fl * fr >= 0.0 {
            continue;
        }

        let (mut left, mut right) = (x1, x2);

        for iter in 1..=config.max_iter {
            let c = (left * fr - right * fl) / (fr - fl);
            let fc = f.eval(c)?;

            let record = Record::new()
                .with("Subinterval", format!("[{x1:.2}, {x2:.2}]"))
                .with("Iteration", iter as u64)
                .with("a", round_to(left, 6))
                .with("b", round_to(right, 6))
                .with("c", round_to(c, 6))
                .with("f(c)", format!("{fc:.4e}"));

            let event = Event {
                subinterval: [x1, x2],
                iter,
                record: &record,
            };
            let action = observer.observe(&event);
            trace.push_record(record);

            if let Some(Action::StopEarly) = action {
                return Ok(trace);
            }

            if fc.abs() < config.tol {
                if !trace.has_root_near(c, config.tol) {
                    trace.push_root(round_to(c, 6));
                }
                break;
            }

            if fl * fc < 0.0 {
                right = c;
                fr = fc;
            } else {
                left = c;
                fl = fc;
            }

            if (right - left).abs() < config.tol {
                break;
            }
        }
    }

    Ok(trace)
}

/// Runs regula falsi without observation.
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use rootsweep_core::Value;

    fn parabola(x: f64) -> f64 {
        x * x - 4.0
    }

    #[test]
    fn finds_both_parabola_roots() {
        let trace =
            solve_unobserved(&parabola, [-5.0, 4.0], &Config::default()).expect("should solve");

        assert_eq!(trace.roots.len(), 2);
        assert_abs_diff_eq!(trace.roots[0], -2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(trace.roots[1], 2.0, epsilon = 1e-5);
    }

    #[test]
    fn finds_single_root_in_bracket() {
        let trace =
            solve_unobserved(&parabola, [0.0, 9.0], &Config::default()).expect("should solve");

        assert_eq!(trace.roots.len(), 1);
        assert_abs_diff_eq!(trace.roots[0], 2.0, epsilon = 1e-5);
    }

    #[test]
    fn root_on_partition_boundary_is_skipped() {
        // x = 2 sits exactly on a subinterval boundary of [0, 10] split ten
        // ways, so f(x1)*f(x2) == 0 and the sign-change test rejects both
        // neighboring subintervals. Known behavior, preserved on purpose.
        let trace =
            solve_unobserved(&parabola, [0.0, 10.0], &Config::default()).expect("should run");

        assert!(trace.roots.is_empty());
    }

    #[test]
    fn skips_subintervals_without_sign_change() {
        let f = |x: f64| x * x + 1.0;
        let trace = solve_unobserved(&f, [-5.0, 5.0], &Config::default()).expect("should run");

        assert!(trace.roots.is_empty());
        assert!(trace.records.is_empty());
    }

    #[test]
    fn records_tag_their_subinterval() {
        let trace =
            solve_unobserved(&parabola, [0.0, 9.0], &Config::default()).expect("should solve");

        let names = trace.records[0].field_names();
        assert_eq!(
            names,
            vec!["Subinterval", "Iteration", "a", "b", "c", "f(c)"]
        );
        assert_eq!(
            trace.records[0].get("Subinterval"),
            Some(&Value::Text("[1.80, 2.70]".into()))
        );
    }

    #[test]
    fn deduplicates_roots_across_subintervals() {
        // sin(x) has a root at exactly 0, which sits on a partition boundary
        // of [-pi, pi] for an even interval count.
        let f = |x: f64| x.sin();
        let trace = solve_unobserved(
            &f,
            [-std::f64::consts::PI, std::f64::consts::PI],
            &Config::default(),
        )
        .expect("should solve");

        let near_zero = trace.roots.iter().filter(|r| r.abs() < 1e-3).count();
        assert!(near_zero <= 1);
    }

    #[test]
    fn errors_on_zero_subintervals() {
        let config = Config {
            num_intervals: 0,
            ..Config::default()
        };
        let result = solve_unobserved(&parabola, [0.0, 10.0], &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn errors_on_degenerate_bracket() {
        let result = solve_unobserved(&parabola, [10.0, 0.0], &Config::default());
        assert!(matches!(result, Err(Error::DegenerateBracket { .. })));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event<'_>| {
            if event.iter >= 2 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let trace =
            solve(&parabola, [0.0, 9.0], &Config::default(), observer).expect("should stop");

        assert_eq!(trace.records.len(), 2);
        assert!(trace.roots.is_empty());
    }
}
