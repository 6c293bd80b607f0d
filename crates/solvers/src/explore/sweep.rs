use rootsweep_core::{Differentiable, Objective, Trace};

use crate::open::{newton_raphson, secant};

use super::{dedupe, linspace};

/// Runs Newton-Raphson from `num_guesses` evenly spaced starting points and
/// merges the results.
///
/// Each trajectory is independent; a guess that fails (a pole under the
/// iterate, a stalled derivative) contributes nothing rather than failing
/// the sweep. Merged roots are sorted and de-duplicated; records are
/// concatenated in guess order.
///
/// # Errors
///
/// Returns an error only if the config itself is invalid.
pub fn newton_sweep<F>(
    f: &F,
    range: [f64; 2],
    num_guesses: usize,
    config: &newton_raphson::Config,
) -> Result<Trace, newton_raphson::Error>
where
    F: Differentiable,
{
    config
        .validate()
        .map_err(|reason| newton_raphson::Error::InvalidConfig { reason })?;

    let mut merged = Trace::new();

    for x0 in guesses(range, num_guesses) {
        let Ok(trace) = newton_raphson::solve_unobserved(f, x0, config) else {
            continue;
        };
        merged.roots.extend(trace.roots);
        merged.records.extend(trace.records);
    }

    dedupe(&mut merged.roots);
    Ok(merged)
}

/// Runs the secant method from `num_guesses` starting pairs `(x0, x0 + 0.1)`
/// and merges the results, as [`newton_sweep`] does.
///
/// # Errors
///
/// Returns an error only if the config itself is invalid.
pub fn secant_sweep<F>(
    f: &F,
    range: [f64; 2],
    num_guesses: usize,
    config: &secant::Config,
) -> Result<Trace, secant::Error>
where
    F: Objective,
{
    config
        .validate()
        .map_err(|reason| secant::Error::InvalidConfig { reason })?;

    let mut merged = Trace::new();

    for x0 in guesses(range, num_guesses) {
        let Ok(trace) = secant::solve_unobserved(f, x0, x0 + 0.1, config) else {
            continue;
        };
        merged.roots.extend(trace.roots);
        merged.records.extend(trace.records);
    }

    dedupe(&mut merged.roots);
    Ok(merged)
}

fn guesses(range: [f64; 2], num_guesses: usize) -> Vec<f64> {
    let [lo, hi] = range;
    match num_guesses {
        0 => Vec::new(),
        1 => vec![lo],
        n => linspace(lo, hi, n),
    }
}
