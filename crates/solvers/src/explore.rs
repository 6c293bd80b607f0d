//! Domain discovery for functions whose roots live who-knows-where.
//!
//! [`suggest_range`] probes a wide window, looks for zero crossings, and
//! proposes a viewing window likely to contain every root. A periodic
//! function would otherwise report infinitely many roots, so the probe runs
//! the [`periodicity`](crate::scan::periodicity) test first and, when it
//! fires, clamps the window to one-and-a-half periods on each side.
//!
//! [`newton_sweep`] and [`secant_sweep`] realize the "multiple guesses"
//! framing of the open methods: many evenly spaced starting points, one
//! independent trajectory each, merged with de-duplication.

mod config;
mod error;
mod suggestion;
mod sweep;

pub use config::Config;
pub use error::Error;
pub use suggestion::Suggestion;
pub use sweep::{newton_sweep, secant_sweep};

use rootsweep_core::{Objective, round_to};

use crate::scan::periodicity;

/// Suggests an x-window likely to contain all roots of `f`.
///
/// Probe samples that fail to evaluate are treated as undefined and skipped;
/// a partially evaluable function still gets a suggestion.
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn suggest_range<F>(f: &F, config: &Config) -> Result<Suggestion, Error>
where
    F: Objective,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let [wide_min, wide_max] = config.wide_range;
    let xs = linspace(wide_min, wide_max, config.samples);
    let spacing = xs[1] - xs[0];

    let ys: Vec<f64> = xs
        .iter()
        .map(|&x| f.eval(x).unwrap_or(f64::NAN))
        .collect();

    // Sign-bit transitions; NaN carries a positive sign bit, so undefined
    // samples never register as crossings on their own.
    let crossings: Vec<usize> = (1..ys.len())
        .filter(|&i| ys[i - 1].is_sign_negative() != ys[i].is_sign_negative())
        .collect();

    if let Some(period) = periodicity::detect(&crossings, spacing) {
        let x_min = -period * 1.5;
        let x_max = period * 1.5;

        let mut roots: Vec<f64> = crossings
            .iter()
            .map(|&i| xs[i])
            .filter(|&x| (x_min..=x_max).contains(&x))
            .collect();
        dedupe(&mut roots);

        return Ok(Suggestion {
            x_min,
            x_max,
            period: Some(period),
            roots,
        });
    }

    let mut roots: Vec<f64> = crossings
        .iter()
        .filter_map(|&i| {
            let (x0, x1) = (xs[i - 1], xs[i]);
            let (y0, y1) = (ys[i - 1], ys[i]);
            let root = x0 - y0 * (x1 - x0) / (y1 - y0);
            root.is_finite().then_some(root)
        })
        .collect();
    dedupe(&mut roots);

    if roots.is_empty() {
        let [x_min, x_max] = config.fallback;
        return Ok(Suggestion {
            x_min,
            x_max,
            period: None,
            roots,
        });
    }

    let lo = roots[0];
    let hi = roots[roots.len() - 1];
    let padding = (config.padding_factor * (hi - lo)).max(config.min_padding);
    let mut x_min = lo - padding;
    let mut x_max = hi + padding;

    if x_max - x_min < config.min_window {
        let center = (x_max + x_min) / 2.0;
        x_min = center - config.min_window / 2.0;
        x_max = center + config.min_window / 2.0;
    }

    Ok(Suggestion {
        x_min,
        x_max,
        period: None,
        roots,
    })
}

/// Evenly spaced samples over `[lo, hi]`, inclusive of both ends.
pub(crate) fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let spacing = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + i as f64 * spacing).collect()
}

/// Rounds to display precision, sorts, and removes exact duplicates.
pub(crate) fn dedupe(roots: &mut Vec<f64>) {
    for root in roots.iter_mut() {
        *root = round_to(*root, 6);
    }
    roots.sort_by(f64::total_cmp);
    roots.dedup();
}
