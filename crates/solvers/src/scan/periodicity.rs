//! Statistical periodicity detection over zero-crossing indices.
//!
//! A function sampled on a uniform grid is deemed periodic when its sign
//! changes arrive at regular intervals: with at least five crossings, the
//! gaps between consecutive crossing indices must have a population standard
//! deviation below one tenth of their mean. The estimated period is the mean
//! gap scaled by the grid spacing.
//!
//! This is a pure function over the crossing indices so the heuristic can be
//! tested without running a scan.

/// Minimum number of crossings before periodicity is considered.
const MIN_CROSSINGS: usize = 5;

/// Maximum allowed ratio of gap standard deviation to gap mean.
const MAX_SPREAD: f64 = 0.1;

/// Estimates the period of a function from the grid indices of its sign
/// changes, or `None` if the crossings are too few or too irregular.
#[must_use]
pub fn detect(crossings: &[usize], spacing: f64) -> Option<f64> {
    if crossings.len() < MIN_CROSSINGS {
        return None;
    }

    let gaps: Vec<f64> = crossings
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64)
        .collect();

    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let variance = gaps.iter().map(|gap| (gap - mean).powi(2)).sum::<f64>() / gaps.len() as f64;
    let stddev = variance.sqrt();

    if stddev < MAX_SPREAD * mean {
        Some(mean * spacing)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn regular_crossings_yield_a_period() {
        let crossings = [10, 20, 30, 40, 50];
        let period = detect(&crossings, 0.5).expect("should be periodic");

        assert_relative_eq!(period, 5.0);
    }

    #[test]
    fn too_few_crossings_are_inconclusive() {
        assert_eq!(detect(&[10, 20, 30, 40], 0.5), None);
        assert_eq!(detect(&[], 0.5), None);
    }

    #[test]
    fn irregular_crossings_are_not_periodic() {
        let crossings = [1, 4, 20, 21, 55];
        assert_eq!(detect(&crossings, 0.5), None);
    }

    #[test]
    fn tolerates_small_jitter() {
        // Gaps of 10, 11, 10, 9 have stddev well under 10% of the mean.
        let crossings = [0, 10, 21, 31, 40];
        let period = detect(&crossings, 0.2).expect("should be periodic");

        assert_relative_eq!(period, 2.0);
    }
}
