//! Cross-method convergence scenarios on shared objectives.

use approx::assert_abs_diff_eq;
use rootsweep_core::WithDerivative;
use rootsweep_solvers::{bracketing, explore, open, scan};

fn parabola(x: f64) -> f64 {
    x * x - 4.0
}

#[test]
fn every_method_agrees_on_the_parabola_root() {
    let bisect = bracketing::bisection::solve_unobserved(
        &parabola,
        [0.0, 10.0],
        &bracketing::bisection::Config::default(),
    )
    .expect("bisection should run");
    assert_abs_diff_eq!(bisect.roots[0], 2.0, epsilon = 0.05);

    let falsi = bracketing::regula_falsi::solve_unobserved(
        &parabola,
        [0.0, 9.0],
        &bracketing::regula_falsi::Config::default(),
    )
    .expect("regula falsi should run");
    assert_abs_diff_eq!(falsi.roots[0], 2.0, epsilon = 1e-5);

    let newton = open::newton_raphson::solve_unobserved(
        &WithDerivative::new(parabola, |x: f64| 2.0 * x),
        1.0,
        &open::newton_raphson::Config::default(),
    )
    .expect("newton should run");
    assert_abs_diff_eq!(newton.roots[0], 2.0, epsilon = 0.001);

    let secant = open::secant::solve_unobserved(
        &parabola,
        0.5,
        5.0,
        &open::secant::Config::default(),
    )
    .expect("secant should run");
    assert_abs_diff_eq!(secant.roots[0], 2.0, epsilon = 0.001);
}

#[test]
fn scanners_feed_the_refining_methods() {
    // Discovery first: a coarse scan brackets each root, then bisection
    // refines inside the scanner's grid interval.
    let scan_trace = scan::incremental::solve_unobserved(
        &parabola,
        [-3.05, 3.05],
        &scan::incremental::Config::default(),
    )
    .expect("scan should run");
    assert_eq!(scan_trace.roots.len(), 2);

    for &coarse in &scan_trace.roots {
        let refined = bracketing::bisection::solve_unobserved(
            &parabola,
            [coarse - 0.1, coarse + 0.1],
            &bracketing::bisection::Config {
                tol: 1e-4,
                max_iter: 60,
            },
        )
        .expect("refinement should run");
        assert_abs_diff_eq!(refined.roots[0], coarse.signum() * 2.0, epsilon = 1e-4);
    }
}

#[test]
fn suggested_window_contains_every_discovered_root() {
    let suggestion = explore::suggest_range(&parabola, &explore::Config::default())
        .expect("probe should run");

    let trace = bracketing::regula_falsi::solve_unobserved(
        &parabola,
        [suggestion.x_min, suggestion.x_max],
        &bracketing::regula_falsi::Config::default(),
    )
    .expect("regula falsi should run");

    for root in &trace.roots {
        assert!((suggestion.x_min..=suggestion.x_max).contains(root));
    }
}

#[test]
fn periodic_probe_and_graphical_scan_agree() {
    let sine = |x: f64| x.sin();

    let suggestion =
        explore::suggest_range(&sine, &explore::Config::default()).expect("probe should run");
    let solution =
        scan::graphical::solve_unobserved(&sine, -50.0, 50.0, 0.2).expect("scan should run");

    let probed = suggestion.period.expect("probe should find a period");
    let scanned = solution.period.expect("scan should find a period");
    assert_abs_diff_eq!(probed, scanned, epsilon = 0.05 * std::f64::consts::PI);
}

#[test]
fn methods_are_pure_functions_of_their_inputs() {
    let first = bracketing::regula_falsi::solve_unobserved(
        &parabola,
        [-5.0, 4.0],
        &bracketing::regula_falsi::Config::default(),
    )
    .expect("should run");
    let second = bracketing::regula_falsi::solve_unobserved(
        &parabola,
        [-5.0, 4.0],
        &bracketing::regula_falsi::Config::default(),
    )
    .expect("should run");

    assert_eq!(first, second);
}
