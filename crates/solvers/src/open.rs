//! Open (non-bracketing) methods.
//!
//! Both methods iterate a trajectory from starting guesses rather than
//! narrowing an interval, so convergence is not guaranteed. Division-by-zero
//! hazards (a flat derivative, a vanishing secant slope) end the trajectory
//! early as recorded diagnostics, never as errors.

pub mod newton_raphson;
pub mod secant;
