//! Core traits and types for the Rootsweep solvers.
//!
//! This crate defines the shared abstractions the root-finding methods
//! build on:
//!
//! - [`Objective`] — a callable mapping ℝ → ℝ with explicit evaluation errors
//! - [`Differentiable`] — an objective that also supplies its derivative
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Record`] and [`Value`] — one named-field row of an iteration table
//! - [`Trace`] — the ordered roots-plus-records result every solver returns
//!
//! Evaluation is reified as a [`Result`]: `Ok(f64::NAN)` or `Ok(f64::INFINITY)`
//! means the function is undefined or unbounded at that point, while
//! [`EvalError`] means the adapter itself could not produce a value. Scanning
//! methods recover from both per sample; bracketing methods propagate the
//! latter.

mod objective;
mod observer;
mod record;
mod trace;

pub use objective::{Differentiable, EvalError, Fallible, Objective, WithDerivative};
pub use observer::Observer;
pub use record::{Record, Value, round_to};
pub use trace::Trace;
