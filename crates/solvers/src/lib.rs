//! Root-finding methods with per-iteration traces.
//!
//! Each solver is a pure function of its inputs: given an
//! [`Objective`](rootsweep_core::Objective) (and for Newton-Raphson its
//! derivative), an interval or starting point, and a validated config, it
//! returns a [`Trace`](rootsweep_core::Trace) holding the accepted roots and
//! one [`Record`](rootsweep_core::Record) per iteration. Record field names
//! and their order are part of the contract: a presentation layer renders
//! table columns directly from them.
//!
//! # Modules
//!
//! - [`bracketing`] — Bisection and multi-root Regula Falsi
//! - [`open`] — Newton-Raphson and Secant trajectories
//! - [`scan`] — Graphical grid scan (with periodicity detection) and
//!   failure-tolerant Incremental Search
//! - [`explore`] — domain suggestion and multi-guess sweeps built on the
//!   methods above
//!
//! # Observer Events
//!
//! Every solver emits one event per produced record and accepts
//! [`Action::StopEarly`], which halts the run and returns the trace
//! accumulated so far. Pass `()` for no observation.

mod action;

pub mod bracketing;
pub mod explore;
pub mod open;
pub mod scan;

pub use action::Action;
