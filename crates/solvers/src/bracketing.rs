//! Bracketing methods.
//!
//! Both methods require an interval and rely on a sign change to guarantee a
//! root by continuity. Absence of a sign change is not an error: bisection
//! returns an empty trace, and regula falsi simply skips the subintervals
//! without one.

pub mod bisection;
pub mod regula_falsi;

/// Bracket validation failures, converted into each solver's error type.
pub(crate) enum BracketError {
    NonFinite { value: f64 },
    Degenerate { left: f64, right: f64 },
}

/// Validates that the bracket is finite with `left < right`.
pub(crate) fn validate_bracket<E>(bracket: [f64; 2]) -> Result<[f64; 2], E>
where
    E: From<BracketError>,
{
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(BracketError::NonFinite { value: left }.into());
    }
    if !right.is_finite() {
        return Err(BracketError::NonFinite { value: right }.into());
    }
    if left >= right {
        return Err(BracketError::Degenerate { left, right }.into());
    }

    Ok([left, right])
}
