//! Argument checks shared by the formula modules.

use crate::error::{HydraulicsError, HydraulicsResult};
use sf_core::numeric::ensure_finite;

fn reject(function: &'static str, what: &'static str, value: f64, rule: &str) -> HydraulicsError {
    tracing::debug!(function, argument = what, value, "rejected argument: {rule}");
    HydraulicsError::invalid(function, format!("{what} {rule} (got {value})"))
}

/// Ensure an input is finite.
pub fn check_finite(function: &'static str, value: f64, what: &'static str) -> HydraulicsResult<f64> {
    ensure_finite(value, what).map_err(|_| reject(function, what, value, "must be finite"))
}

/// Ensure a computed result is finite.
pub fn check_result(function: &'static str, value: f64) -> HydraulicsResult<f64> {
    check_finite(function, value, "result")
}

pub fn require_non_negative(
    function: &'static str,
    value: f64,
    what: &'static str,
) -> HydraulicsResult<f64> {
    let value = check_finite(function, value, what)?;
    if value < 0.0 {
        return Err(reject(function, what, value, "must be non-negative"));
    }
    Ok(value)
}

pub fn require_positive(
    function: &'static str,
    value: f64,
    what: &'static str,
) -> HydraulicsResult<f64> {
    let value = check_finite(function, value, what)?;
    if value <= 0.0 {
        return Err(reject(function, what, value, "must be positive"));
    }
    Ok(value)
}

pub fn require_non_zero(
    function: &'static str,
    value: f64,
    what: &'static str,
) -> HydraulicsResult<f64> {
    let value = check_finite(function, value, what)?;
    if value == 0.0 {
        return Err(reject(function, what, value, "must be non-zero"));
    }
    Ok(value)
}
