//! Lateral-line formulas: friction head loss and the allowable loss budget.

use crate::common::{check_finite, check_result, require_non_zero, require_positive};
use crate::error::{HydraulicsError, HydraulicsResult};

/// Hazen-Williams SI coefficient.
pub const HW_FACTOR: f64 = 10.67;

/// Hazen-Williams flow exponent
pub const HW_FLOW_EXPONENT: f64 = 1.852;

/// Hazen-Williams diameter exponent (applied as a negative power)
pub const HW_DIAMETER_EXPONENT: f64 = 4.87;

/// Fraction of the service pressure a lateral line may lose to friction.
pub const ALLOWABLE_LOSS_FRACTION: f64 = 0.20;

/// Friction head loss along a lateral line (Hazen-Williams).
///
/// `hf = 10.67 * D^-4.87 * (Q / C)^1.852 * L`
///
/// # Arguments
/// * `flow_rate` - lateral-line flow rate Q (m³/s)
/// * `internal_diameter` - pipe internal diameter D (m), must be positive
/// * `roughness_coefficient` - Hazen-Williams C (dimensionless), must be non-zero
/// * `length` - pipe length L (m)
///
/// # Returns
/// Head loss in m of water column
pub fn head_loss_hazen_williams(
    flow_rate: f64,
    internal_diameter: f64,
    roughness_coefficient: f64,
    length: f64,
) -> HydraulicsResult<f64> {
    const F: &str = "head_loss_hazen_williams";
    let q = check_finite(F, flow_rate, "flow_rate")?;
    let d = require_positive(F, internal_diameter, "internal_diameter")?;
    let c = require_non_zero(F, roughness_coefficient, "roughness_coefficient")?;
    let l = check_finite(F, length, "length")?;

    // Fractional power of a negative ratio has no real value.
    let ratio = q / c;
    if ratio < 0.0 {
        tracing::debug!(function = F, flow_rate = q, roughness_coefficient = c, "negative Q/C");
        return Err(HydraulicsError::invalid(
            F,
            format!("flow_rate / roughness_coefficient must be non-negative (got {ratio})"),
        ));
    }

    // No flow, no loss, even where D^-4.87 overflows.
    if ratio == 0.0 {
        return Ok(0.0);
    }

    let hf = HW_FACTOR * d.powf(-HW_DIAMETER_EXPONENT) * ratio.powf(HW_FLOW_EXPONENT) * l;
    check_result(F, hf)
}

/// Largest friction loss a lateral line may have: 20 % of the service pressure.
///
/// Negative pressures are accepted and give a negative allowance.
///
/// # Arguments
/// * `service_pressure` - sprinkler service pressure (m of water column)
pub fn allowable_head_loss(service_pressure: f64) -> HydraulicsResult<f64> {
    let ps = check_finite("allowable_head_loss", service_pressure, "service_pressure")?;
    Ok(ALLOWABLE_LOSS_FRACTION * ps)
}

/// Whether a lateral line's friction loss fits within the allowance for the
/// given service pressure.
pub fn lateral_within_allowance(head_loss: f64, service_pressure: f64) -> HydraulicsResult<bool> {
    let hf = check_finite("lateral_within_allowance", head_loss, "head_loss")?;
    Ok(hf <= allowable_head_loss(service_pressure)?)
}
