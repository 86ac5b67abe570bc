//! Sprinkler formulas: discharge, jet throw radius, application intensity
//! and efficiency.
//!
//! All functions take plain `f64` values in the units documented on each
//! argument and perform no unit conversion.

use std::ops::RangeInclusive;

use crate::common::{check_finite, check_result, require_non_negative, require_non_zero};
use crate::error::HydraulicsResult;
use crate::sprinkler_type::SprinklerType;
use sf_core::units::constants::SECONDS_PER_HOUR;

/// Torricelli factor `sqrt(2 g)` with g = 9.8 m/s².
pub const DISCHARGE_FACTOR: f64 = 4.4272;

/// Empirical coefficient of the throw-radius correlations.
pub const THROW_FACTOR: f64 = 1.35;

const FIXED_DIAMETER_EXPONENT: f64 = 0.6;
const FIXED_HEAD_EXPONENT: f64 = 0.4;

/// Range (in %) that sprinkler system efficiency typically falls in.
pub const EXPECTED_EFFICIENCY_RANGE: RangeInclusive<f64> = 75.0..=85.0;

/// Sprinkler discharge from the orifice equation.
///
/// `q = 4.4272 * A * C * sqrt(h)`
///
/// # Arguments
/// * `orifice_area` - outlet orifice area (m²)
/// * `discharge_coefficient` - dimensionless discharge coefficient
/// * `head` - pressure head (m of water column), must be non-negative
///
/// # Returns
/// Flow rate in m³/s
pub fn sprinkler_discharge(
    orifice_area: f64,
    discharge_coefficient: f64,
    head: f64,
) -> HydraulicsResult<f64> {
    const F: &str = "sprinkler_discharge";
    let a = check_finite(F, orifice_area, "orifice_area")?;
    let c = check_finite(F, discharge_coefficient, "discharge_coefficient")?;
    let h = require_non_negative(F, head, "head")?;

    check_result(F, DISCHARGE_FACTOR * a * c * h.sqrt())
}

/// Maximum horizontal reach of the water jet.
///
/// - Fixed: `R = 1.35 * d^0.6 * h^0.4`
/// - Rotary: `R = 1.35 * sqrt(d) * h`
///
/// # Arguments
/// * `nozzle_diameter` - nozzle diameter (mm), must be non-negative
/// * `head` - pressure head (m of water column), must be non-negative
/// * `sprinkler_type` - selects the correlation
///
/// # Returns
/// Throw radius in m
pub fn jet_throw_radius(
    nozzle_diameter: f64,
    head: f64,
    sprinkler_type: SprinklerType,
) -> HydraulicsResult<f64> {
    const F: &str = "jet_throw_radius";
    let d = require_non_negative(F, nozzle_diameter, "nozzle_diameter")?;
    let h = require_non_negative(F, head, "head")?;

    let radius = match sprinkler_type {
        SprinklerType::Fixed => {
            THROW_FACTOR * d.powf(FIXED_DIAMETER_EXPONENT) * h.powf(FIXED_HEAD_EXPONENT)
        }
        SprinklerType::Rotary => THROW_FACTOR * d.sqrt() * h,
    };

    check_result(F, radius)
}

/// [`jet_throw_radius`] with the sprinkler type given by name
/// (`"fixed"`/`"fixo"` or `"rotary"`/`"rotativo"`).
pub fn jet_throw_radius_by_name(
    nozzle_diameter: f64,
    head: f64,
    sprinkler_type: &str,
) -> HydraulicsResult<f64> {
    jet_throw_radius(nozzle_diameter, head, sprinkler_type.parse()?)
}

/// Depth of water applied per unit time over the area served by one sprinkler.
///
/// `I = (q * 3600) / (E1 * E2)`
///
/// # Arguments
/// * `flow_rate` - sprinkler flow rate (L/s)
/// * `row_spacing` - spacing between sprinklers on the same line, E1 (m)
/// * `line_spacing` - spacing between lateral lines, E2 (m)
///
/// # Returns
/// Application intensity in mm/h
pub fn application_intensity(
    flow_rate: f64,
    row_spacing: f64,
    line_spacing: f64,
) -> HydraulicsResult<f64> {
    const F: &str = "application_intensity";
    let q = check_finite(F, flow_rate, "flow_rate")?;
    let e1 = require_non_zero(F, row_spacing, "row_spacing")?;
    let e2 = require_non_zero(F, line_spacing, "line_spacing")?;

    check_result(F, (q * SECONDS_PER_HOUR) / (e1 * e2))
}

/// Sprinkler/system efficiency as a percentage.
///
/// `Ef = (R / h) * 100`
///
/// The result is not clamped to [`EXPECTED_EFFICIENCY_RANGE`]; use
/// [`efficiency_within_expected_range`] to check it.
///
/// # Arguments
/// * `coverage_radius` - coverage radius (m)
/// * `head` - pressure head (m of water column), must be non-zero
pub fn efficiency(coverage_radius: f64, head: f64) -> HydraulicsResult<f64> {
    const F: &str = "efficiency";
    let r = check_finite(F, coverage_radius, "coverage_radius")?;
    let h = require_non_zero(F, head, "head")?;

    check_result(F, (r / h) * 100.0)
}

/// Whether an efficiency (in %) lies within [`EXPECTED_EFFICIENCY_RANGE`], bounds included.
pub fn efficiency_within_expected_range(percent: f64) -> bool {
    EXPECTED_EFFICIENCY_RANGE.contains(&percent)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn discharge_monotonic_in_head(
            a in 1e-6_f64..1e-2,
            c in 0.1_f64..1.0,
            h in 0.1_f64..100.0,
            dh in 0.1_f64..10.0,
        ) {
            let q1 = sprinkler_discharge(a, c, h).unwrap();
            let q2 = sprinkler_discharge(a, c, h + dh).unwrap();
            prop_assert!(q2 > q1);
        }

        #[test]
        fn discharge_monotonic_in_area_and_coefficient(
            a in 1e-6_f64..1e-2,
            c in 0.1_f64..1.0,
            h in 0.1_f64..100.0,
        ) {
            let base = sprinkler_discharge(a, c, h).unwrap();
            prop_assert!(sprinkler_discharge(a * 1.5, c, h).unwrap() > base);
            prop_assert!(sprinkler_discharge(a, c * 1.5, h).unwrap() > base);
        }

        #[test]
        fn throw_radius_is_repeatable(
            d in 0.5_f64..20.0,
            h in 0.5_f64..60.0,
        ) {
            for t in SprinklerType::ALL {
                let r1 = jet_throw_radius(d, h, t).unwrap();
                let r2 = jet_throw_radius(d, h, t).unwrap();
                prop_assert_eq!(r1.to_bits(), r2.to_bits());
            }
        }
    }
}
