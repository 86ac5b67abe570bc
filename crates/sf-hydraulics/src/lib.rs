//! sf-hydraulics: closed-form hydraulics for sizing sprinkler irrigation systems.
//!
//! Provides:
//! - Sprinkler formulas: discharge, jet throw radius, application intensity, efficiency
//! - Lateral-line formulas: Hazen-Williams head loss, allowable head loss
//! - Unit-safe (`uom`) wrappers in [`typed`]
//!
//! Every function is pure and returns either a value or a
//! [`HydraulicsError::InvalidArgument`] naming the formula and the argument
//! that made it undefined. Units are not converted by the scalar functions;
//! the caller supplies values in the units documented on each argument.
//!
//! # Example
//!
//! ```
//! use sf_hydraulics::{SprinklerType, application_intensity, jet_throw_radius};
//!
//! let radius = jet_throw_radius(4.0, 25.0, SprinklerType::Fixed).unwrap();
//! assert!(radius > 0.0);
//!
//! let intensity = application_intensity(10.0, 5.0, 4.0).unwrap();
//! assert_eq!(intensity, 1800.0);
//! ```

pub mod common;
pub mod error;
pub mod lateral;
pub mod sprinkler;
pub mod sprinkler_type;
pub mod typed;

// Re-exports
pub use error::{HydraulicsError, HydraulicsResult};
pub use lateral::{
    ALLOWABLE_LOSS_FRACTION, allowable_head_loss, head_loss_hazen_williams,
    lateral_within_allowance,
};
pub use sprinkler::{
    EXPECTED_EFFICIENCY_RANGE, application_intensity, efficiency,
    efficiency_within_expected_range, jet_throw_radius, jet_throw_radius_by_name,
    sprinkler_discharge,
};
pub use sprinkler_type::SprinklerType;
