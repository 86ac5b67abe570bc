//! sf-core: shared foundation for sprinkflow.
//!
//! Contains:
//! - units (uom SI types + constructors for irrigation quantities)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{SfError, SfResult};
pub use numeric::*;
pub use units::*;
