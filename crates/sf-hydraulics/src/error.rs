//! Error types for hydraulic formula evaluation.

use sf_core::error::SfError;
use thiserror::Error;

/// Errors that can occur while evaluating an irrigation formula.
///
/// There is a single kind: the caller supplied an argument for which the
/// formula is undefined (unknown sprinkler type, zero divisor, negative base
/// under a fractional power, non-finite input or result).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    #[error("Invalid argument in {function}: {reason}")]
    InvalidArgument {
        function: &'static str,
        reason: String,
    },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

impl HydraulicsError {
    pub fn invalid(function: &'static str, reason: impl Into<String>) -> Self {
        HydraulicsError::InvalidArgument {
            function,
            reason: reason.into(),
        }
    }

    /// Name of the formula that rejected its input.
    pub fn function(&self) -> &'static str {
        match self {
            HydraulicsError::InvalidArgument { function, .. } => function,
        }
    }
}

impl From<HydraulicsError> for SfError {
    fn from(e: HydraulicsError) -> Self {
        match e {
            HydraulicsError::InvalidArgument { function, reason } => {
                SfError::invalid_arg(format!("{function}: {reason}"))
            }
        }
    }
}
