use std::borrow::Cow;

use thiserror::Error;

pub type SfResult<T> = Result<T, SfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: Cow<'static, str> },
}

impl SfError {
    pub fn invalid_arg(what: impl Into<Cow<'static, str>>) -> Self {
        SfError::InvalidArg { what: what.into() }
    }
}
