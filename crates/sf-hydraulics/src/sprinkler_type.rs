//! Sprinkler mechanism kinds.

use std::fmt;

use crate::error::HydraulicsError;

/// Sprinkler mechanism, which selects the throw-radius correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SprinklerType {
    /// Fixed (static) sprinkler
    #[default]
    Fixed,
    /// Rotary (impact or gear-driven) sprinkler
    Rotary,
}

impl SprinklerType {
    pub const ALL: [SprinklerType; 2] = [SprinklerType::Fixed, SprinklerType::Rotary];

    pub fn as_str(self) -> &'static str {
        match self {
            SprinklerType::Fixed => "fixed",
            SprinklerType::Rotary => "rotary",
        }
    }
}

impl fmt::Display for SprinklerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SprinklerType {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" | "fixo" | "static" => Ok(SprinklerType::Fixed),
            "rotary" | "rotativo" | "rotating" => Ok(SprinklerType::Rotary),
            _ => {
                tracing::debug!(value = s, "unknown sprinkler type");
                Err(HydraulicsError::invalid(
                    "jet_throw_radius",
                    format!("sprinkler type \"{s}\" is not one of the accepted values (fixed, rotary)"),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fixed() {
        assert_eq!(SprinklerType::default(), SprinklerType::Fixed);
    }

    #[test]
    fn parse_accepts_both_languages() {
        assert_eq!("fixo".parse::<SprinklerType>().unwrap(), SprinklerType::Fixed);
        assert_eq!(" Rotativo ".parse::<SprinklerType>().unwrap(), SprinklerType::Rotary);
        assert_eq!("FIXED".parse::<SprinklerType>().unwrap(), SprinklerType::Fixed);
        assert_eq!("rotary".parse::<SprinklerType>().unwrap(), SprinklerType::Rotary);
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "pivot".parse::<SprinklerType>().unwrap_err();
        assert_eq!(err.function(), "jet_throw_radius");
        assert!(err.to_string().contains("\"pivot\""));
    }

    #[test]
    fn display_round_trips() {
        for t in SprinklerType::ALL {
            assert_eq!(t.to_string().parse::<SprinklerType>().unwrap(), t);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&SprinklerType::Rotary).unwrap();
        assert_eq!(json, "\"rotary\"");
    }
}
