use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// One of the two manufacturing domains the dashboard partitions data by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    #[default]
    Food,
    Textile,
}

impl Sector {
    pub const ALL: [Sector; 2] = [Sector::Food, Sector::Textile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Textile => "textile",
        }
    }

    /// Title shown on sector headings, e.g. "Food Sector".
    pub fn title(&self) -> &'static str {
        match self {
            Self::Food => "Food Sector",
            Self::Textile => "Textile Sector",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "textile" => Ok(Self::Textile),
            _ => Err(DomainError::invalid("sector", s, "food, textile")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Food".parse::<Sector>().unwrap(), Sector::Food);
        assert_eq!(" textile ".parse::<Sector>().unwrap(), Sector::Textile);
        assert!("metal".parse::<Sector>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Sector::Textile).unwrap();
        assert_eq!(json, "\"textile\"");
    }
}
