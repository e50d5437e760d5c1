use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, Sector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationStatus {
    Compliant,
    AtRisk,
    NonCompliant,
}

impl CertificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::AtRisk => "at-risk",
            Self::NonCompliant => "non-compliant",
        }
    }
}

impl FromStr for CertificationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compliant" => Ok(Self::Compliant),
            "at-risk" | "at_risk" => Ok(Self::AtRisk),
            "non-compliant" | "non_compliant" => Ok(Self::NonCompliant),
            _ => Err(DomainError::invalid(
                "certification status",
                s,
                "compliant, at-risk, non-compliant",
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sector: Sector,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub status: CertificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Certification {
    /// Non-compliant certifications need a status update action.
    pub fn needs_attention(&self) -> bool {
        self.status != CertificationStatus::Compliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips() {
        for status in [
            CertificationStatus::Compliant,
            CertificationStatus::AtRisk,
            CertificationStatus::NonCompliant,
        ] {
            assert_eq!(status.as_str().parse::<CertificationStatus>().unwrap(), status);
        }
    }
}
