use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, Sector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::invalid(
                "severity",
                s,
                "low, medium, high, critical",
            )),
        }
    }
}

/// A logged quality defect against one checklist item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    pub id: String,
    pub checklist_item_id: String,
    /// Sector of the referenced checklist item.
    pub sector: Sector,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl FailureRecord {
    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_resolved() { "Resolved" } else { "Open" }
    }
}

/// A recurring failure location with a suggested remediation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureHotspot {
    pub id: String,
    pub area: String,
    pub description: String,
    pub sector: Sector,
    pub occurrences: u32,
    pub suggested_fix: String,
    #[serde(default)]
    pub related_checklist_items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_by_impact() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn status_label_follows_resolution() {
        let mut record = FailureRecord {
            id: "fr".into(),
            checklist_item_id: "f2".into(),
            sector: Sector::Food,
            timestamp: Utc::now(),
            description: "seal".into(),
            severity: Severity::Medium,
            images: vec![],
            resolved_at: None,
            resolution: None,
        };
        assert_eq!(record.status_label(), "Open");
        record.resolved_at = Some(Utc::now());
        assert_eq!(record.status_label(), "Resolved");
    }
}
