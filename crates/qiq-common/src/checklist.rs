use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, Sector};

/// A single inspection step that can appear in several checklists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sector: Sector,
    pub category: String,
    /// Historical failure rate in `0.0..=1.0`.
    pub failure_rate: f64,
    pub is_required: bool,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl ChecklistStatus {
    pub const ALL: [ChecklistStatus; 4] = [
        ChecklistStatus::Pending,
        ChecklistStatus::InProgress,
        ChecklistStatus::Completed,
        ChecklistStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Still waiting on an inspector: pending or in progress.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    /// Label of the card's call-to-action button.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Pending => "Start",
            Self::InProgress => "Continue",
            Self::Completed => "View",
            Self::Failed => "Review",
        }
    }

    pub fn progress_text(&self) -> &'static str {
        match self {
            Self::Pending => "Not started",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

impl FromStr for ChecklistStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(DomainError::invalid(
                "checklist status",
                s,
                "pending, in-progress, completed, failed",
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sector: Sector,
    pub items: Vec<ChecklistItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    pub status: ChecklistStatus,
}

impl Checklist {
    /// "3 items", "1 item".
    pub fn item_count_label(&self) -> String {
        let n = self.items.len();
        format!("{} item{}", n, if n == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist_with(items: usize) -> Checklist {
        let item = ChecklistItem {
            id: "f1".into(),
            title: "Temperature Control".into(),
            description: String::new(),
            sector: Sector::Food,
            category: "Storage".into(),
            failure_rate: 0.05,
            is_required: true,
            certifications: vec![],
        };
        Checklist {
            id: "cl".into(),
            title: "t".into(),
            description: "d".into(),
            sector: Sector::Food,
            items: vec![item; items],
            completed_at: None,
            completed_by: None,
            status: ChecklistStatus::Pending,
        }
    }

    #[test]
    fn item_count_label_pluralizes() {
        assert_eq!(checklist_with(1).item_count_label(), "1 item");
        assert_eq!(checklist_with(3).item_count_label(), "3 items");
        assert_eq!(checklist_with(0).item_count_label(), "0 items");
    }

    #[test]
    fn status_parses_both_separators() {
        assert_eq!(
            "in_progress".parse::<ChecklistStatus>().unwrap(),
            ChecklistStatus::InProgress
        );
        assert_eq!(
            "In-Progress".parse::<ChecklistStatus>().unwrap(),
            ChecklistStatus::InProgress
        );
        assert!("done".parse::<ChecklistStatus>().is_err());
    }

    #[test]
    fn open_statuses() {
        assert!(ChecklistStatus::Pending.is_open());
        assert!(ChecklistStatus::InProgress.is_open());
        assert!(!ChecklistStatus::Completed.is_open());
        assert!(!ChecklistStatus::Failed.is_open());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&ChecklistStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
