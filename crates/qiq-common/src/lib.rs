//! Shared domain types for the Quality IQ dashboard.
//!
//! Everything here is plain data: sectors, inspection checklists, failure
//! records, certifications and the chart inputs the analytics layer consumes.
//! Status-like enums follow the same shape throughout: a `snake`/`kebab`
//! wire name via [`as_str`](Sector::as_str), a matching `FromStr`, and a
//! human-readable label for badges.

pub mod certification;
pub mod chart;
pub mod checklist;
pub mod failure;
pub mod sector;
pub mod user;

pub use certification::{Certification, CertificationStatus};
pub use chart::{HeatmapCell, TrendSeries};
pub use checklist::{Checklist, ChecklistItem, ChecklistStatus};
pub use failure::{FailureHotspot, FailureRecord, Severity};
pub use sector::Sector;
pub use user::{Badge, LeaderboardEntry, Role, User, UserStats};

use thiserror::Error;

/// Errors raised while parsing domain values from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid {kind} '{value}'. Valid values: {expected}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl DomainError {
    pub(crate) fn invalid(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Turn a kebab-case wire name into a badge label: `"at-risk"` -> `"At Risk"`.
pub fn badge_label(wire: &str) -> String {
    wire.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_label_splits_and_capitalizes() {
        assert_eq!(badge_label("in-progress"), "In Progress");
        assert_eq!(badge_label("non-compliant"), "Non Compliant");
        assert_eq!(badge_label("pending"), "Pending");
        assert_eq!(badge_label(""), "");
    }

    #[test]
    fn domain_error_names_the_expected_values() {
        let err = DomainError::invalid("sector", "metal", "food, textile");
        let msg = err.to_string();
        assert!(msg.contains("metal"));
        assert!(msg.contains("food, textile"));
    }
}
