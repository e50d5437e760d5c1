use qiq_common::{Checklist, FailureRecord, LeaderboardEntry};
use serde::Serialize;

use super::ComplianceSummary;
use crate::fixtures::Fixtures;
use qiq_common::Sector;

/// Figures shown on the dashboard stat cards for one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub sector: Sector,
    pub pending_checklists: usize,
    pub open_issues: usize,
    pub compliance: ComplianceSummary,
    pub compliance_percentage: u32,
}

impl DashboardStats {
    pub fn compute(data: &Fixtures, sector: Sector) -> Self {
        let pending_checklists = pending(&data.checklists, sector).len();
        let open_issues = open_issues(&data.failures, sector).len();
        let compliance = ComplianceSummary::from_certifications(
            data.certifications.iter().filter(|c| c.sector == sector),
        );
        Self {
            sector,
            pending_checklists,
            open_issues,
            compliance,
            compliance_percentage: compliance.percentage(),
        }
    }
}

/// Checklists in `sector` that still need work.
pub fn pending(checklists: &[Checklist], sector: Sector) -> Vec<&Checklist> {
    checklists
        .iter()
        .filter(|c| c.sector == sector && c.status.is_open())
        .collect()
}

pub fn open_issues(failures: &[FailureRecord], sector: Sector) -> Vec<&FailureRecord> {
    failures
        .iter()
        .filter(|f| f.sector == sector && !f.is_resolved())
        .collect()
}

/// Leaderboard entry with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

impl RankedEntry {
    /// Medal for the podium places, plain rank number otherwise.
    pub fn medal(&self) -> String {
        match self.rank {
            1 => "🥇".to_string(),
            2 => "🥈".to_string(),
            3 => "🥉".to_string(),
            n => format!("#{n}"),
        }
    }
}

/// First `limit` entries in their given order.
pub fn top_entries(entries: &[LeaderboardEntry], limit: usize) -> Vec<RankedEntry> {
    entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, entry)| RankedEntry {
            rank: i + 1,
            entry: entry.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixtures() -> Fixtures {
        Fixtures::load(Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap())
    }

    #[test]
    fn food_dashboard_counts() {
        let stats = DashboardStats::compute(&fixtures(), Sector::Food);
        assert_eq!(stats.pending_checklists, 1);
        assert_eq!(stats.open_issues, 1);
        assert_eq!(stats.compliance.total, 2);
        assert_eq!(stats.compliance_percentage, 100);
    }

    #[test]
    fn textile_dashboard_counts() {
        let stats = DashboardStats::compute(&fixtures(), Sector::Textile);
        assert_eq!(stats.pending_checklists, 1);
        assert_eq!(stats.open_issues, 0);
        assert_eq!(stats.compliance.compliant, 0);
        assert_eq!(stats.compliance_percentage, 0);
    }

    #[test]
    fn top_entries_ranks_and_limits() {
        let data = fixtures();
        let top = top_entries(&data.leaderboard, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].entry.name, "Alex Johnson");
        assert_eq!(top[0].medal(), "🥇");
        assert_eq!(top[2].medal(), "🥉");
        assert_eq!(top[3].medal(), "#4");
        assert_eq!(
            top[1],
            RankedEntry {
                rank: 2,
                entry: data.leaderboard[1].clone(),
            }
        );
    }

    #[test]
    fn limit_beyond_length_returns_all() {
        let data = fixtures();
        assert_eq!(top_entries(&data.leaderboard, 100).len(), data.leaderboard.len());
        assert!(top_entries(&data.leaderboard, 0).is_empty());
    }
}
