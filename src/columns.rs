//! Column sets for every grid the dashboard shows.
//!
//! Field columns are sortable by header click; derived columns (counts,
//! labels, actions) are display-only.

use qiq_common::{Certification, Checklist, FailureHotspot, FailureRecord, LeaderboardEntry};

use crate::grid::{Column, ColumnStyle};

/// Display knobs the column sets depend on.
#[derive(Debug, Clone)]
pub struct ColumnOptions {
    pub date_format: String,
    pub description_width: usize,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            date_format: crate::grid::DEFAULT_DATE_FORMAT.to_string(),
            description_width: 48,
        }
    }
}

pub fn checklist_columns(options: &ColumnOptions) -> Vec<Column<Checklist>> {
    let date_format = options.date_format.clone();
    vec![
        Column::field("ID", "id"),
        Column::field("Title", "title").with_style(ColumnStyle::Truncate(options.description_width)),
        Column::field("Status", "status").with_style(ColumnStyle::Badge),
        Column::derived("Items", |c: &Checklist| c.item_count_label()),
        Column::derived("Completed", move |c: &Checklist| {
            c.completed_at
                .map(|t| t.format(&date_format).to_string())
                .unwrap_or_else(|| c.status.progress_text().to_string())
        }),
        Column::derived("Action", |c: &Checklist| c.status.action_label().to_string()),
    ]
}

pub fn failure_columns(options: &ColumnOptions) -> Vec<Column<FailureRecord>> {
    vec![
        Column::derived("Severity", |f: &FailureRecord| f.severity.label().to_string())
            .with_style(ColumnStyle::Badge),
        Column::field("Description", "description")
            .with_style(ColumnStyle::Truncate(options.description_width)),
        Column::field("Date", "timestamp"),
        Column::derived("Status", |f: &FailureRecord| f.status_label().to_string())
            .with_style(ColumnStyle::Badge),
    ]
}

pub fn hotspot_columns(options: &ColumnOptions) -> Vec<Column<FailureHotspot>> {
    vec![
        Column::field("Area", "area"),
        Column::field("Description", "description")
            .with_style(ColumnStyle::Truncate(options.description_width)),
        Column::field("Occurrences", "occurrences").with_style(ColumnStyle::Numeric),
        Column::field("Suggested Fix", "suggested_fix")
            .with_style(ColumnStyle::Truncate(options.description_width)),
    ]
}

pub fn certification_columns() -> Vec<Column<Certification>> {
    vec![
        Column::field("Name", "name"),
        Column::field("Status", "status").with_style(ColumnStyle::Badge),
        Column::field("Expires", "expires_at"),
        Column::derived("Requirements", |c: &Certification| {
            c.requirements.len().to_string()
        })
        .with_style(ColumnStyle::Numeric),
    ]
}

pub fn leaderboard_columns() -> Vec<Column<LeaderboardEntry>> {
    vec![
        Column::field("Name", "name"),
        Column::field("Department", "department"),
        Column::field("Score", "score").with_style(ColumnStyle::Numeric),
        Column::derived("Badges", |e: &LeaderboardEntry| match e.badges {
            1 => "1 badge".to_string(),
            n => format!("{n} badges"),
        }),
    ]
}
