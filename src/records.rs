//! Field lookup for the domain entities, so the grid and filters can address
//! them by name.

use qiq_common::{
    Certification, Checklist, ChecklistItem, FailureHotspot, FailureRecord, LeaderboardEntry,
    Sector, User,
};

use crate::filters::Sectored;
use crate::grid::{CellValue, Record};

/// Field that carries the lifecycle status of each record kind.
pub const STATUS_FIELD: &str = "status";
pub const KEY_FIELD: &str = "id";

pub const CHECKLIST_TEXT_FIELDS: &[&str] = &["title", "description"];
pub const FAILURE_TEXT_FIELDS: &[&str] = &["description"];
pub const HOTSPOT_TEXT_FIELDS: &[&str] = &["area", "description"];
pub const CERTIFICATION_TEXT_FIELDS: &[&str] = &["name", "description"];

impl Record for Checklist {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "sector" => Some(self.sector.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "items" => Some(self.items.len().into()),
            "completed_at" => self.completed_at.map(CellValue::from),
            "completed_by" => self.completed_by.as_deref().map(CellValue::from),
            _ => None,
        }
    }
}

impl Record for ChecklistItem {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "sector" => Some(self.sector.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "failure_rate" => Some(self.failure_rate.into()),
            "is_required" => Some(self.is_required.into()),
            _ => None,
        }
    }
}

impl Record for FailureRecord {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "checklist_item_id" => Some(self.checklist_item_id.as_str().into()),
            "sector" => Some(self.sector.as_str().into()),
            "timestamp" => Some(self.timestamp.into()),
            "description" => Some(self.description.as_str().into()),
            "severity" => Some(self.severity.as_str().into()),
            "status" => {
                let status = if self.is_resolved() { "resolved" } else { "open" };
                Some(status.into())
            }
            "resolved_at" => self.resolved_at.map(CellValue::from),
            "resolution" => self.resolution.as_deref().map(CellValue::from),
            _ => None,
        }
    }
}

impl Record for Certification {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "sector" => Some(self.sector.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "requirements" => Some(self.requirements.len().into()),
            "expires_at" => self.expires_at.map(CellValue::from),
            _ => None,
        }
    }
}

impl Record for FailureHotspot {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "area" => Some(self.area.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "sector" => Some(self.sector.as_str().into()),
            "occurrences" => Some(self.occurrences.into()),
            "suggested_fix" => Some(self.suggested_fix.as_str().into()),
            _ => None,
        }
    }
}

impl Record for LeaderboardEntry {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "score" => Some(self.score.into()),
            "department" => Some(self.department.as_str().into()),
            "badges" => Some(self.badges.into()),
            _ => None,
        }
    }
}

impl Record for User {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            "checks_completed" => Some(self.stats.checks_completed.into()),
            "defects_found" => Some(self.stats.defects_found.into()),
            "certification_score" => Some(self.stats.certification_score.into()),
            _ => None,
        }
    }
}

macro_rules! impl_sectored {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sectored for $ty {
                fn sector(&self) -> Sector {
                    self.sector
                }
            }
        )*
    };
}

impl_sectored!(Checklist, ChecklistItem, FailureRecord, Certification, FailureHotspot);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{count_by_status, filter_by_sector, filter_by_text};
    use crate::fixtures::Fixtures;
    use chrono::{TimeZone, Utc};

    fn fixtures() -> Fixtures {
        Fixtures::load(Utc.with_ymd_and_hms(2025, 5, 14, 9, 30, 0).unwrap())
    }

    #[test]
    fn checklist_status_counts_use_wire_names() {
        let data = fixtures();
        let counts = count_by_status(&data.checklists, STATUS_FIELD);
        assert_eq!(counts.get("completed"), Some(&1));
        assert_eq!(counts.get("in-progress"), Some(&1));
        assert_eq!(counts.get("pending"), Some(&1));
        assert_eq!(counts.get("failed"), None);
    }

    #[test]
    fn failure_status_is_derived_from_resolution() {
        let data = fixtures();
        let counts = count_by_status(&data.failures, STATUS_FIELD);
        assert_eq!(counts.get("open"), Some(&1));
        assert_eq!(counts.get("resolved"), Some(&1));
    }

    #[test]
    fn hotspot_search_covers_area_and_description() {
        let data = fixtures();
        let by_area = filter_by_text(&data.hotspots, "line 3", HOTSPOT_TEXT_FIELDS);
        assert_eq!(by_area.len(), 1);
        let by_description = filter_by_text(&data.hotspots, "red dyes", HOTSPOT_TEXT_FIELDS);
        assert_eq!(by_description[0].id, "hs2");
    }

    #[test]
    fn failures_follow_their_item_sector() {
        let data = fixtures();
        let food = filter_by_sector(&data.failures, Sector::Food);
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].checklist_item_id, "f2");
    }

    #[test]
    fn optional_fields_are_missing_not_blank_strings() {
        let data = fixtures();
        let pending = data.checklist("cl3").unwrap();
        assert_eq!(pending.field("completed_at"), None);
        assert_eq!(pending.field("nonexistent"), None);
        assert_eq!(pending.field("items"), Some(CellValue::Integer(3)));
    }
}
