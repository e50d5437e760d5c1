//! Record lookup by kind and id, and the detail panel each kind opens to.
//!
//! This is the target of a grid row click and of `quality-iq show`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use qiq_common::{
    Certification, Checklist, ChecklistItem, DomainError, FailureHotspot, FailureRecord, User,
    badge_label,
};
use serde::Serialize;

use crate::errors::LookupError;
use crate::fixtures::Fixtures;
use crate::ui::panels::DetailPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Checklist,
    Item,
    Failure,
    Hotspot,
    Certification,
    User,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checklist => "checklist",
            Self::Item => "item",
            Self::Failure => "failure",
            Self::Hotspot => "hotspot",
            Self::Certification => "certification",
            Self::User => "user",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checklist" | "checklists" => Ok(Self::Checklist),
            "item" | "items" => Ok(Self::Item),
            "failure" | "failures" => Ok(Self::Failure),
            "hotspot" | "hotspots" => Ok(Self::Hotspot),
            "certification" | "certifications" | "cert" => Ok(Self::Certification),
            "user" | "users" => Ok(Self::User),
            _ => Err(DomainError::InvalidValue {
                kind: "record kind",
                value: s.to_string(),
                expected: "checklist, item, failure, hotspot, certification, user",
            }),
        }
    }
}

/// A borrowed record of any kind. Serializes as the record itself.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum RecordRef<'a> {
    Checklist(&'a Checklist),
    Item(&'a ChecklistItem),
    Failure(&'a FailureRecord),
    Hotspot(&'a FailureHotspot),
    Certification(&'a Certification),
    User(&'a User),
}

pub fn find<'a>(data: &'a Fixtures, kind: RecordKind, id: &str) -> Result<RecordRef<'a>, LookupError> {
    let id = id.trim();
    let found = match kind {
        RecordKind::Checklist => data.checklist(id).map(RecordRef::Checklist),
        RecordKind::Item => data.checklist_item(id).map(RecordRef::Item),
        RecordKind::Failure => data.failure(id).map(RecordRef::Failure),
        RecordKind::Hotspot => data.hotspot(id).map(RecordRef::Hotspot),
        RecordKind::Certification => data.certification(id).map(RecordRef::Certification),
        RecordKind::User => data.user(id).map(RecordRef::User),
    };
    found.ok_or_else(|| LookupError::UnknownRecord {
        kind: kind.as_str(),
        id: id.to_string(),
    })
}

fn date(t: DateTime<Utc>, format: &str) -> String {
    t.format(format).to_string()
}

fn item_title(data: &Fixtures, id: &str) -> String {
    data.checklist_item(id)
        .map(|i| format!("{} ({})", i.title, i.id))
        .unwrap_or_else(|| id.to_string())
}

impl RecordRef<'_> {
    pub fn panel(&self, data: &Fixtures, date_format: &str) -> DetailPanel {
        match self {
            Self::Checklist(c) => checklist_panel(c, data, date_format),
            Self::Item(i) => item_panel(i),
            Self::Failure(f) => failure_panel(f, data, date_format),
            Self::Hotspot(h) => hotspot_panel(h, data),
            Self::Certification(c) => certification_panel(c, date_format),
            Self::User(u) => user_panel(u, date_format),
        }
    }
}

fn checklist_panel(c: &Checklist, data: &Fixtures, date_format: &str) -> DetailPanel {
    let completed_by = c
        .completed_by
        .as_deref()
        .map(|id| data.user(id).map(|u| u.name.clone()).unwrap_or_else(|| id.to_string()));
    let items = c
        .items
        .iter()
        .map(|i| {
            let required = if i.is_required { ", required" } else { "" };
            format!(
                "{} ({}, {:.0}% failure rate{})",
                i.title,
                i.category,
                i.failure_rate * 100.0,
                required
            )
        })
        .collect();

    DetailPanel::new(&c.title)
        .subtitle(format!("{} · {}", c.sector.title(), badge_label(c.status.as_str())))
        .field("ID", &c.id)
        .field("Status", c.status.progress_text())
        .field("Items", c.item_count_label())
        .field_opt("Completed", c.completed_at.map(|t| date(t, date_format)))
        .field_opt("Completed by", completed_by)
        .field("Next action", c.status.action_label())
        .body(&c.description)
        .list("Checklist items", items)
}

fn item_panel(i: &ChecklistItem) -> DetailPanel {
    DetailPanel::new(&i.title)
        .subtitle(format!("{} · {}", i.sector.title(), i.category))
        .field("ID", &i.id)
        .field("Failure rate", format!("{:.1}%", i.failure_rate * 100.0))
        .field("Required", if i.is_required { "yes" } else { "no" })
        .body(&i.description)
        .list("Certifications", i.certifications.clone())
}

fn failure_panel(f: &FailureRecord, data: &Fixtures, date_format: &str) -> DetailPanel {
    DetailPanel::new(format!("Failure {}", f.id))
        .subtitle(format!("{} · {} severity", f.sector.title(), f.severity.label()))
        .field("Status", f.status_label())
        .field("Reported", date(f.timestamp, date_format))
        .field("Checklist item", item_title(data, &f.checklist_item_id))
        .field_opt("Resolved", f.resolved_at.map(|t| date(t, date_format)))
        .field_opt("Resolution", f.resolution.clone())
        .body(&f.description)
        .list("Images", f.images.clone())
}

fn hotspot_panel(h: &FailureHotspot, data: &Fixtures) -> DetailPanel {
    let related = h
        .related_checklist_items
        .iter()
        .map(|id| item_title(data, id))
        .collect();
    DetailPanel::new(&h.area)
        .subtitle(h.sector.title())
        .field("Occurrences", h.occurrences.to_string())
        .field("Issue", &h.description)
        .field("Suggested fix", &h.suggested_fix)
        .list("Related checklist items", related)
}

fn certification_panel(c: &Certification, date_format: &str) -> DetailPanel {
    DetailPanel::new(&c.name)
        .subtitle(&c.description)
        .field("Status", badge_label(c.status.as_str()))
        .field("Sector", c.sector.title())
        .field_opt("Expires", c.expires_at.map(|t| date(t, date_format)))
        .list("Requirements", c.requirements.clone())
}

fn user_panel(u: &User, date_format: &str) -> DetailPanel {
    let badges = u
        .badges
        .iter()
        .map(|b| match b.earned_at {
            Some(t) => format!("{}: {} (earned {})", b.name, b.description, date(t, date_format)),
            None => format!("{}: {}", b.name, b.description),
        })
        .collect();
    DetailPanel::new(&u.name)
        .subtitle(format!("{} · {}", u.role.label(), u.department))
        .field("Checks", u.stats.checks_completed.to_string())
        .field("Defects found", u.stats.defects_found.to_string())
        .field("Cert. score", format!("{}%", u.stats.certification_score))
        .list("Badges", badges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixtures() -> Fixtures {
        Fixtures::load(Utc.with_ymd_and_hms(2025, 2, 20, 15, 0, 0).unwrap())
    }

    #[test]
    fn kinds_parse_singular_and_plural() {
        assert_eq!("checklist".parse::<RecordKind>().unwrap(), RecordKind::Checklist);
        assert_eq!("Hotspots".parse::<RecordKind>().unwrap(), RecordKind::Hotspot);
        assert_eq!("cert".parse::<RecordKind>().unwrap(), RecordKind::Certification);
        assert!("widget".parse::<RecordKind>().is_err());
    }

    #[test]
    fn unknown_id_is_a_lookup_error() {
        let data = fixtures();
        match find(&data, RecordKind::Failure, "fr9") {
            Err(LookupError::UnknownRecord { kind, id }) => {
                assert_eq!(kind, "failure");
                assert_eq!(id, "fr9");
            }
            other => panic!("Expected UnknownRecord, got {other:?}"),
        }
    }

    #[test]
    fn checklist_panel_names_the_completing_user() {
        let data = fixtures();
        let record = find(&data, RecordKind::Checklist, "cl1").unwrap();
        let panel = record.panel(&data, "%Y-%m-%d");
        assert_eq!(panel.title, "Daily Food Safety Inspection");
        assert!(panel.fields.contains(&("Completed by".to_string(), "Morgan Chen".to_string())));
        assert!(panel.fields.contains(&("Completed".to_string(), "2025-02-19".to_string())));
        assert_eq!(panel.lists[0].1.len(), 3);
    }

    #[test]
    fn open_failure_panel_omits_resolution() {
        let data = fixtures();
        let panel = find(&data, RecordKind::Failure, "fr1").unwrap().panel(&data, "%Y-%m-%d");
        assert!(panel.fields.iter().all(|(label, _)| label != "Resolution"));
        assert!(
            panel
                .fields
                .contains(&("Checklist item".to_string(), "Packaging Seal Integrity (f2)".to_string()))
        );
    }

    #[test]
    fn record_ref_serializes_as_the_record() {
        let data = fixtures();
        let record = find(&data, RecordKind::Hotspot, "hs1").unwrap();
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["area"], "Packaging Line 3");
        assert_eq!(json["occurrences"], 12);
    }
}
