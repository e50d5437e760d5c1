//! Pure filter and aggregate helpers over in-memory collections.
//!
//! Callers compose them in order (sector, then text, then status) before
//! handing the result to a [`DataGrid`](crate::grid::DataGrid). None of them
//! keep state, so they are safe to call repeatedly with different arguments.

use std::collections::BTreeMap;

use qiq_common::Sector;
use serde::Serialize;

use crate::grid::Record;

/// Records partitioned by manufacturing sector.
pub trait Sectored {
    fn sector(&self) -> Sector;
}

/// Subset whose sector equals `sector`, in input order.
pub fn filter_by_sector<T: Sectored + Clone>(records: &[T], sector: Sector) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.sector() == sector)
        .cloned()
        .collect()
}

/// Case-insensitive substring match against any of `fields`.
///
/// An empty query matches everything. Fields the record does not have never
/// match.
pub fn filter_by_text<T: Record + Clone>(records: &[T], query: &str, fields: &[&str]) -> Vec<T> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            fields.iter().any(|field| {
                r.field(field)
                    .map(|v| v.to_string().to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

/// Records whose `status_field` equals `status`; `None` keeps everything.
pub fn filter_by_status<T: Record + Clone>(
    records: &[T],
    status_field: &str,
    status: Option<&str>,
) -> Vec<T> {
    let Some(wanted) = status else {
        return records.to_vec();
    };
    records
        .iter()
        .filter(|r| {
            r.field(status_field)
                .map(|v| v.to_string().eq_ignore_ascii_case(wanted))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Occurrences of each status value present. Absent statuses are omitted.
pub fn count_by_status<T: Record>(records: &[T], status_field: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in records.iter().filter_map(|r| r.field(status_field)) {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Page-level filter predicate state: sector, free text and optional status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordFilter {
    pub sector: Sector,
    pub query: String,
    pub status: Option<String>,
}

impl RecordFilter {
    pub fn new(sector: Sector) -> Self {
        Self {
            sector,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }

    /// Whether anything beyond the sector narrows the result.
    pub fn is_narrowed(&self) -> bool {
        !self.query.is_empty() || self.status.is_some()
    }

    /// Sector, then text over `text_fields`, then status over `status_field`.
    pub fn apply<T>(&self, records: &[T], text_fields: &[&str], status_field: &str) -> Vec<T>
    where
        T: Sectored + Record + Clone,
    {
        let by_sector = filter_by_sector(records, self.sector);
        let by_text = filter_by_text(&by_sector, &self.query, text_fields);
        filter_by_status(&by_text, status_field, self.status.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        sector: Sector,
        title: &'static str,
        status: &'static str,
    }

    impl Sectored for Item {
        fn sector(&self) -> Sector {
            self.sector
        }
    }

    impl Record for Item {
        fn field(&self, name: &str) -> Option<CellValue> {
            match name {
                "id" => Some(self.id.into()),
                "title" => Some(self.title.into()),
                "status" => Some(self.status.into()),
                _ => None,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "1", sector: Sector::Food, title: "Seal Integrity", status: "pending" },
            Item { id: "2", sector: Sector::Textile, title: "Colour Fastness", status: "completed" },
            Item { id: "3", sector: Sector::Food, title: "Allergen Control", status: "pending" },
            Item { id: "4", sector: Sector::Textile, title: "Seam Strength", status: "failed" },
        ]
    }

    fn ids(records: &[Item]) -> Vec<&'static str> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn sector_filter_preserves_order() {
        assert_eq!(ids(&filter_by_sector(&items(), Sector::Food)), vec!["1", "3"]);
        assert_eq!(ids(&filter_by_sector(&items(), Sector::Textile)), vec!["2", "4"]);
    }

    #[test]
    fn sector_filter_is_idempotent() {
        let once = filter_by_sector(&items(), Sector::Food);
        let twice = filter_by_sector(&once, Sector::Food);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(filter_by_text(&items(), "", &["title"]), items());
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        assert_eq!(ids(&filter_by_text(&items(), "SEA", &["title"])), vec!["1", "4"]);
        assert_eq!(ids(&filter_by_text(&items(), "fastness", &["title"])), vec!["2"]);
    }

    #[test]
    fn text_filter_checks_every_listed_field() {
        assert_eq!(ids(&filter_by_text(&items(), "fail", &["title", "status"])), vec!["4"]);
        assert!(filter_by_text(&items(), "fail", &["title"]).is_empty());
        assert!(filter_by_text(&items(), "seal", &["missing"]).is_empty());
    }

    #[test]
    fn count_by_status_of_empty_is_empty() {
        let empty: Vec<Item> = Vec::new();
        assert!(count_by_status(&empty, "status").is_empty());
    }

    #[test]
    fn count_by_status_omits_absent_statuses() {
        let records: Vec<Item> = items().into_iter().filter(|i| i.id != "4").collect();
        let counts = count_by_status(&records, "status");
        let expected: BTreeMap<String, usize> =
            [("pending".to_string(), 2), ("completed".to_string(), 1)].into_iter().collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn status_filter_none_keeps_all() {
        assert_eq!(filter_by_status(&items(), "status", None), items());
        assert_eq!(ids(&filter_by_status(&items(), "status", Some("Pending"))), vec!["1", "3"]);
    }

    #[test]
    fn record_filter_composes_in_order() {
        let filter = RecordFilter::new(Sector::Textile)
            .with_query("s")
            .with_status(Some("failed".to_string()));
        assert!(filter.is_narrowed());
        assert_eq!(ids(&filter.apply(&items(), &["title"], "status")), vec!["4"]);

        let plain = RecordFilter::new(Sector::Food);
        assert!(!plain.is_narrowed());
        assert_eq!(ids(&plain.apply(&items(), &["title"], "status")), vec!["1", "3"]);
    }
}
