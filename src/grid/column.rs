//! Column manifest types: how a grid pulls one displayed attribute out of a record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Default rendering for timestamp cells.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A primitive, comparable value read from a record field.
///
/// Only these kinds take part in sorting. Anything richer has to be reduced
/// to one of them by the record, or exposed through a derived accessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
    Bool(bool),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn display_with(&self, date_format: &str) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Timestamp(ts) => ts.format(date_format).to_string(),
            Self::Bool(b) => (if *b { "yes" } else { "no" }).to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(DEFAULT_DATE_FORMAT))
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// A uniform entity the grid can display.
///
/// `field` is total over the record type: an unknown name returns `None`
/// and renders as an empty cell.
pub trait Record {
    fn field(&self, name: &str) -> Option<CellValue>;
}

/// How a column reads its cell.
pub enum Accessor<T> {
    /// Named field looked up through [`Record::field`]. Sortable.
    Field(String),
    /// Formatting function over the whole record. Never sortable.
    Derived(Box<dyn Fn(&T) -> String>),
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Presentation hint carried by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStyle {
    #[default]
    Plain,
    /// Clip cells to at most this many terminal columns.
    Truncate(usize),
    /// Colour the cell as a status badge.
    Badge,
    /// Right-align, for counts and scores.
    Numeric,
}

#[derive(Debug)]
pub struct Column<T> {
    pub label: String,
    pub accessor: Accessor<T>,
    pub style: ColumnStyle,
}

impl<T> Column<T> {
    pub fn field(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            accessor: Accessor::Field(name.into()),
            style: ColumnStyle::Plain,
        }
    }

    pub fn derived(label: impl Into<String>, f: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            label: label.into(),
            accessor: Accessor::Derived(Box::new(f)),
            style: ColumnStyle::Plain,
        }
    }

    pub fn with_style(mut self, style: ColumnStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_sortable(&self) -> bool {
        matches!(self.accessor, Accessor::Field(_))
    }
}

impl<T: Record> Column<T> {
    /// Raw value behind the cell, or `None` for derived columns and missing fields.
    pub fn sort_key(&self, record: &T) -> Option<CellValue> {
        match &self.accessor {
            Accessor::Field(name) => record.field(name),
            Accessor::Derived(_) => None,
        }
    }

    /// Display text for the cell. Missing fields render blank.
    pub fn cell(&self, record: &T, date_format: &str) -> String {
        match &self.accessor {
            Accessor::Field(name) => record
                .field(name)
                .map(|v| v.display_with(date_format))
                .unwrap_or_default(),
            Accessor::Derived(f) => f(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Part {
        name: &'static str,
        qty: u32,
    }

    impl Record for Part {
        fn field(&self, name: &str) -> Option<CellValue> {
            match name {
                "name" => Some(self.name.into()),
                "qty" => Some(self.qty.into()),
                _ => None,
            }
        }
    }

    #[test]
    fn field_columns_are_sortable_derived_are_not() {
        let by_name: Column<Part> = Column::field("Name", "name");
        let label: Column<Part> = Column::derived("Label", |p: &Part| p.name.to_uppercase());
        assert!(by_name.is_sortable());
        assert!(!label.is_sortable());
    }

    #[test]
    fn missing_field_renders_blank() {
        let part = Part { name: "bolt", qty: 4 };
        let col: Column<Part> = Column::field("Colour", "colour");
        assert_eq!(col.cell(&part, DEFAULT_DATE_FORMAT), "");
        assert_eq!(col.sort_key(&part), None);
    }

    #[test]
    fn derived_column_formats_whole_record() {
        let part = Part { name: "bolt", qty: 4 };
        let col: Column<Part> =
            Column::derived("Summary", |p: &Part| format!("{} x{}", p.name, p.qty));
        assert_eq!(col.cell(&part, DEFAULT_DATE_FORMAT), "bolt x4");
        assert_eq!(col.sort_key(&part), None);
    }

    #[test]
    fn timestamps_use_the_supplied_format() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let value = CellValue::Timestamp(ts);
        assert_eq!(value.display_with("%d/%m/%Y"), "09/03/2024");
        assert_eq!(value.to_string(), "2024-03-09");
    }

    #[test]
    fn float_and_bool_display() {
        assert_eq!(CellValue::Float(0.05).to_string(), "0.05");
        assert_eq!(CellValue::Bool(true).to_string(), "yes");
    }
}
