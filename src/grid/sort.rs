//! Sort state machine and value ordering for the data grid.

use std::cmp::Ordering;

use serde::Serialize;

use super::column::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Active sort column (by index into the column manifest) and direction.
///
/// States: no sort, or ascending/descending on one column. Only header
/// clicks move between them and there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortState {
    column: Option<usize>,
    direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction shown on `column`'s header, if it is the active one.
    pub fn indicator_for(&self, column: usize) -> Option<SortDirection> {
        (self.column == Some(column)).then_some(self.direction)
    }

    /// Header click: flip on the active column, otherwise activate ascending.
    pub fn toggle(&mut self, column: usize) {
        if self.column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Caseless-first string collation.
///
/// Strings are ordered by their lowercase form; strings equal under that
/// comparison are ordered lowercase-before-uppercase at the first differing
/// character, then by length. Accents are not folded.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary.then_with(|| {
        for (x, y) in a.chars().zip(b.chars()) {
            if x != y {
                return case_rank(x).cmp(&case_rank(y)).then(x.cmp(&y));
            }
        }
        a.chars().count().cmp(&b.chars().count())
    })
}

fn case_rank(c: char) -> u8 {
    if c.is_lowercase() { 0 } else { 1 }
}

// Mixed-kind columns are unsupported; ranking kinds keeps the order total.
fn kind_rank(value: &CellValue) -> u8 {
    match value {
        CellValue::Bool(_) => 0,
        CellValue::Integer(_) | CellValue::Float(_) => 1,
        CellValue::Timestamp(_) => 2,
        CellValue::Text(_) => 3,
    }
}

fn as_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Integer(n) => Some(*n as f64),
        CellValue::Float(f) => Some(*f),
        _ => None,
    }
}

/// Ascending order over optional cell values. Missing values sort last.
pub fn compare_values(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare_present(a, b),
    }
}

fn compare_present(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Text(x), CellValue::Text(y)) => collate(x, y),
        (CellValue::Integer(x), CellValue::Integer(y)) => x.cmp(y),
        (CellValue::Timestamp(x), CellValue::Timestamp(y)) => x.cmp(y),
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        _ => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => kind_rank(a).cmp(&kind_rank(b)),
        },
    }
}
