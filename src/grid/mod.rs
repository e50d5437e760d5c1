//! Generic sortable data grid.
//!
//! A [`DataGrid`] owns a column manifest, the key field name, its
//! [`SortState`] and an optional row-click handler. Records are supplied on
//! every call and never mutated: [`DataGrid::sorted`] derives an ordered
//! view of borrowed records, and [`DataGrid::render`] turns that view into a
//! [`GridView`] that the text renderer or a serializer can consume.
//!
//! | Event                 | Effect                                           |
//! |-----------------------|--------------------------------------------------|
//! | header click (field)  | activate ascending, or flip if already active    |
//! | header click (derived)| ignored                                          |
//! | row click             | handler invoked with the full record, if any     |

pub mod column;
pub mod render;
pub mod sort;

pub use column::{Accessor, CellValue, Column, ColumnStyle, DEFAULT_DATE_FORMAT, Record};
pub use render::{RenderOptions, render_text};
pub use sort::{SortDirection, SortState, collate, compare_values};

use serde::Serialize;

use crate::errors::GridError;

/// Placeholder text for an empty collection.
pub const NO_DATA: &str = "No data available";

/// Callback fired when a row is selected.
pub type RowHandler<'a, T> = Box<dyn FnMut(&T) + 'a>;

pub struct DataGrid<'a, T> {
    columns: Vec<Column<T>>,
    key_field: String,
    sort: SortState,
    on_row_click: Option<RowHandler<'a, T>>,
    empty_message: String,
    date_format: String,
}

impl<'a, T: Record> DataGrid<'a, T> {
    pub fn new(columns: Vec<Column<T>>, key_field: impl Into<String>) -> Self {
        Self {
            columns,
            key_field: key_field.into(),
            sort: SortState::new(),
            on_row_click: None,
            empty_message: NO_DATA.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Make rows interactive. Without a handler rows carry no affordance.
    pub fn with_row_click(mut self, handler: impl FnMut(&T) + 'a) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn is_interactive(&self) -> bool {
        self.on_row_click.is_some()
    }

    /// Index of the column whose label matches, ignoring case.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        let wanted = label.trim();
        self.columns
            .iter()
            .position(|c| c.label.eq_ignore_ascii_case(wanted))
    }

    /// Labels of the columns a header click can sort by.
    pub fn sortable_labels(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_sortable())
            .map(|c| c.label.as_str())
            .collect()
    }

    /// Apply a header click. Returns `false` when the column is not
    /// sortable (or out of range) and the sort state is left untouched.
    pub fn click_header(&mut self, index: usize) -> bool {
        match self.columns.get(index) {
            Some(column) if column.is_sortable() => {
                self.sort.toggle(index);
                tracing::debug!(
                    column = %column.label,
                    direction = ?self.sort.direction(),
                    "grid sort changed"
                );
                true
            }
            Some(column) => {
                tracing::debug!(column = %column.label, "ignoring click on derived column");
                false
            }
            None => false,
        }
    }

    /// Apply a header click addressed by label.
    pub fn click_header_label(&mut self, label: &str) -> Result<(), GridError> {
        let Some(index) = self.column_index(label) else {
            return Err(GridError::UnknownColumn {
                column: label.to_string(),
                available: self
                    .columns
                    .iter()
                    .map(|c| c.label.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        };
        if self.click_header(index) {
            Ok(())
        } else {
            Err(GridError::NotSortable {
                column: self.columns[index].label.clone(),
                sortable: self.sortable_labels().join(", "),
            })
        }
    }

    /// Records in display order. Stable: ties keep their input order in
    /// both directions.
    pub fn sorted<'r>(&self, records: &'r [T]) -> Vec<&'r T> {
        let Some(column) = self.sort.column().and_then(|i| self.columns.get(i)) else {
            return records.iter().collect();
        };
        if !column.is_sortable() {
            return records.iter().collect();
        }

        let mut keyed: Vec<_> = records
            .iter()
            .map(|record| (column.sort_key(record), record))
            .collect();

        match self.sort.direction() {
            SortDirection::Ascending => {
                keyed.sort_by(|a, b| compare_values(a.0.as_ref(), b.0.as_ref()))
            }
            SortDirection::Descending => {
                keyed.sort_by(|a, b| compare_values(b.0.as_ref(), a.0.as_ref()))
            }
        }

        keyed.into_iter().map(|(_, record)| record).collect()
    }

    pub fn render(&self, records: &[T]) -> GridView {
        let headers = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| HeaderView {
                label: c.label.clone(),
                sortable: c.is_sortable(),
                sort: self.sort.indicator_for(i),
                style: c.style,
            })
            .collect();

        let rows = if records.is_empty() {
            vec![RowView::Placeholder {
                message: self.empty_message.clone(),
            }]
        } else {
            let interactive = self.is_interactive();
            self.sorted(records)
                .into_iter()
                .map(|record| RowView::Data {
                    key: record
                        .field(&self.key_field)
                        .map(|v| v.display_with(&self.date_format))
                        .unwrap_or_default(),
                    cells: self
                        .columns
                        .iter()
                        .map(|c| c.cell(record, &self.date_format))
                        .collect(),
                    interactive,
                })
                .collect()
        };

        GridView { headers, rows }
    }

    /// Select the row at `index` of the sorted view. Returns whether a
    /// handler was invoked.
    pub fn click_row(&mut self, records: &[T], index: usize) -> Result<bool, GridError> {
        let view = self.sorted(records);
        let Some(record) = view.get(index).copied() else {
            return Err(GridError::RowOutOfRange {
                row: index,
                count: view.len(),
            });
        };
        match self.on_row_click.as_mut() {
            Some(handler) => {
                handler(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub label: String,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
    pub style: ColumnStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowView {
    Data {
        key: String,
        cells: Vec<String>,
        interactive: bool,
    },
    Placeholder {
        message: String,
    },
}

/// Rendered grid: headers plus rows in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
}

impl GridView {
    pub fn data_row_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, RowView::Data { .. }))
            .count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, RowView::Placeholder { .. }))
            .count()
    }

    /// Row keys in display order.
    pub fn keys(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|r| match r {
                RowView::Data { key, .. } => Some(key.as_str()),
                RowView::Placeholder { .. } => None,
            })
            .collect()
    }

    /// Cells of one column in display order.
    pub fn column_cells(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|r| match r {
                RowView::Data { cells, .. } => cells.get(index).map(String::as_str),
                RowView::Placeholder { .. } => None,
            })
            .collect()
    }
}
