//! Plain-text rendering of a [`GridView`] for the terminal.

use console::{Alignment, measure_text_width, pad_str, style, truncate_str};

use super::{ColumnStyle, GridView, HeaderView, RowView};
use crate::ui::badges::paint_status;

const GAP: &str = "  ";
const MIN_COLUMN_WIDTH: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Total width budget; the widest clippable column shrinks to fit.
    pub max_width: Option<usize>,
}

impl RenderOptions {
    /// Size to the attached terminal, if there is one.
    pub fn for_terminal() -> Self {
        let max_width = terminal_size::terminal_size().map(|(w, _)| usize::from(w.0));
        Self { max_width }
    }
}

fn header_text(header: &HeaderView) -> String {
    match header.sort {
        Some(direction) => format!("{} {}", header.label, direction.indicator()),
        None => header.label.clone(),
    }
}

fn clip(cell: &str, column_style: ColumnStyle) -> String {
    match column_style {
        ColumnStyle::Truncate(width) => truncate_str(cell, width, "...").into_owned(),
        _ => cell.to_string(),
    }
}

fn fit_to_width(widths: &mut [usize], headers: &[HeaderView], prefix: usize, max: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    let total = prefix + gaps + widths.iter().sum::<usize>();
    if total <= max {
        return;
    }
    let overflow = total - max;
    let widest = widths
        .iter()
        .enumerate()
        .filter(|(i, _)| !matches!(headers[*i].style, ColumnStyle::Numeric))
        .max_by_key(|(_, w)| **w)
        .map(|(i, _)| i);
    if let Some(i) = widest {
        widths[i] = widths[i].saturating_sub(overflow).max(MIN_COLUMN_WIDTH);
    }
}

/// Render the grid as aligned text lines.
///
/// Sortable headers are underlined; the active one carries an arrow.
/// Interactive rows are prefixed with their 1-based number so a caller can
/// refer to them.
pub fn render_text(view: &GridView, options: &RenderOptions) -> String {
    let headers: Vec<String> = view.headers.iter().map(header_text).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();

    let interactive = view
        .rows
        .iter()
        .any(|r| matches!(r, RowView::Data { interactive: true, .. }));
    let number_width = if interactive {
        format!("[{}] ", view.data_row_count()).len()
    } else {
        0
    };

    let rows: Vec<Option<Vec<String>>> = view
        .rows
        .iter()
        .map(|r| match r {
            RowView::Data { cells, .. } => Some(
                cells
                    .iter()
                    .zip(&view.headers)
                    .map(|(cell, header)| clip(cell, header.style))
                    .collect(),
            ),
            RowView::Placeholder { .. } => None,
        })
        .collect();

    for cells in rows.iter().flatten() {
        for (i, cell) in cells.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(measure_text_width(cell));
            }
        }
    }

    if let Some(max) = options.max_width {
        fit_to_width(&mut widths, &view.headers, number_width, max);
    }

    let mut out = String::new();
    let pad = " ".repeat(number_width);

    let header_line: Vec<String> = headers
        .iter()
        .zip(&view.headers)
        .zip(&widths)
        .map(|((text, header), width)| {
            let padded = pad_str(text, *width, align(header.style), Some("...")).into_owned();
            if header.sortable {
                style(padded).bold().underlined().to_string()
            } else {
                style(padded).bold().to_string()
            }
        })
        .collect();
    out.push_str(&pad);
    out.push_str(&header_line.join(GAP));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&pad);
    out.push_str(&rule.join(GAP));
    out.push('\n');

    let mut number = 0;
    for (row, cells) in view.rows.iter().zip(&rows) {
        match (row, cells) {
            (RowView::Data { interactive, .. }, Some(cells)) => {
                number += 1;
                if *interactive {
                    let label = format!("[{}]", number);
                    out.push_str(&pad_str(&label, number_width, Alignment::Left, None));
                }
                let line: Vec<String> = cells
                    .iter()
                    .zip(&view.headers)
                    .zip(&widths)
                    .map(|((cell, header), width)| {
                        let padded =
                            pad_str(cell, *width, align(header.style), Some("...")).into_owned();
                        match header.style {
                            ColumnStyle::Badge => paint_status(cell, &padded),
                            _ => padded,
                        }
                    })
                    .collect();
                out.push_str(line.join(GAP).trim_end());
                out.push('\n');
            }
            (RowView::Placeholder { message }, _) => {
                out.push_str(&pad);
                out.push_str(&style(message).dim().italic().to_string());
                out.push('\n');
            }
            (RowView::Data { .. }, None) => {}
        }
    }

    out
}

fn align(column_style: ColumnStyle) -> Alignment {
    match column_style {
        ColumnStyle::Numeric => Alignment::Right,
        _ => Alignment::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SortDirection;

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).into_owned()
    }

    fn header(label: &str, sortable: bool, sort: Option<SortDirection>, style: ColumnStyle) -> HeaderView {
        HeaderView {
            label: label.to_string(),
            sortable,
            sort,
            style,
        }
    }

    fn data(key: &str, cells: &[&str], interactive: bool) -> RowView {
        RowView::Data {
            key: key.to_string(),
            cells: cells.iter().map(|c| c.to_string()).collect(),
            interactive,
        }
    }

    #[test]
    fn active_header_shows_direction_arrow() {
        let view = GridView {
            headers: vec![
                header("Title", true, Some(SortDirection::Descending), ColumnStyle::Plain),
                header("Items", false, None, ColumnStyle::Plain),
            ],
            rows: vec![data("a", &["Seal check", "3 items"], false)],
        };
        let text = plain(&render_text(&view, &RenderOptions::default()));
        let first = text.lines().next().unwrap();
        assert!(first.contains("Title ↓"));
        assert!(!first.contains("Items ↑"));
        assert!(text.contains("Seal check"));
    }

    #[test]
    fn placeholder_row_is_rendered() {
        let view = GridView {
            headers: vec![header("Title", true, None, ColumnStyle::Plain)],
            rows: vec![RowView::Placeholder {
                message: "No data available".to_string(),
            }],
        };
        let text = plain(&render_text(&view, &RenderOptions::default()));
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().last().unwrap().contains("No data available"));
    }

    #[test]
    fn truncate_style_clips_long_cells() {
        let long = "Packaging seals showing inconsistent closure on batch #45862";
        let view = GridView {
            headers: vec![header("Description", true, None, ColumnStyle::Truncate(20))],
            rows: vec![data("fr1", &[long], false)],
        };
        let text = plain(&render_text(&view, &RenderOptions::default()));
        let row = text.lines().nth(2).unwrap();
        assert!(row.ends_with("..."));
        assert!(measure_text_width(row) <= 20);
    }

    #[test]
    fn interactive_rows_are_numbered() {
        let view = GridView {
            headers: vec![header("ID", true, None, ColumnStyle::Plain)],
            rows: vec![data("a", &["a"], true), data("b", &["b"], true)],
        };
        let text = plain(&render_text(&view, &RenderOptions::default()));
        assert!(text.contains("[1] a"));
        assert!(text.contains("[2] b"));
    }

    #[test]
    fn max_width_shrinks_widest_column() {
        let view = GridView {
            headers: vec![
                header("ID", true, None, ColumnStyle::Plain),
                header("Description", true, None, ColumnStyle::Plain),
            ],
            rows: vec![data("a", &["a", &"x".repeat(80)], false)],
        };
        let options = RenderOptions { max_width: Some(40) };
        let text = plain(&render_text(&view, &options));
        for line in text.lines() {
            assert!(measure_text_width(line) <= 40, "line too wide: {line}");
        }
    }
}
