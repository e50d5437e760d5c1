//! Section headings, stat cards and record detail panels.

use console::{Alignment, measure_text_width, pad_str, style};
use serde::Serialize;

const LABEL_WIDTH: usize = 14;
const DEFAULT_WRAP: usize = 72;

/// Bold heading with an optional icon prefix.
pub fn heading(icon: impl std::fmt::Display, title: &str) -> String {
    format!("\n{}{}", icon, style(title).bold().cyan())
}

/// A labelled figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub caption: String,
}

impl StatCard {
    pub fn new(title: &str, value: impl ToString, caption: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// Lay cards out side by side in boxes of equal width.
pub fn render_cards(cards: &[StatCard]) -> String {
    let width = cards
        .iter()
        .flat_map(|c| [&c.title, &c.value, &c.caption])
        .map(|s| measure_text_width(s))
        .max()
        .unwrap_or(0)
        + 2;
    let edge: Vec<String> = cards.iter().map(|_| "─".repeat(width)).collect();

    let row = |pick: &dyn Fn(&StatCard) -> String| -> String {
        let cells: Vec<String> = cards
            .iter()
            .map(|c| format!("│{}│", pad_str(&pick(c), width, Alignment::Center, None)))
            .collect();
        cells.join(" ")
    };

    let mut out = String::new();
    out.push_str(&edge.iter().map(|e| format!("┌{e}┐")).collect::<Vec<_>>().join(" "));
    out.push('\n');
    out.push_str(&row(&|c: &StatCard| style(&c.title).dim().to_string()));
    out.push('\n');
    out.push_str(&row(&|c: &StatCard| style(&c.value).bold().to_string()));
    out.push('\n');
    out.push_str(&row(&|c: &StatCard| c.caption.clone()));
    out.push('\n');
    out.push_str(&edge.iter().map(|e| format!("└{e}┘")).collect::<Vec<_>>().join(" "));
    out.push('\n');
    out
}

/// Everything about one record, as shown when its row is opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailPanel {
    pub title: String,
    pub subtitle: Option<String>,
    pub fields: Vec<(String, String)>,
    pub body: Option<String>,
    pub lists: Vec<(String, Vec<String>)>,
}

impl DetailPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, text: impl Into<String>) -> Self {
        self.subtitle = Some(text.into());
        self
    }

    pub fn field(mut self, label: &str, value: impl Into<String>) -> Self {
        self.fields.push((label.to_string(), value.into()));
        self
    }

    /// Add a field only when there is a value for it.
    pub fn field_opt(self, label: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.field(label, value),
            None => self,
        }
    }

    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.body = Some(text.into());
        self
    }

    pub fn list(mut self, label: &str, items: Vec<String>) -> Self {
        self.lists.push((label.to_string(), items));
        self
    }

    /// Render with prose wrapped to `width` columns (72 when `None`).
    pub fn render(&self, width: Option<usize>) -> String {
        let width = width.unwrap_or(DEFAULT_WRAP).max(LABEL_WIDTH + 10);
        let mut out = String::new();

        out.push_str(&style(&self.title).bold().to_string());
        out.push('\n');
        if let Some(subtitle) = &self.subtitle {
            out.push_str(&style(subtitle).dim().to_string());
            out.push('\n');
        }
        out.push_str(&"─".repeat(measure_text_width(&self.title).max(20)));
        out.push('\n');

        let value_width = width - LABEL_WIDTH - 1;
        let indent = " ".repeat(LABEL_WIDTH + 1);
        for (label, value) in &self.fields {
            let wrapped = textwrap::wrap(value, value_width);
            let label = pad_str(label, LABEL_WIDTH, Alignment::Left, None);
            for (i, line) in wrapped.iter().enumerate() {
                if i == 0 {
                    out.push_str(&format!("{} {}\n", style(&label).bold(), line));
                } else {
                    out.push_str(&format!("{indent}{line}\n"));
                }
            }
            if wrapped.is_empty() {
                out.push_str(&format!("{}\n", style(&label).bold()));
            }
        }

        if let Some(body) = &self.body {
            out.push('\n');
            out.push_str(&textwrap::fill(body, width));
            out.push('\n');
        }

        for (label, items) in &self.lists {
            out.push('\n');
            out.push_str(&format!("{}\n", style(label).bold().underlined()));
            if items.is_empty() {
                out.push_str(&format!("  {}\n", style("none").dim()));
            }
            let options = textwrap::Options::new(width)
                .initial_indent("  • ")
                .subsequent_indent("    ");
            for item in items {
                out.push_str(&textwrap::fill(item, &options));
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).into_owned()
    }

    #[test]
    fn cards_sit_on_one_row() {
        let text = plain(&render_cards(&[
            StatCard::new("Pending", 2, "checklists"),
            StatCard::new("Open Issues", 1, "failures"),
        ]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Pending") && lines[1].contains("Open Issues"));
        assert_eq!(lines[0].matches('┌').count(), 2);
    }

    #[test]
    fn long_fields_wrap_under_the_value_column() {
        let panel = DetailPanel::new("Color bleeding")
            .field("Description", "word ".repeat(30).trim().to_string());
        let text = plain(&panel.render(Some(40)));
        let lines: Vec<&str> = text.lines().skip(2).collect();
        assert!(lines.len() > 1);
        assert!(lines[1].starts_with(&" ".repeat(LABEL_WIDTH + 1)));
        assert!(lines.iter().all(|l| measure_text_width(l) <= 40));
    }

    #[test]
    fn empty_list_says_none() {
        let panel = DetailPanel::new("Morgan").list("Badges", vec![]);
        let text = plain(&panel.render(None));
        assert!(text.contains("Badges"));
        assert!(text.contains("none"));
    }

    #[test]
    fn optional_fields_are_skipped() {
        let panel = DetailPanel::new("x")
            .field_opt("Resolved", None)
            .field_opt("Resolution", Some("done".into()));
        assert_eq!(panel.fields, vec![("Resolution".to_string(), "done".to_string())]);
    }
}
