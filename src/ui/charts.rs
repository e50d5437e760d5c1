//! Text renderings of the dashboard charts.

use console::{Alignment, Style, measure_text_width, pad_str};

use crate::analytics::{ComplianceHealth, ComplianceSummary, HeatLevel, Heatmap, TrendChart};

const BAR_WIDTH: usize = 40;
const RING_WIDTH: usize = 20;
const CELL_WIDTH: usize = 5;

fn level_style(level: HeatLevel) -> Style {
    match level {
        HeatLevel::Minimal => Style::new().on_color256(194).black(),
        HeatLevel::Low => Style::new().on_color256(229).black(),
        HeatLevel::Moderate => Style::new().on_color256(221).black(),
        HeatLevel::High => Style::new().on_color256(208).black(),
        HeatLevel::Severe => Style::new().on_color256(160).white(),
    }
}

fn health_style(health: ComplianceHealth) -> Style {
    match health {
        ComplianceHealth::Good => Style::new().green(),
        ComplianceHealth::Warning => Style::new().yellow(),
        ComplianceHealth::Critical => Style::new().red(),
    }
}

/// Categories across, weekdays down. Weekday labels are shortened to three letters.
pub fn render_heatmap(map: &Heatmap) -> String {
    if map.is_empty() {
        return String::new();
    }
    let label_width = map
        .y_labels
        .iter()
        .map(|l| short_day(l).len())
        .max()
        .unwrap_or(0);
    let col_width = map
        .x_labels
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0)
        .max(CELL_WIDTH);

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for x in &map.x_labels {
        out.push(' ');
        out.push_str(&pad_str(x, col_width, Alignment::Center, None));
    }
    out.push('\n');

    for (y, row) in map.y_labels.iter().zip(&map.values) {
        out.push_str(&pad_str(short_day(y), label_width, Alignment::Left, None));
        for value in row {
            let text = value.to_string();
            let cell = pad_str(&text, col_width, Alignment::Center, None);
            out.push(' ');
            out.push_str(&level_style(map.level(*value)).apply_to(cell).to_string());
        }
        out.push('\n');
    }

    let legend: Vec<String> = HeatLevel::ALL
        .iter()
        .map(|l| level_style(*l).apply_to(format!(" {} ", l.as_str())).to_string())
        .collect();
    out.push_str(&legend.join(" "));
    out.push('\n');
    out
}

fn short_day(label: &str) -> &str {
    label.get(..3).unwrap_or(label)
}

/// Horizontal bars grouped by period, one bar per series.
pub fn render_trend(chart: &TrendChart) -> String {
    let heights = chart.bar_heights();
    let series_width = chart
        .series
        .iter()
        .map(|s| measure_text_width(&s.label))
        .max()
        .unwrap_or(0);
    let palette = [Style::new().cyan(), Style::new().magenta()];

    let mut out = String::new();
    for (period, label) in chart.labels.iter().enumerate() {
        out.push_str(&format!("{label}\n"));
        for (i, series) in chart.series.iter().enumerate() {
            let pct = heights
                .get(i)
                .and_then(|h| h.get(period))
                .copied()
                .unwrap_or(0.0);
            let cells = (pct / 100.0 * BAR_WIDTH as f64).round() as usize;
            let bar = palette[i % palette.len()].apply_to("█".repeat(cells));
            out.push_str(&format!(
                "  {} {} {}\n",
                pad_str(&series.label, series_width, Alignment::Left, None),
                bar,
                chart.value(i, period)
            ));
        }
    }
    out
}

/// One-line compliance gauge, e.g. `[██████████░░░░░░░░░░] 50% (1/2 compliant)`.
pub fn render_compliance(summary: &ComplianceSummary) -> String {
    let pct = summary.percentage();
    let filled = (pct as usize * RING_WIDTH + 50) / 100;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(RING_WIDTH.saturating_sub(filled))
    );
    let style = health_style(summary.health());
    format!(
        "[{}] {} ({}/{} compliant)",
        style.apply_to(bar),
        style.apply_to(format!("{pct}%")).bold(),
        summary.compliant,
        summary.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use qiq_common::{HeatmapCell, TrendSeries};

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).into_owned()
    }

    #[test]
    fn heatmap_lists_every_axis_label() {
        let map = Heatmap::build(&[
            HeatmapCell::new("Packaging", "Monday", 3),
            HeatmapCell::new("Storage", "Tuesday", 1),
        ]);
        let text = plain(&render_heatmap(&map));
        assert!(text.lines().next().unwrap().contains("Packaging"));
        assert!(text.contains("Mon"));
        assert!(text.contains("Tue"));
        assert!(text.contains("severe"));
    }

    #[test]
    fn empty_heatmap_renders_nothing() {
        assert_eq!(render_heatmap(&Heatmap::build(&[])), "");
    }

    #[test]
    fn longest_trend_bar_fills_width() {
        let chart = TrendChart::new(
            vec!["Jan".into()],
            vec![
                TrendSeries {
                    label: "a".into(),
                    data: vec![10],
                },
                TrendSeries {
                    label: "b".into(),
                    data: vec![5],
                },
            ],
        );
        let text = plain(&render_trend(&chart));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jan");
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[2].matches('█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn compliance_gauge_shows_percentage() {
        let summary = ComplianceSummary {
            compliant: 1,
            at_risk: 1,
            non_compliant: 0,
            total: 2,
        };
        let text = plain(&render_compliance(&summary));
        assert!(text.contains("50%"));
        assert!(text.contains("(1/2 compliant)"));
        assert_eq!(text.matches('█').count(), RING_WIDTH / 2);
    }
}
