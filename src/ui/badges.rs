//! Status and severity colouring.

use console::{Style, style};

/// Colour family a status or severity value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Alert,
    Bad,
    Muted,
    Neutral,
}

impl Tone {
    /// Classify a wire value or label, e.g. `"in-progress"` or `"In Progress"`.
    pub fn of(value: &str) -> Self {
        let key = value.trim().to_lowercase().replace([' ', '_'], "-");
        match key.as_str() {
            "completed" | "compliant" | "resolved" | "low" | "good" => Self::Good,
            "in-progress" | "at-risk" | "medium" | "open" | "warning" => Self::Caution,
            "high" => Self::Alert,
            "failed" | "non-compliant" | "critical" => Self::Bad,
            "pending" => Self::Muted,
            _ => Self::Neutral,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Good => Style::new().green(),
            Self::Caution => Style::new().yellow(),
            Self::Alert => Style::new().color256(208),
            Self::Bad => Style::new().red().bold(),
            Self::Muted => Style::new().dim(),
            Self::Neutral => Style::new(),
        }
    }
}

/// Colour `padded` according to the status in `raw`. Padding is kept so
/// columns stay aligned.
pub fn paint_status(raw: &str, padded: &str) -> String {
    Tone::of(raw).style().apply_to(padded).to_string()
}

/// Render a bracketed badge for a wire value: `"at-risk"` -> `[At Risk]`.
pub fn badge(raw: &str) -> String {
    let label = format!("[{}]", qiq_common::badge_label(raw));
    Tone::of(raw).style().apply_to(label).to_string()
}

/// Dim text helper for secondary details.
pub fn muted(text: &str) -> String {
    style(text).dim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_by_status() {
        assert_eq!(Tone::of("completed"), Tone::Good);
        assert_eq!(Tone::of("In Progress"), Tone::Caution);
        assert_eq!(Tone::of("in_progress"), Tone::Caution);
        assert_eq!(Tone::of("non-compliant"), Tone::Bad);
        assert_eq!(Tone::of("critical"), Tone::Bad);
        assert_eq!(Tone::of("high"), Tone::Alert);
        assert_eq!(Tone::of("pending"), Tone::Muted);
        assert_eq!(Tone::of("anything else"), Tone::Neutral);
    }

    #[test]
    fn painting_keeps_text_and_padding() {
        let painted = paint_status("failed", "failed    ");
        assert_eq!(console::strip_ansi_codes(&painted), "failed    ");
    }

    #[test]
    fn badge_uses_readable_label() {
        let text = badge("at-risk");
        assert_eq!(console::strip_ansi_codes(&text), "[At Risk]");
    }
}
