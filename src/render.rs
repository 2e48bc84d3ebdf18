//! Plain-text rendering of a competitions view for the terminal.

use std::fmt::Write;

use podium_core::{CompetitionsView, DisplayRecord, Tier};

/// Output format for `podium show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(view: &CompetitionsView, format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

pub fn render_text(view: &CompetitionsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));

    if let Some(message) = &view.empty_message {
        let _ = writeln!(out, "\n{}", message);
        return out;
    }

    for group in &view.groups {
        let _ = writeln!(out, "\n{}", group.label);
        for record in &group.records {
            let _ = writeln!(out, "  {}", render_record(record));
        }
    }

    if let Some(label) = &view.toggle_label {
        let _ = writeln!(out, "\n({}/{}) {}", view.shown, view.total, label);
    }
    out
}

fn render_record(record: &DisplayRecord) -> String {
    format!(
        "{} {}  {}  |  {}  |  {}  |  {}",
        tier_badge(record.classification.tier),
        record.formatted_date,
        record.title,
        record.result,
        record.distance,
        record.time
    )
}

fn tier_badge(tier: Tier) -> &'static str {
    match tier {
        Tier::Gold => "[1]",
        Tier::Silver => "[2]",
        Tier::Bronze => "[3]",
        Tier::Finisher => "[ ]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_core::{AggregatorSettings, CompetitionAggregator, CompetitionRecord};

    fn record(title: &str, result: &str, date: &str) -> CompetitionRecord {
        CompetitionRecord {
            title: title.to_string(),
            distance: "21 km".to_string(),
            result: result.to_string(),
            time: "01:35:12".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_text_shows_year_headings_and_badges() {
        let aggregator = CompetitionAggregator::new(
            vec![record("Meia de Floripa", "1º geral", "2024-03-15"), record("Volta da Ilha", "Top 10", "2023-04-01")],
            AggregatorSettings::default(),
        );
        let text = render_text(&aggregator.view(false));

        assert!(text.starts_with("Histórico de Competições\n"));
        assert!(text.contains("\n2024\n"));
        assert!(text.contains("[1] 15 de março de 2024  Meia de Floripa"));
        assert!(text.contains("[ ] 1 de abril de 2023  Volta da Ilha"));
        assert!(!text.contains("Carregar mais"));
    }

    #[test]
    fn test_text_shows_toggle_hint_when_more_exist() {
        let records: Vec<CompetitionRecord> =
            (1..=8).map(|d| record(&format!("Etapa {}", d), "", &format!("2024-05-0{}", d))).collect();
        let aggregator = CompetitionAggregator::new(records, AggregatorSettings::default());
        let text = render_text(&aggregator.view(false));
        assert!(text.contains("(6/8) Carregar mais"));
    }

    #[test]
    fn test_text_empty_state() {
        let aggregator = CompetitionAggregator::new(Vec::new(), AggregatorSettings::default());
        let text = render_text(&aggregator.view(false));
        assert!(text.contains("Nenhuma competição registrada."));
    }

    #[test]
    fn test_json_format_is_the_serialized_view() {
        let aggregator = CompetitionAggregator::new(vec![record("A", "2º", "2022-02-02")], AggregatorSettings::default());
        let json = render(&aggregator.view(false), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["groups"][0]["year"], 2022);
        assert_eq!(value["groups"][0]["records"][0]["classification"]["tier"], "silver");
    }
}
