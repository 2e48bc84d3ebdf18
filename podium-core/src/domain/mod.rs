use serde::{Deserialize, Serialize};

/// One competition result as it appears in the bundled data asset.
///
/// Every field is free text. Missing fields deserialize to empty strings and
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionRecord {
    pub title: String,
    pub distance: String,
    pub result: String,
    pub time: String,
    pub date: String,
}

/// Placement bucket derived from the `result` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
    Finisher,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Gold, Tier::Silver, Tier::Bronze, Tier::Finisher];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Gold => "gold",
            Tier::Silver => "silver",
            Tier::Bronze => "bronze",
            Tier::Finisher => "finisher",
        }
    }

    /// Color token handed to the presentation layer.
    pub fn color_token(&self) -> &'static str {
        match self {
            Tier::Gold => "text-yellow-500",
            Tier::Silver => "text-gray-400",
            Tier::Bronze => "text-orange-500",
            Tier::Finisher => "text-blue-500",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tier::Gold => "trophy",
            Tier::Silver | Tier::Bronze => "medal",
            Tier::Finisher => "flag",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tier: Tier,
    pub color_token: &'static str,
    pub icon: &'static str,
}

impl From<Tier> for Classification {
    fn from(tier: Tier) -> Self {
        Self {
            tier,
            color_token: tier.color_token(),
            icon: tier.icon(),
        }
    }
}

/// A record shaped for display: raw fields plus derived formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub title: String,
    pub distance: String,
    pub result: String,
    pub time: String,
    pub date: String,
    pub formatted_date: String,
    pub classification: Classification,
}

/// Records sharing a calendar year. `year` is `None` for the undated bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGroup {
    pub year: Option<i32>,
    pub label: String,
    pub records: Vec<DisplayRecord>,
}

/// Everything the rendering layer needs to draw the competition history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitionsView {
    pub title: String,
    pub groups: Vec<YearGroup>,
    pub has_more: bool,
    pub expanded: bool,
    pub total: usize,
    pub shown: usize,
    /// Set only when there are no records at all.
    pub empty_message: Option<String>,
    /// Label for the expand/collapse affordance, present iff `has_more`.
    pub toggle_label: Option<String>,
}

impl CompetitionsView {
    pub fn is_empty(&self) -> bool {
        self.empty_message.is_some()
    }
}

/// How the display window and year grouping interact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum GroupingMode {
    /// Cut the window first, then group it. The last year shown may be partial.
    #[default]
    Window,
    /// Group everything, then keep whole years until the page is filled.
    WholeYears,
}

impl std::str::FromStr for GroupingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "window" => Ok(GroupingMode::Window),
            "whole_years" => Ok(GroupingMode::WholeYears),
            other => Err(format!("unknown grouping mode '{}'", other)),
        }
    }
}

impl TryFrom<String> for GroupingMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Expand/collapse state owned by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Collapsed,
    Expanded,
}

impl ViewState {
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            ViewState::Expanded
        } else {
            ViewState::Collapsed
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, ViewState::Expanded)
    }

    pub fn toggle(self) -> Self {
        match self {
            ViewState::Collapsed => ViewState::Expanded,
            ViewState::Expanded => ViewState::Collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_ignores_extra_fields_and_defaults_missing_ones() {
        let record: CompetitionRecord = serde_json::from_value(json!({
            "title": "Maratona do Rio",
            "date": "2024-06-02",
            "organizer": "ignored"
        }))
        .unwrap();

        assert_eq!(record.title, "Maratona do Rio");
        assert_eq!(record.date, "2024-06-02");
        assert_eq!(record.result, "");
        assert_eq!(record.time, "");
    }

    #[test]
    fn test_view_state_toggles_symmetrically() {
        let state = ViewState::default();
        assert_eq!(state, ViewState::Collapsed);
        assert_eq!(state.toggle(), ViewState::Expanded);
        assert_eq!(state.toggle().toggle(), ViewState::Collapsed);
        assert!(ViewState::from_expanded(true).is_expanded());
    }

    #[test]
    fn test_grouping_mode_parses_cli_spellings() {
        assert_eq!("window".parse::<GroupingMode>().unwrap(), GroupingMode::Window);
        assert_eq!("whole-years".parse::<GroupingMode>().unwrap(), GroupingMode::WholeYears);
        assert!("by_month".parse::<GroupingMode>().is_err());
    }

    #[test]
    fn test_grouping_mode_deserializes_cli_spellings() {
        let parsed: GroupingMode = serde_json::from_str("\"whole-years\"").unwrap();
        assert_eq!(parsed, GroupingMode::WholeYears);
        assert_eq!(serde_json::to_string(&GroupingMode::WholeYears).unwrap(), "\"whole_years\"");
    }

    #[test]
    fn test_classification_tokens_follow_tier() {
        let c = Classification::from(Tier::Gold);
        assert_eq!(c.color_token, "text-yellow-500");
        assert_eq!(c.icon, "trophy");
        assert_eq!(Classification::from(Tier::Finisher).color_token, "text-blue-500");
    }
}
