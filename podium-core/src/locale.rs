use serde::{Deserialize, Serialize};

use crate::domain::Tier;

/// Display locale for dates, labels and default tier markers.
///
/// Deserializes through `FromStr`, so config files accept the same
/// spellings as the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DisplayLocale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl DisplayLocale {
    pub fn tag(&self) -> &'static str {
        match self {
            DisplayLocale::PtBr => "pt-BR",
            DisplayLocale::EnUs => "en-US",
        }
    }

    pub fn chrono_locale(&self) -> chrono::Locale {
        match self {
            DisplayLocale::PtBr => chrono::Locale::pt_BR,
            DisplayLocale::EnUs => chrono::Locale::en_US,
        }
    }

    /// Day, full month name and year.
    pub fn date_pattern(&self) -> &'static str {
        match self {
            DisplayLocale::PtBr => "%-d de %B de %Y",
            DisplayLocale::EnUs => "%B %-d, %Y",
        }
    }

    /// Default marker substrings, in match priority order.
    pub fn default_markers(&self) -> &'static [(Tier, &'static [&'static str])] {
        match self {
            DisplayLocale::PtBr => &[
                (Tier::Gold, &["1º"]),
                (Tier::Silver, &["2º"]),
                (Tier::Bronze, &["3º"]),
            ],
            DisplayLocale::EnUs => &[
                (Tier::Gold, &["1st"]),
                (Tier::Silver, &["2nd"]),
                (Tier::Bronze, &["3rd"]),
            ],
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            DisplayLocale::PtBr => "Histórico de Competições",
            DisplayLocale::EnUs => "Competition History",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            DisplayLocale::PtBr => "Nenhuma competição registrada.",
            DisplayLocale::EnUs => "No competitions recorded.",
        }
    }

    pub fn load_more_label(&self) -> &'static str {
        match self {
            DisplayLocale::PtBr => "Carregar mais",
            DisplayLocale::EnUs => "Load more",
        }
    }

    pub fn show_less_label(&self) -> &'static str {
        match self {
            DisplayLocale::PtBr => "Mostrar menos",
            DisplayLocale::EnUs => "Show less",
        }
    }

    pub fn undated_label(&self) -> &'static str {
        match self {
            DisplayLocale::PtBr => "Sem data",
            DisplayLocale::EnUs => "Undated",
        }
    }
}

impl std::str::FromStr for DisplayLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(DisplayLocale::PtBr),
            "en-us" | "en" => Ok(DisplayLocale::EnUs),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

impl TryFrom<String> for DisplayLocale {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
