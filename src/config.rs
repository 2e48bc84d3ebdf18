use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use podium_core::{AggregatorSettings, DisplayLocale, GroupingMode, JsonFileSource, Tier, TierRules};

use crate::constants::{CONFIG_PATH_ENV, DATA_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_DATA_PATH};
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub competitions: CompetitionsConfig,
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompetitionsConfig {
    pub data_path: PathBuf,
    pub page_size: usize,
    pub locale: DisplayLocale,
    pub grouping: GroupingMode,
    pub tiers: TierMarkersConfig,
}

impl Default for CompetitionsConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            page_size: podium_core::DEFAULT_PAGE_SIZE,
            locale: DisplayLocale::default(),
            grouping: GroupingMode::default(),
            tiers: TierMarkersConfig::default(),
        }
    }
}

/// Extra result markers per tier. Added to the locale defaults unless
/// `replace` is set, in which case a non-empty list replaces that tier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TierMarkersConfig {
    pub replace: bool,
    pub gold: Vec<String>,
    pub silver: Vec<String>,
    pub bronze: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub description: String,
    pub location: Option<String>,
    pub social_links: Vec<SocialLinkConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialLinkConfig {
    pub platform: String,
    pub url: String,
    pub username: String,
}

impl Config {
    /// Load from `PODIUM_CONFIG` or `podium.toml`, then apply env overrides.
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// A missing file yields defaults; a malformed one is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file '{}' not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config file '{}': {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(data_path) = env::var(DATA_PATH_ENV) {
            info!("Using competition data from {}={}", DATA_PATH_ENV, data_path);
            self.competitions.data_path = PathBuf::from(data_path);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.competitions.data_path.as_os_str().is_empty() {
            return Err(AppError::Config("competitions.data_path must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn record_source(&self) -> JsonFileSource {
        JsonFileSource::new(&self.competitions.data_path)
    }

    pub fn aggregator_settings(&self) -> AggregatorSettings {
        let competitions = &self.competitions;
        AggregatorSettings {
            page_size: competitions.page_size,
            locale: competitions.locale,
            grouping: competitions.grouping,
            tier_rules: competitions.tiers.rules_for(competitions.locale),
        }
    }
}

impl TierMarkersConfig {
    pub fn rules_for(&self, locale: DisplayLocale) -> TierRules {
        let mut rules = TierRules::for_locale(locale);
        for (tier, markers) in [
            (Tier::Gold, &self.gold),
            (Tier::Silver, &self.silver),
            (Tier::Bronze, &self.bronze),
        ] {
            if markers.is_empty() {
                continue;
            }
            if self.replace {
                rules.set_markers(tier, markers.iter().cloned());
            } else {
                rules.add_markers(tier, markers.iter().cloned());
            }
        }
        rules
    }
}
