pub mod aggregator;
pub mod classify;
pub mod common;
pub mod dates;
pub mod domain;
pub mod locale;
pub mod source;

pub use aggregator::{AggregatorSettings, CompetitionAggregator, DEFAULT_PAGE_SIZE};
pub use classify::TierRules;
pub use common::error::{PodiumError, Result};
pub use domain::*;
pub use locale::DisplayLocale;
pub use source::{JsonFileSource, RecordSource, StaticSource};
