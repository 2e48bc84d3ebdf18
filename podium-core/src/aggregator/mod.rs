pub mod pipeline;

pub use pipeline::{group_by_year, select_window, sort_by_date_descending, take_whole_years, Window, YearBucket};

use tracing::{debug, warn};

use crate::classify::TierRules;
use crate::common::error::Result;
use crate::dates::{format_date, parse_date};
use crate::domain::{
    Classification, CompetitionRecord, CompetitionsView, DisplayRecord, GroupingMode, ViewState, YearGroup,
};
use crate::locale::DisplayLocale;
use crate::source::RecordSource;

/// Records shown while collapsed.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorSettings {
    pub page_size: usize,
    pub locale: DisplayLocale,
    pub grouping: GroupingMode,
    pub tier_rules: TierRules,
}

impl AggregatorSettings {
    /// Defaults for a locale, with that locale's tier markers.
    pub fn for_locale(locale: DisplayLocale) -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale,
            grouping: GroupingMode::default(),
            tier_rules: TierRules::for_locale(locale),
        }
    }
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self::for_locale(DisplayLocale::default())
    }
}

/// Turns the competition snapshot into grouped, classified views.
///
/// The records are injected once and sorted at construction. The expand
/// flag belongs to the caller, so `view` is a pure function of
/// `(records, expanded, settings)`.
#[derive(Debug, Clone)]
pub struct CompetitionAggregator {
    sorted: Vec<CompetitionRecord>,
    settings: AggregatorSettings,
}

impl CompetitionAggregator {
    pub fn new(records: Vec<CompetitionRecord>, settings: AggregatorSettings) -> Self {
        for record in records.iter().filter(|r| parse_date(&r.date).is_none()) {
            warn!(title = %record.title, date = %record.date, "Unparsable competition date, sorting last");
        }

        let sorted = sort_by_date_descending(&records);
        debug!(count = sorted.len(), page_size = settings.page_size, "Competition aggregator ready");
        Self { sorted, settings }
    }

    pub fn from_source(source: &dyn RecordSource, settings: AggregatorSettings) -> Result<Self> {
        let records = source.load()?;
        debug!(source = %source.describe(), "Competition records loaded");
        Ok(Self::new(records, settings))
    }

    /// All records, most recent first.
    pub fn records(&self) -> &[CompetitionRecord] {
        &self.sorted
    }

    pub fn settings(&self) -> &AggregatorSettings {
        &self.settings
    }

    pub fn total(&self) -> usize {
        self.sorted.len()
    }

    pub fn classify(&self, record: &CompetitionRecord) -> Classification {
        self.settings.tier_rules.classification(&record.result)
    }

    pub fn display(&self, record: &CompetitionRecord) -> DisplayRecord {
        DisplayRecord {
            title: record.title.clone(),
            distance: record.distance.clone(),
            result: record.result.clone(),
            time: record.time.clone(),
            date: record.date.clone(),
            formatted_date: format_date(&record.date, self.settings.locale),
            classification: self.classify(record),
        }
    }

    pub fn view_for(&self, state: ViewState) -> CompetitionsView {
        self.view(state.is_expanded())
    }

    pub fn view(&self, expanded: bool) -> CompetitionsView {
        let locale = self.settings.locale;
        let total = self.sorted.len();

        if total == 0 {
            return CompetitionsView {
                title: locale.section_title().to_string(),
                groups: Vec::new(),
                has_more: false,
                expanded,
                total: 0,
                shown: 0,
                empty_message: Some(locale.empty_message().to_string()),
                toggle_label: None,
            };
        }

        let (buckets, has_more) = self.buckets(expanded);
        let groups: Vec<YearGroup> = buckets
            .into_iter()
            .map(|bucket| YearGroup {
                year: bucket.year,
                label: match bucket.year {
                    Some(year) => year.to_string(),
                    None => locale.undated_label().to_string(),
                },
                records: bucket.records.iter().map(|r| self.display(r)).collect(),
            })
            .collect();
        let shown = groups.iter().map(|g| g.records.len()).sum();

        let toggle_label = has_more.then(|| {
            if expanded {
                locale.show_less_label().to_string()
            } else {
                locale.load_more_label().to_string()
            }
        });

        CompetitionsView {
            title: locale.section_title().to_string(),
            groups,
            has_more,
            expanded,
            total,
            shown,
            empty_message: None,
            toggle_label,
        }
    }

    fn buckets(&self, expanded: bool) -> (Vec<YearBucket>, bool) {
        let page_size = self.settings.page_size;
        match self.settings.grouping {
            GroupingMode::Window => {
                let window = select_window(&self.sorted, expanded, page_size);
                (group_by_year(&window.records), window.has_more)
            }
            GroupingMode::WholeYears => {
                let all = group_by_year(&self.sorted);
                let collapsed = take_whole_years(all.clone(), page_size);
                let collapsed_count: usize = collapsed.iter().map(|b| b.records.len()).sum();
                let has_more = collapsed_count < self.sorted.len();
                if expanded {
                    (all, has_more)
                } else {
                    (collapsed, has_more)
                }
            }
        }
    }
}
