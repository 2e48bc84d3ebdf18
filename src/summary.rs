use std::collections::BTreeMap;

use podium_core::dates::year_of;
use podium_core::{CompetitionRecord, Tier, TierRules};

/// Per-year and per-tier counts over a record set, as reported by `podium check`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSummary {
    pub total: usize,
    pub per_year: BTreeMap<Option<i32>, usize>,
    pub per_tier: BTreeMap<Tier, usize>,
    /// Titles of records whose date cannot be parsed, in input order.
    pub undated: Vec<String>,
}

impl DataSummary {
    /// Years newest first, with the undated bucket last.
    pub fn years_descending(&self) -> impl Iterator<Item = (Option<i32>, usize)> + '_ {
        let dated = self.per_year.iter().rev().filter_map(|(year, count)| year.map(|y| (Some(y), *count)));
        dated.chain(self.per_year.get(&None).map(|count| (None, *count)))
    }

    pub fn tier_count(&self, tier: Tier) -> usize {
        self.per_tier.get(&tier).copied().unwrap_or(0)
    }
}

pub fn summarize(records: &[CompetitionRecord], rules: &TierRules) -> DataSummary {
    let mut summary = DataSummary {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        let year = year_of(&record.date);
        *summary.per_year.entry(year).or_default() += 1;
        *summary.per_tier.entry(rules.classify(&record.result)).or_default() += 1;
        if year.is_none() {
            summary.undated.push(record.title.clone());
        }
    }
    summary
}
