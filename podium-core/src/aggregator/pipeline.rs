//! The individual transformation steps: sort, window, group.
//!
//! Each step takes a slice and returns a new vector; inputs are never
//! reordered in place.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::dates::{parse_date, year_of};
use crate::domain::CompetitionRecord;

/// Visible prefix of the ordered records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub records: Vec<CompetitionRecord>,
    /// More records exist than fit in a collapsed page.
    pub has_more: bool,
}

/// Raw records of one calendar year, `None` for undated records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearBucket {
    pub year: Option<i32>,
    pub records: Vec<CompetitionRecord>,
}

/// Most recent first. Unparsable dates sort last; ties keep input order.
pub fn sort_by_date_descending(records: &[CompetitionRecord]) -> Vec<CompetitionRecord> {
    let mut ordered = records.to_vec();
    // sort_by_cached_key is stable and parses each date once.
    ordered.sort_by_cached_key(|r| Reverse(parse_date(&r.date)));
    ordered
}

pub fn select_window(ordered: &[CompetitionRecord], expanded: bool, page_size: usize) -> Window {
    let has_more = ordered.len() > page_size;
    let records = if expanded {
        ordered.to_vec()
    } else {
        ordered.iter().take(page_size).cloned().collect()
    };
    Window { records, has_more }
}

/// Year descending, undated bucket last, input order kept within a year.
pub fn group_by_year(records: &[CompetitionRecord]) -> Vec<YearBucket> {
    let mut buckets: BTreeMap<Reverse<Option<i32>>, Vec<CompetitionRecord>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(Reverse(year_of(&record.date)))
            .or_default()
            .push(record.clone());
    }

    buckets
        .into_iter()
        .map(|(Reverse(year), records)| YearBucket { year, records })
        .collect()
}

/// Keep whole buckets until at least `page_size` records are included.
pub fn take_whole_years(buckets: Vec<YearBucket>, page_size: usize) -> Vec<YearBucket> {
    let mut shown = 0;
    buckets
        .into_iter()
        .take_while(|bucket| {
            let keep = shown < page_size;
            shown += bucket.records.len();
            keep
        })
        .collect()
}
