//! Dataset filtering - pure operations producing derived views.
//! The loaded dataset is never mutated; each filter clones the kept records.

use chrono::NaiveDate;
use log::warn;
use std::collections::BTreeSet;

use super::record::Dataset;

/// Keep records with date in `[start, end]` inclusive. An unset bound is
/// unbounded on that side; both unset returns the input unchanged.
pub fn by_date_range(
    dataset: &Dataset,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Dataset {
    if start.is_none() && end.is_none() {
        return dataset.clone();
    }

    let records = dataset
        .records()
        .iter()
        .filter(|r| start.is_none_or(|s| r.date >= s) && end.is_none_or(|e| r.date <= e))
        .cloned()
        .collect();
    Dataset::new(records)
}

/// Keep records whose seed variety is in the given set. An empty set means
/// no filtering.
pub fn by_seed_variety(dataset: &Dataset, varieties: &BTreeSet<String>) -> Dataset {
    if varieties.is_empty() {
        return dataset.clone();
    }

    let records = dataset
        .records()
        .iter()
        .filter(|r| {
            r.seed_variety
                .as_ref()
                .is_some_and(|v| varieties.contains(v))
        })
        .cloned()
        .collect();
    Dataset::new(records)
}

/// Keep records for a single farm (micro-view selection).
pub fn by_farm(dataset: &Dataset, farm_name: &str) -> Dataset {
    let records = dataset
        .records()
        .iter()
        .filter(|r| r.farm_name == farm_name)
        .cloned()
        .collect();
    Dataset::new(records)
}

/// The user's current macro-view filter selections.
///
/// Held by the host alongside the session dataset and passed into each
/// transform run; applying it never touches the original dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub seed_varieties: BTreeSet<String>,
}

impl FilterState {
    /// Apply the active filters in order: date range, then seed variety.
    ///
    /// An empty result is not an error; downstream tables simply render
    /// empty. A warning is logged so the host can surface it.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        let (start, end) = match self.date_range {
            Some((start, end)) => (Some(start), Some(end)),
            None => (None, None),
        };
        let filtered = by_date_range(dataset, start, end);
        let filtered = by_seed_variety(&filtered, &self.seed_varieties);

        if filtered.is_empty() && !dataset.is_empty() {
            warn!("active filters matched no records");
        }
        filtered
    }
}
