//! Transform module - stateless derived tables and series for display
//!
//! Every function here maps (dataset, parameters) to a new derived table;
//! nothing mutates its input. The outputs are plain serializable rows the
//! host dashboard hands to its table and chart widgets.

pub mod detail;
pub mod summary;
pub mod tables;

pub use detail::{farm_detail, FarmDetail};
pub use summary::{germination_by_farm, summarize, FarmGermination, SummaryReport, SummaryRow};
pub use tables::{
    activity_over_time, fertilizer_table, irrigation_table, schedule_rows, tillage_counts,
    ActivityOverTimeRow, FertilizerRow, IrrigationRow, ScheduleRow,
};

use serde::Serialize;
use std::collections::HashMap;

/// One value/count pair of an occurrence table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub value: String,
    pub count: usize,
}

/// Occurrence counts ordered by descending count, ties by value.
pub type CountTable = Vec<CountRow>;

/// Count occurrences of each distinct value, descending.
pub(crate) fn count_values<'a, I>(values: I) -> CountTable
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut table: CountTable = counts
        .into_iter()
        .map(|(value, count)| CountRow {
            value: value.to_string(),
            count,
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    table
}
