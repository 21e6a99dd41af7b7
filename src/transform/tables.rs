//! Macro-view derived tables - irrigation, fertilizer, tillage, activity
//! timeline, and schedule rows for the Gantt widget.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::data::Dataset;
use crate::transform::{count_values, CountTable};

/// One irrigation row: a real record with the field present, or a synthetic
/// "No" row for a farm with no irrigation at all (date absent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrigationRow {
    pub farm_name: String,
    pub date: Option<NaiveDate>,
    pub irrigation_done: String,
}

/// Irrigation details: every record with `Irrigation Done` present, in
/// dataset order, followed by one synthetic "No" row per farm that has no
/// such record. A farm with any irrigation record never gets a "No" row,
/// however many of its other records lack the field.
pub fn irrigation_table(dataset: &Dataset) -> Vec<IrrigationRow> {
    let mut rows: Vec<IrrigationRow> = dataset
        .records()
        .iter()
        .filter_map(|r| {
            r.irrigation_done.as_ref().map(|marker| IrrigationRow {
                farm_name: r.farm_name.clone(),
                date: Some(r.date),
                irrigation_done: marker.clone(),
            })
        })
        .collect();

    let farms_with_irrigation: HashSet<String> =
        rows.iter().map(|r| r.farm_name.clone()).collect();
    for farm_name in dataset.farm_names() {
        if !farms_with_irrigation.contains(&farm_name) {
            rows.push(IrrigationRow {
                farm_name,
                date: None,
                irrigation_done: "No".to_string(),
            });
        }
    }
    rows
}

/// One fully-populated fertilizer application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerRow {
    pub farm_name: String,
    pub date: NaiveDate,
    pub dap_kg: f64,
    pub mop_kg: f64,
}

/// Fertilizer applications where both DAP and MOP are present; incomplete
/// records are dropped.
pub fn fertilizer_table(dataset: &Dataset) -> Vec<FertilizerRow> {
    dataset
        .records()
        .iter()
        .filter_map(|r| match (r.dap_kg, r.mop_kg) {
            (Some(dap_kg), Some(mop_kg)) => Some(FertilizerRow {
                farm_name: r.farm_name.clone(),
                date: r.date,
                dap_kg,
                mop_kg,
            }),
            _ => None,
        })
        .collect()
}

/// Occurrence counts per distinct tillage value, descending.
pub fn tillage_counts(dataset: &Dataset) -> CountTable {
    count_values(dataset.records().iter().filter_map(|r| r.tillage.as_deref()))
}

/// Record count for one (date, activity) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityOverTimeRow {
    pub date: NaiveDate,
    pub activity: String,
    pub count: usize,
}

/// One row per distinct (date, activity) pair, sorted by date then activity.
pub fn activity_over_time(dataset: &Dataset) -> Vec<ActivityOverTimeRow> {
    let mut counts: BTreeMap<(NaiveDate, &str), usize> = BTreeMap::new();
    for record in dataset.records() {
        if let Some(activity) = record.activity.as_deref() {
            *counts.entry((record.date, activity)).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|((date, activity), count)| ActivityOverTimeRow {
            date,
            activity: activity.to_string(),
            count,
        })
        .collect()
}

/// One timeline bar for the schedule/Gantt widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub start: NaiveDate,
    pub task: String,
    pub resource: String,
    pub finish: NaiveDate,
}

/// Map each record with a present activity to a single-day schedule bar:
/// start == finish always.
pub fn schedule_rows(dataset: &Dataset) -> Vec<ScheduleRow> {
    dataset
        .records()
        .iter()
        .filter_map(|r| {
            r.activity.as_ref().map(|activity| ScheduleRow {
                start: r.date,
                task: activity.clone(),
                resource: r.farm_name.clone(),
                finish: r.date,
            })
        })
        .collect()
}
