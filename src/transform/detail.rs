//! Micro view - per-farm detail tables and series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::{filter, Dataset, Record};
use crate::transform::tables::{schedule_rows, ScheduleRow};
use crate::transform::CountTable;

/// One point of a farm's germination-over-time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GerminationPoint {
    pub date: NaiveDate,
    pub germination_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerUsageRow {
    pub date: NaiveDate,
    pub dap_kg: Option<f64>,
    pub mop_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedUsageRow {
    pub date: NaiveDate,
    pub seed_qty: Option<f64>,
    pub seed_variety: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrigationStatusRow {
    pub date: NaiveDate,
    pub irrigation_done: Option<String>,
    pub channels_constructed: Option<String>,
    pub sprinkler_installed: Option<String>,
}

/// Everything the single-farm detail page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmDetail {
    pub farm_name: String,
    /// The farm's raw activity records, in dataset order.
    pub records: Vec<Record>,
    /// Present germination values sorted by date.
    pub germination_over_time: Vec<GerminationPoint>,
    pub fertilizer_usage: Vec<FertilizerUsageRow>,
    pub seed_usage: Vec<SeedUsageRow>,
    pub irrigation_status: Vec<IrrigationStatusRow>,
    /// Occurrences per tillage operation, descending.
    pub tillage_operations: CountTable,
    /// The farm's activities as single-day schedule bars.
    pub schedule: Vec<ScheduleRow>,
}

/// Build the detail view for one farm.
pub fn farm_detail(dataset: &Dataset, farm_name: &str) -> FarmDetail {
    let farm_data = filter::by_farm(dataset, farm_name);
    let records = farm_data.records();

    let mut germination_over_time: Vec<GerminationPoint> = records
        .iter()
        .filter_map(|r| {
            r.germination_pct.map(|germination_pct| GerminationPoint {
                date: r.date,
                germination_pct,
            })
        })
        .collect();
    germination_over_time.sort_by_key(|p| p.date);

    let fertilizer_usage = records
        .iter()
        .map(|r| FertilizerUsageRow {
            date: r.date,
            dap_kg: r.dap_kg,
            mop_kg: r.mop_kg,
        })
        .collect();

    let seed_usage = records
        .iter()
        .map(|r| SeedUsageRow {
            date: r.date,
            seed_qty: r.seed_qty,
            seed_variety: r.seed_variety.clone(),
        })
        .collect();

    let irrigation_status = records
        .iter()
        .map(|r| IrrigationStatusRow {
            date: r.date,
            irrigation_done: r.irrigation_done.clone(),
            channels_constructed: r.channels_constructed.clone(),
            sprinkler_installed: r.sprinkler_installed.clone(),
        })
        .collect();

    let tillage_operations = crate::transform::tables::tillage_counts(&farm_data);
    let schedule = schedule_rows(&farm_data);

    FarmDetail {
        farm_name: farm_name.to_string(),
        records: records.to_vec(),
        germination_over_time,
        fertilizer_usage,
        seed_usage,
        irrigation_status,
        tillage_operations,
        schedule,
    }
}
