//! Macro-view summary - the headline metrics across all farms.

use serde::Serialize;

use crate::data::Dataset;
use crate::transform::{count_values, CountTable};

/// Mean/max/min of germination values, excluding absent cells.
///
/// All three are `None` when no record carries a value; the host renders
/// that as "no data", never as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GerminationStats {
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

/// Aggregate metrics for the macro view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total_plot_area_m2: f64,
    pub farm_count: usize,
    pub total_dap_kg: f64,
    pub total_mop_kg: f64,
    pub total_seed: f64,
    pub germination: GerminationStats,
    pub irrigation_done_count: usize,
    pub sprinkler_installed_count: usize,
    /// Occurrences per activity, descending.
    pub activity_counts: CountTable,
    /// Distinct non-absent seed varieties, first-seen order.
    pub seed_varieties: Vec<String>,
}

/// One metric/value row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub metric: &'static str,
    pub value: Option<f64>,
}

impl SummaryReport {
    /// Flatten the named metrics into a metric/value table, one row each.
    /// Germination rows are valueless when every value was absent.
    pub fn rows(&self) -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                metric: "Total Plot Area (m2)",
                value: Some(self.total_plot_area_m2),
            },
            SummaryRow {
                metric: "Number of Farms",
                value: Some(self.farm_count as f64),
            },
            SummaryRow {
                metric: "Total DAP (kg)",
                value: Some(self.total_dap_kg),
            },
            SummaryRow {
                metric: "Total MOP (kg)",
                value: Some(self.total_mop_kg),
            },
            SummaryRow {
                metric: "Total Seed Used (kg)",
                value: Some(self.total_seed),
            },
            SummaryRow {
                metric: "Average Germination Rate (%)",
                value: self.germination.mean,
            },
            SummaryRow {
                metric: "Maximum Germination Rate (%)",
                value: self.germination.max,
            },
            SummaryRow {
                metric: "Minimum Germination Rate (%)",
                value: self.germination.min,
            },
            SummaryRow {
                metric: "Irrigation Done",
                value: Some(self.irrigation_done_count as f64),
            },
            SummaryRow {
                metric: "Sprinkler Installed",
                value: Some(self.sprinkler_installed_count as f64),
            },
        ]
    }
}

/// Compute the macro-view summary.
///
/// Absent numeric cells contribute nothing to the sums and are excluded
/// from the germination mean/max/min.
pub fn summarize(dataset: &Dataset) -> SummaryReport {
    let records = dataset.records();

    let total_plot_area_m2 = records.iter().filter_map(|r| r.plot_area_m2).sum();
    let total_dap_kg = records.iter().filter_map(|r| r.dap_kg).sum();
    let total_mop_kg = records.iter().filter_map(|r| r.mop_kg).sum();
    let total_seed = records.iter().filter_map(|r| r.seed_qty).sum();

    let germination_values: Vec<f64> = records.iter().filter_map(|r| r.germination_pct).collect();
    let germination = germination_stats(&germination_values);

    let irrigation_done_count = records.iter().filter(|r| r.irrigation_done.is_some()).count();
    let sprinkler_installed_count = records
        .iter()
        .filter(|r| r.sprinkler_installed.is_some())
        .count();

    let activity_counts = count_values(records.iter().filter_map(|r| r.activity.as_deref()));

    SummaryReport {
        total_plot_area_m2,
        farm_count: dataset.farm_names().len(),
        total_dap_kg,
        total_mop_kg,
        total_seed,
        germination,
        irrigation_done_count,
        sprinkler_installed_count,
        activity_counts,
        seed_varieties: dataset.seed_varieties(),
    }
}

fn germination_stats(values: &[f64]) -> GerminationStats {
    if values.is_empty() {
        return GerminationStats {
            mean: None,
            max: None,
            min: None,
        };
    }

    let sum: f64 = values.iter().sum();
    let mut max = values[0];
    let mut min = values[0];
    for &v in values {
        if v > max {
            max = v;
        }
        if v < min {
            min = v;
        }
    }

    GerminationStats {
        mean: Some(sum / values.len() as f64),
        max: Some(max),
        min: Some(min),
    }
}

/// Maximum observed germination value per farm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmGermination {
    pub farm_name: String,
    /// `None` when the farm has no recorded germination value.
    pub germination_pct: Option<f64>,
}

/// One row per distinct farm with its maximum observed germination value.
///
/// "Maximum observed" deliberately, not "latest by date": the value is a
/// running best, independent of record order.
pub fn germination_by_farm(dataset: &Dataset) -> Vec<FarmGermination> {
    dataset
        .farm_names()
        .into_iter()
        .map(|farm_name| {
            let germination_pct = dataset
                .records()
                .iter()
                .filter(|r| r.farm_name == farm_name)
                .filter_map(|r| r.germination_pct)
                .fold(None, |best: Option<f64>, v| {
                    Some(best.map_or(v, |b| b.max(v)))
                });
            FarmGermination {
                farm_name,
                germination_pct,
            }
        })
        .collect()
}
