//! Summary metrics and germination-by-farm.

mod common;

use common::{date, record, sample_dataset};
use farmdash::transform::summary::{germination_by_farm, summarize};
use farmdash::Dataset;
use pretty_assertions::assert_eq;

#[test]
fn summary_totals_skip_absent_values() {
    let report = summarize(&sample_dataset());

    assert_eq!(report.total_plot_area_m2, 2000.0);
    assert_eq!(report.farm_count, 2);
    assert_eq!(report.total_dap_kg, 50.0);
    assert_eq!(report.total_mop_kg, 30.0);
    assert_eq!(report.total_seed, 43.0);
    assert_eq!(report.irrigation_done_count, 1);
    assert_eq!(report.sprinkler_installed_count, 1);
}

#[test]
fn germination_stats_exclude_absent_values() {
    let report = summarize(&sample_dataset());

    // only the two Green Acres records carry a value; Riverside has none
    assert_eq!(report.germination.mean, Some(90.0));
    assert_eq!(report.germination.max, Some(92.0));
    assert_eq!(report.germination.min, Some(88.0));
}

#[test]
fn all_absent_germination_is_no_data_not_zero() {
    let dataset = Dataset::new(vec![record("A", date(2024, 1, 1))]);
    let report = summarize(&dataset);

    assert_eq!(report.germination.mean, None);
    assert_eq!(report.germination.max, None);
    assert_eq!(report.germination.min, None);

    let rows = report.rows();
    let mean_row = rows
        .iter()
        .find(|r| r.metric == "Average Germination Rate (%)")
        .unwrap();
    assert_eq!(mean_row.value, None);
}

#[test]
fn activity_counts_are_descending() {
    let report = summarize(&sample_dataset());

    let counts: Vec<(&str, usize)> = report
        .activity_counts
        .iter()
        .map(|c| (c.value.as_str(), c.count))
        .collect();
    assert_eq!(counts, vec![("Sowing", 2), ("Fertilizing", 1)]);
}

#[test]
fn summary_table_has_one_row_per_metric() {
    let rows = summarize(&sample_dataset()).rows();
    assert_eq!(rows.len(), 10);

    let total = rows.iter().find(|r| r.metric == "Total Plot Area (m2)").unwrap();
    assert_eq!(total.value, Some(2000.0));
}

#[test]
fn seed_variety_list_has_distinct_non_absent_values() {
    let report = summarize(&sample_dataset());
    assert_eq!(report.seed_varieties, vec!["Hybrid-9", "Local"]);
}

#[test]
fn germination_by_farm_takes_the_maximum_observed_value() {
    let rows = germination_by_farm(&sample_dataset());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].farm_name, "Green Acres");
    assert_eq!(rows[0].germination_pct, Some(92.0));
    assert_eq!(rows[1].farm_name, "Riverside");
    assert_eq!(rows[1].germination_pct, None);
}

#[test]
fn summary_report_serializes_for_the_rendering_boundary() {
    let report = summarize(&sample_dataset());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_plot_area_m2"], 2000.0);
    assert_eq!(json["farm_count"], 2);
    // absent germination must serialize as null, never 0
    let empty = summarize(&Dataset::default());
    let json = serde_json::to_value(&empty).unwrap();
    assert!(json["germination"]["mean"].is_null());
}
