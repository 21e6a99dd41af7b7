//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use farmdash::{Dataset, Record};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A record with only the required fields set.
pub fn record(farm_name: &str, day: NaiveDate) -> Record {
    Record {
        farm_name: farm_name.to_string(),
        date: day,
        activity: None,
        plot_area_m2: None,
        dap_kg: None,
        mop_kg: None,
        seed_variety: None,
        seed_qty: None,
        germination_pct: None,
        irrigation_done: None,
        channels_constructed: None,
        sprinkler_installed: None,
        tillage: None,
    }
}

/// Two farms, three records: farm A sows twice (one irrigated, one with
/// fertilizer and germination data), farm B harrows without irrigation.
pub fn sample_dataset() -> Dataset {
    let mut first = record("Green Acres", date(2024, 1, 1));
    first.activity = Some("Sowing".to_string());
    first.plot_area_m2 = Some(1200.0);
    first.seed_variety = Some("Hybrid-9".to_string());
    first.seed_qty = Some(25.0);
    first.germination_pct = Some(88.0);
    first.irrigation_done = Some("Done".to_string());
    first.tillage = Some("Plough".to_string());

    let mut second = record("Green Acres", date(2024, 1, 5));
    second.activity = Some("Fertilizing".to_string());
    second.dap_kg = Some(50.0);
    second.mop_kg = Some(30.0);
    second.germination_pct = Some(92.0);
    second.tillage = Some("Plough".to_string());

    let mut third = record("Riverside", date(2024, 1, 2));
    third.activity = Some("Sowing".to_string());
    third.plot_area_m2 = Some(800.0);
    third.seed_variety = Some("Local".to_string());
    third.seed_qty = Some(18.0);
    third.sprinkler_installed = Some("Yes".to_string());
    third.tillage = Some("Harrow".to_string());

    Dataset::new(vec![first, second, third])
}
