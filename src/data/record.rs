//! Typed records and the in-memory Dataset.

use chrono::NaiveDate;
use serde::Serialize;

/// Exact column headers expected in the input CSV.
///
/// The sprinkler column is spelled `Sprinker installed` in the field data;
/// the header is matched verbatim.
pub mod columns {
    pub const FARM_NAME: &str = "FarmName";
    pub const DATE: &str = "Date";
    pub const ACTIVITY: &str = "Activity";
    pub const PLOT_AREA_M2: &str = "Plot Area in m2";
    pub const DAP_KG: &str = "DAP(kg)";
    pub const MOP_KG: &str = "MOP(kg)";
    pub const SEED_VARIETY: &str = "Seed Variety";
    pub const SEED: &str = "SEED";
    pub const GERMINATION_PCT: &str = "GERMINATION VALUE(%)";
    pub const IRRIGATION_DONE: &str = "Irrigation Done";
    pub const CHANNELS_CONSTRUCTED: &str = "Channels Constructed";
    pub const SPRINKLER_INSTALLED: &str = "Sprinker installed";
    pub const TILLAGE: &str = "tillage";

    /// Full expected schema, validated once at load time.
    pub const EXPECTED: [&str; 13] = [
        FARM_NAME,
        DATE,
        ACTIVITY,
        PLOT_AREA_M2,
        DAP_KG,
        MOP_KG,
        SEED_VARIETY,
        SEED,
        GERMINATION_PCT,
        IRRIGATION_DONE,
        CHANNELS_CONSTRUCTED,
        SPRINKLER_INSTALLED,
        TILLAGE,
    ];
}

/// One farm-activity-on-a-date entry.
///
/// `farm_name` and `date` are required; everything else is optional and
/// absent cells are `None` (never zero). NaN numeric cells are normalized
/// to `None` at load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub farm_name: String,
    pub date: NaiveDate,
    pub activity: Option<String>,
    pub plot_area_m2: Option<f64>,
    pub dap_kg: Option<f64>,
    pub mop_kg: Option<f64>,
    pub seed_variety: Option<String>,
    pub seed_qty: Option<f64>,
    pub germination_pct: Option<f64>,
    pub irrigation_done: Option<String>,
    pub channels_constructed: Option<String>,
    pub sprinkler_installed: Option<String>,
    pub tillage: Option<String>,
}

/// The full in-memory table of farm-activity records for one session.
///
/// Ordered as loaded and immutable afterwards; filters clone the records
/// they keep into a new `Dataset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct farm names in first-seen order.
    pub fn farm_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.records {
            if !names.iter().any(|n| n == &record.farm_name) {
                names.push(record.farm_name.clone());
            }
        }
        names
    }

    /// Distinct non-absent seed varieties in first-seen order.
    pub fn seed_varieties(&self) -> Vec<String> {
        let mut varieties: Vec<String> = Vec::new();
        for record in &self.records {
            if let Some(variety) = &record.seed_variety {
                if !varieties.iter().any(|v| v == variety) {
                    varieties.push(variety.clone());
                }
            }
        }
        varieties
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
