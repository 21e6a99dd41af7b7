//! Farmdash - farm operations CSV analysis
//!
//! The tabular transform layer behind a farm-operations dashboard: load a
//! flat CSV of farm-activity records, apply the user's filter selections,
//! and derive the tables and series the host's table/chart/Gantt widgets
//! display. Rendering and the widget layer are the host's concern; this
//! crate only defines the shapes handed across that boundary.

pub mod data;
pub mod transform;

pub use data::{filter, parse_day_first, Dataset, FilterState, LoadError, Record};
pub use transform::{
    activity_over_time, farm_detail, fertilizer_table, germination_by_farm, irrigation_table,
    schedule_rows, summarize, tillage_counts, CountRow, CountTable, SummaryReport,
};
