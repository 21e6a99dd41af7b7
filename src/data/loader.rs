//! CSV Data Loader Module
//! Loads the farm-operations CSV with Polars, validates the expected column
//! schema up front, and extracts typed records.

use chrono::NaiveDate;
use log::{debug, info};
use polars::prelude::*;
use thiserror::Error;

use super::record::{columns, Dataset, Record};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing expected column: {0}")]
    MissingColumn(String),
    #[error("Row {row}: cannot parse date {value:?} (expected day-first, e.g. 31-12-2024)")]
    Date { row: usize, value: String },
    #[error("Row {row}: missing value for required column {column}")]
    MissingValue { row: usize, column: &'static str },
}

/// Day-first formats accepted for the `Date` column, with ISO as a fallback.
const DATE_FORMATS: [&str; 5] = ["%d-%m-%Y", "%d/%m/%Y", "%d-%m-%y", "%d/%m/%y", "%Y-%m-%d"];

/// Parse a date cell under day-first interpretation.
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

impl Dataset {
    /// Load a farm-operations CSV file.
    pub fn load(file_path: &str) -> Result<Self, LoadError> {
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let dataset = Self::from_dataframe(&df)?;
        info!("loaded {} records from {}", dataset.len(), file_path);
        Ok(dataset)
    }

    /// Extract typed records from an already-loaded DataFrame.
    ///
    /// The full expected schema is validated before any row is read, so a
    /// missing column surfaces here rather than mid-aggregation.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, LoadError> {
        validate_schema(df)?;
        debug!(
            "schema validated: {} expected columns present",
            columns::EXPECTED.len()
        );

        let farm_names = string_column(df, columns::FARM_NAME)?;
        let dates = string_column(df, columns::DATE)?;
        let activities = string_column(df, columns::ACTIVITY)?;
        let seed_varieties = string_column(df, columns::SEED_VARIETY)?;
        let irrigation = string_column(df, columns::IRRIGATION_DONE)?;
        let channels = string_column(df, columns::CHANNELS_CONSTRUCTED)?;
        let sprinklers = string_column(df, columns::SPRINKLER_INSTALLED)?;
        let tillage = string_column(df, columns::TILLAGE)?;

        let plot_areas = numeric_column(df, columns::PLOT_AREA_M2)?;
        let dap = numeric_column(df, columns::DAP_KG)?;
        let mop = numeric_column(df, columns::MOP_KG)?;
        let seed_qty = numeric_column(df, columns::SEED)?;
        let germination = numeric_column(df, columns::GERMINATION_PCT)?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            // 1-based data rows in error messages
            let row = i + 1;

            let farm_name = farm_names[i].clone().ok_or(LoadError::MissingValue {
                row,
                column: columns::FARM_NAME,
            })?;
            let raw_date = dates[i].clone().ok_or(LoadError::MissingValue {
                row,
                column: columns::DATE,
            })?;
            let date = parse_day_first(&raw_date).ok_or(LoadError::Date {
                row,
                value: raw_date,
            })?;

            records.push(Record {
                farm_name,
                date,
                activity: activities[i].clone(),
                plot_area_m2: plot_areas[i],
                dap_kg: dap[i],
                mop_kg: mop[i],
                seed_variety: seed_varieties[i].clone(),
                seed_qty: seed_qty[i],
                germination_pct: germination[i],
                irrigation_done: irrigation[i].clone(),
                channels_constructed: channels[i].clone(),
                sprinkler_installed: sprinklers[i].clone(),
                tillage: tillage[i].clone(),
            });
        }

        Ok(Dataset::new(records))
    }
}

/// Check that every expected column is present, naming the first one missing.
fn validate_schema(df: &DataFrame) -> Result<(), LoadError> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for expected in columns::EXPECTED {
        if !names.iter().any(|n| n == expected) {
            return Err(LoadError::MissingColumn(expected.to_string()));
        }
    }
    Ok(())
}

/// Extract an optional-string column; nulls become `None`.
fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoadError> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let val = series.get(i)?;
        if val.is_null() {
            values.push(None);
        } else {
            values.push(Some(val.to_string().trim_matches('"').to_string()));
        }
    }
    Ok(values)
}

/// Extract an optional-numeric column; nulls and NaN become `None`.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, LoadError> {
    let series = df.column(name)?;
    let as_f64 = series.cast(&DataType::Float64)?;
    let ca = as_f64.f64()?;
    let mut values = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        values.push(ca.get(i).filter(|v| !v.is_nan()));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_first_dates() {
        let date = parse_day_first("02-01-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        let slashed = parse_day_first("02/01/2024").unwrap();
        assert_eq!(slashed, date);

        let iso = parse_day_first("2024-01-02").unwrap();
        assert_eq!(iso, date);
    }

    #[test]
    fn rejects_month_first_dates() {
        assert!(parse_day_first("13-01-2024").is_some());
        assert!(parse_day_first("01-13-2024").is_none());
        assert!(parse_day_first("not a date").is_none());
    }
}
