//! Farmdash CLI - load a farm-operations CSV, apply filters, and print a
//! chosen view. A stand-in consumer at the rendering boundary; the JSON
//! output is exactly what a dashboard frontend would receive.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use farmdash::{farm_detail, parse_day_first, summarize, transform, Dataset, FilterState};

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, ValueEnum)]
enum View {
    Summary,
    Germination,
    Activity,
    Irrigation,
    Fertilizer,
    Tillage,
    Schedule,
}

#[derive(Parser)]
#[command(about = "Analyze a farm-operations CSV and print dashboard views.")]
struct Args {
    /// Farm operations CSV file.
    csv: PathBuf,

    /// Keep records from this date on (day-first, e.g. 01-06-2024).
    #[arg(long)]
    from: Option<String>,

    /// Keep records up to and including this date (day-first).
    #[arg(long)]
    to: Option<String>,

    /// Seed varieties to keep (repeatable; none means no filtering).
    #[arg(long = "variety")]
    varieties: Vec<String>,

    /// Drill into one farm (micro view) instead of the aggregate views.
    #[arg(long)]
    farm: Option<String>,

    /// Which aggregate view to print.
    #[arg(long, value_enum, default_value = "summary")]
    view: View,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn parse_date_arg(value: &str, flag: &str) -> Result<chrono::NaiveDate> {
    parse_day_first(value)
        .with_context(|| format!("--{flag}: cannot parse {value:?} as a day-first date"))
}

fn print_view<T: Serialize + std::fmt::Debug>(rows: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Text => {
            for row in rows {
                println!("{row:?}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let path = args.csv.to_string_lossy().to_string();
    let dataset = Dataset::load(&path).with_context(|| format!("loading {path}"))?;

    let date_range = match (&args.from, &args.to) {
        (None, None) => None,
        (from, to) => {
            let start = match from {
                Some(v) => parse_date_arg(v, "from")?,
                None => chrono::NaiveDate::MIN,
            };
            let end = match to {
                Some(v) => parse_date_arg(v, "to")?,
                None => chrono::NaiveDate::MAX,
            };
            Some((start, end))
        }
    };

    let filters = FilterState {
        date_range,
        seed_varieties: args.varieties.iter().cloned().collect::<BTreeSet<_>>(),
    };
    let view_data = filters.apply(&dataset);

    if view_data.is_empty() {
        eprintln!("warning: no records match the active filters");
    }

    if let Some(farm_name) = &args.farm {
        if !view_data.farm_names().iter().any(|f| f == farm_name) {
            bail!(
                "unknown farm {farm_name:?}; available: {}",
                view_data.farm_names().join(", ")
            );
        }
        let detail = farm_detail(&view_data, farm_name);
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
            OutputFormat::Text => println!("{detail:#?}"),
        }
        return Ok(());
    }

    match args.view {
        View::Summary => {
            let report = summarize(&view_data);
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => {
                    for row in report.rows() {
                        match row.value {
                            Some(value) => println!("{:<32} {value}", row.metric),
                            None => println!("{:<32} no data", row.metric),
                        }
                    }
                    println!();
                    println!("Activities:");
                    for count in &report.activity_counts {
                        println!("  {:<24} {}", count.value, count.count);
                    }
                    println!("Seed varieties: {}", report.seed_varieties.join(", "));
                }
            }
        }
        View::Germination => print_view(&transform::germination_by_farm(&view_data), &args.format)?,
        View::Activity => print_view(&transform::activity_over_time(&view_data), &args.format)?,
        View::Irrigation => print_view(&transform::irrigation_table(&view_data), &args.format)?,
        View::Fertilizer => print_view(&transform::fertilizer_table(&view_data), &args.format)?,
        View::Tillage => print_view(&transform::tillage_counts(&view_data), &args.format)?,
        View::Schedule => print_view(&transform::schedule_rows(&view_data), &args.format)?,
    }

    Ok(())
}
