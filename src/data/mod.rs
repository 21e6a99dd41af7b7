//! Data module - CSV loading, typed records, and filtering

pub mod filter;
mod loader;
mod record;

pub use filter::FilterState;
pub use loader::{parse_day_first, LoadError};
pub use record::{columns, Dataset, Record};
