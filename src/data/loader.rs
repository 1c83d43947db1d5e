//! CSV Data Loader Module
//! Loads the expenditure CSV with Polars and extracts typed records.

use polars::prelude::*;
use thiserror::Error;

use super::dataset::{Dataset, Record};

pub const ENTITY_COL: &str = "Entity";
pub const YEAR_COL: &str = "Year";
pub const VALUE_COL: &str = "military_expenditure";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("No usable rows in file")]
    NoData,
}

/// Load a CSV file and extract the expenditure records.
pub fn load_csv(path: &str) -> Result<Dataset, LoaderError> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    extract_records(&df)
}

/// Pull (Entity, Year, military_expenditure) rows out of a DataFrame.
/// Rows with a null entity or a year/value that fails numeric coercion
/// are dropped; the drop count is logged.
pub fn extract_records(df: &DataFrame) -> Result<Dataset, LoaderError> {
    let entity_series = df
        .column(ENTITY_COL)
        .map_err(|_| LoaderError::MissingColumn(ENTITY_COL))?;
    let year_series = df
        .column(YEAR_COL)
        .map_err(|_| LoaderError::MissingColumn(YEAR_COL))?;
    let value_series = df
        .column(VALUE_COL)
        .map_err(|_| LoaderError::MissingColumn(VALUE_COL))?;

    let year_f64 = year_series.cast(&DataType::Float64)?;
    let year_ca = year_f64.f64()?;
    let value_f64 = value_series.cast(&DataType::Float64)?;
    let value_ca = value_f64.f64()?;

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;

    for i in 0..df.height() {
        match (entity_series.get(i), year_ca.get(i), value_ca.get(i)) {
            (Ok(e), Some(y), Some(v)) if !e.is_null() && !y.is_nan() && !v.is_nan() => {
                records.push(Record {
                    entity: e.to_string().trim_matches('"').to_string(),
                    year: y as i32,
                    expenditure: v,
                });
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} rows with missing or non-numeric fields");
    }
    if records.is_empty() {
        return Err(LoaderError::NoData);
    }

    Ok(Dataset::from_records(records))
}
