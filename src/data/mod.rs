//! Data module - CSV loading and the in-memory dataset

mod dataset;
mod loader;

pub use dataset::{Dataset, EntitySeries, Record};
pub use loader::{extract_records, load_csv, LoaderError};
