//! Charts module - Chart rendering

pub mod bar;
mod format;
pub mod line;
mod scale;

pub use bar::BarSeries;
pub use scale::ScaleMode;
