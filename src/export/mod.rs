//! Presentation helpers: CSV export and human-readable formatting.
//!
//! The engine never rounds; rounding to cents happens here, at the edge.

mod csv;
mod format;

pub use csv::{export_csv, export_file_name};
pub use format::{format_duration, format_money, round_currency};
