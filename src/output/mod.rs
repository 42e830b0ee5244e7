//! Output formatting for CIDR blocks.
//!
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - field formatting helpers

mod csv;
mod terminal;

pub use csv::{csv_header, csv_lines};
pub use terminal::format_field;

use crate::models::Ipv4;
use clap::ValueEnum;
use std::error::Error;

/// How computed blocks are written to stdout.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `address/prefix` per line.
    #[default]
    Plain,
    /// Quoted CSV with first/last address and size.
    Csv,
    /// JSON array of `address/prefix` strings.
    Json,
}

/// Render blocks into output lines for the chosen format.
pub fn render(blocks: &[Ipv4], format: OutputFormat) -> Result<Vec<String>, Box<dyn Error>> {
    let lines: Vec<String> = match format {
        OutputFormat::Plain => blocks.iter().map(|b| b.to_string()).collect(),
        OutputFormat::Csv => csv_lines(blocks),
        OutputFormat::Json => vec![serde_json::to_string(blocks)
            .map_err(|e| format!("Error serializing JSON: {e}"))?],
    };
    Ok(lines)
}
