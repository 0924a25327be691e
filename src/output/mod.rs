//! Rendering poll results

mod csv;
mod table;

pub use self::csv::render_csv;
pub use table::{format_thousands, render_table};

use crate::error::{OutputError, Result};
use crate::rpc::ChainStatus;
use std::str::FromStr;

/// Output format for a batch of statuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(OutputError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Render a batch in the given format
pub fn render(statuses: &[ChainStatus], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(statuses)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(statuses)? + "\n"),
        OutputFormat::Csv => render_csv(statuses),
    }
}
