//! CSV output writer

use crate::error::{OutputError, Result};
use crate::rpc::ChainStatus;

/// Render statuses as `url,height,latency` rows; unknown values are empty cells
pub fn render_csv(statuses: &[ChainStatus]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["url", "height", "latency"])
        .map_err(|e| OutputError::CsvWrite(e.to_string()))?;

    for status in statuses {
        writer
            .write_record([
                status.url.clone(),
                optional(status.height),
                optional(status.latency),
            ])
            .map_err(|e| OutputError::CsvWrite(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::CsvWrite(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::CsvWrite(e.to_string()).into())
}

fn optional(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
