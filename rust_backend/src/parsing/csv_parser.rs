use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::domain::LaunchRecord;

/// Column names of the launch records table, as they appear in the CSV header.
pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";
pub const OUTCOME_CLASS_COLUMN: &str = "class";

/// Raw CSV row as it appears in the dataset. Columns beyond the four the
/// dashboard consumes are ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct RawCsvRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    outcome_class: i64,
}

impl RawCsvRecord {
    fn into_record(self, row: usize) -> Result<LaunchRecord> {
        match self.outcome_class {
            0 | 1 => Ok(LaunchRecord {
                launch_site: self.launch_site,
                payload_mass_kg: self.payload_mass_kg,
                booster_version_category: self.booster_version_category,
                outcome_class: self.outcome_class as u8,
            }),
            other => anyhow::bail!(
                "CSV row {}: '{}' must be 0 or 1, got {}",
                row,
                OUTCOME_CLASS_COLUMN,
                other
            ),
        }
    }
}

/// Parse launch records from CSV text with a header row.
pub fn parse_launch_csv_str(csv_text: &str) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawCsvRecord>().enumerate() {
        // Row numbering is 1-based and counts data rows, not the header.
        let row_number = idx + 1;
        let raw = row.with_context(|| format!("Failed to parse CSV row {}", row_number))?;
        records.push(raw.into_record(row_number)?);
    }
    Ok(records)
}
