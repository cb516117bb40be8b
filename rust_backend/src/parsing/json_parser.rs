use anyhow::Result;
use serde::Deserialize;

use crate::core::domain::LaunchRecord;

/// Raw JSON object for one launch record. Field names match the CSV header
/// so the host can ship the same table in either format.
#[derive(Debug, Deserialize)]
struct RawJsonRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    outcome_class: i64,
}

impl RawJsonRecord {
    fn into_record(self, index: usize) -> Result<LaunchRecord> {
        match self.outcome_class {
            0 | 1 => Ok(LaunchRecord {
                launch_site: self.launch_site,
                payload_mass_kg: self.payload_mass_kg,
                booster_version_category: self.booster_version_category,
                outcome_class: self.outcome_class as u8,
            }),
            other => anyhow::bail!(
                "JSON record {}: 'class' must be 0 or 1, got {}",
                index,
                other
            ),
        }
    }
}

/// Parse launch records from a JSON array string.
///
/// Uses `serde_path_to_error` so a malformed field is reported with its
/// location inside the document rather than just a type mismatch.
pub fn parse_launch_json_str(json_str: &str) -> Result<Vec<LaunchRecord>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let raw: Vec<RawJsonRecord> = serde_path_to_error::deserialize(deserializer)
        .map_err(|e| anyhow::anyhow!("Failed to parse launch records JSON at {}: {}", e.path(), e.inner()))?;

    raw.into_iter()
        .enumerate()
        .map(|(idx, record)| record.into_record(idx))
        .collect()
}
