use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::core::domain::LaunchRecord;
use crate::parsing::csv_parser;
use crate::parsing::json_parser;

/// Represents the source format of the launch records table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSourceType {
    Json,
    Csv,
}

/// Result of loading the launch records table.
#[derive(Debug)]
pub struct RecordLoadResult {
    pub records: Vec<LaunchRecord>,
    pub source_type: RecordSourceType,
    pub num_records: usize,
    /// SHA-256 of the raw input bytes, hex encoded. Identifies the exact
    /// dataset a running dashboard was loaded from.
    pub checksum: String,
}

impl RecordLoadResult {
    pub fn new(records: Vec<LaunchRecord>, source_type: RecordSourceType, checksum: String) -> Self {
        let num_records = records.len();
        Self {
            records,
            source_type,
            num_records,
            checksum,
        }
    }
}

/// Unified interface for loading launch records from JSON or CSV.
pub struct RecordLoader;

impl RecordLoader {
    /// Load launch records from a file (auto-detects JSON or CSV).
    pub fn load_from_file(path: &Path) -> Result<RecordLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Self::load_from_json(path),
            "csv" => Self::load_from_csv(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load launch records from a CSV file.
    pub fn load_from_csv(csv_path: &Path) -> Result<RecordLoadResult> {
        let text = fs::read_to_string(csv_path)
            .with_context(|| format!("Failed to read CSV file {}", csv_path.display()))?;
        Self::load_from_csv_str(&text)
    }

    /// Load launch records from CSV text.
    pub fn load_from_csv_str(csv_text: &str) -> Result<RecordLoadResult> {
        let records =
            csv_parser::parse_launch_csv_str(csv_text).context("Failed to parse CSV records")?;
        let result =
            RecordLoadResult::new(records, RecordSourceType::Csv, checksum_hex(csv_text.as_bytes()));
        log::info!(
            "Loaded {} launch records from CSV (checksum {})",
            result.num_records,
            result.checksum
        );
        Ok(result)
    }

    /// Load launch records from a JSON file.
    pub fn load_from_json(json_path: &Path) -> Result<RecordLoadResult> {
        let text = fs::read_to_string(json_path)
            .with_context(|| format!("Failed to read JSON file {}", json_path.display()))?;
        Self::load_from_json_str(&text)
    }

    /// Load launch records from a JSON array string.
    pub fn load_from_json_str(json_str: &str) -> Result<RecordLoadResult> {
        let records =
            json_parser::parse_launch_json_str(json_str).context("Failed to parse JSON records")?;
        let result =
            RecordLoadResult::new(records, RecordSourceType::Json, checksum_hex(json_str.as_bytes()));
        log::info!(
            "Loaded {} launch records from JSON (checksum {})",
            result.num_records,
            result.checksum
        );
        Ok(result)
    }
}

fn checksum_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
