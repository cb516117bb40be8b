//! Domain models for launch records and dashboard filter inputs.
//!
//! This module provides the core data structures shared by every layer of the
//! backend: the immutable launch record row, the two user-controlled filter
//! inputs (site selection and payload range), and the grouped count row
//! emitted by the aggregation functions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel value the dashboard sends for the all-sites selection.
pub const ALL_SITES: &str = "ALL";

/// One row of the launch records table.
///
/// Records are immutable once loaded; every derived structure is computed
/// fresh from slices of these rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
    /// 1 for a successful launch outcome, 0 for a failure.
    pub outcome_class: u8,
}

impl LaunchRecord {
    /// Whether this record counts as a successful launch.
    pub fn is_success(&self) -> bool {
        self.outcome_class == 1
    }
}

/// User-chosen launch-site filter: either every site or one specific site.
///
/// Selecting a site not present in the data is valid and simply matches no
/// records; it is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Build a selection from the raw dropdown value, mapping the `"ALL"`
    /// sentinel to [`SiteSelection::All`].
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The raw dropdown value for this selection.
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Whether the given record survives this selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Closed payload-mass interval in kilograms, inclusive on both ends.
///
/// A degenerate range (`low > high`) is representable and matches nothing;
/// the filter layer treats it as a valid empty query rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether the given payload mass falls inside the interval.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

/// One grouped count produced by the aggregation functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRow {
    pub group_key: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_selection_round_trip() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        assert_eq!(SiteSelection::All.as_value(), "ALL");
        assert_eq!(
            SiteSelection::Site("CCAFS".to_string()).as_value(),
            "CCAFS"
        );
    }

    #[test]
    fn test_payload_range_is_inclusive() {
        let range = PayloadRange::new(2000.0, 5000.0);
        assert!(range.contains(2000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(3500.0));
        assert!(!range.contains(1999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_degenerate_range_matches_nothing() {
        let range = PayloadRange::new(5000.0, 2000.0);
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
        assert!(!range.contains(2000.0));
    }

    #[test]
    fn test_selection_matches_record() {
        let record = LaunchRecord {
            launch_site: "CCAFS LC-40".to_string(),
            payload_mass_kg: 500.0,
            booster_version_category: "v1.0".to_string(),
            outcome_class: 0,
        };
        assert!(SiteSelection::All.matches(&record));
        assert!(SiteSelection::from_value("CCAFS LC-40").matches(&record));
        assert!(!SiteSelection::from_value("KSC LC-39A").matches(&record));
    }
}
