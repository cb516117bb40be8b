//! Filtering and aggregation over the launch records table.
//!
//! All functions in this module are pure: they take a slice of records and
//! return freshly built output, never touching global state. Filters are
//! stable (surviving records keep their relative order) and an empty result
//! is always valid output, never an error.
//!
//! # Modules
//!
//! - [`filtering`]: Narrow the record set by site and payload range
//! - [`aggregation`]: Grouped counts for the pie views

pub mod aggregation;
pub mod filtering;

pub use aggregation::{outcome_breakdown, success_count_by_site};
pub use filtering::{filter_by_payload_range, filter_by_site, filter_records};
