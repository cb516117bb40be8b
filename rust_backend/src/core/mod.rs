//! Core domain types for the launch records dashboard.

pub mod domain;

pub use domain::{AggregateRow, LaunchRecord, PayloadRange, SiteSelection, ALL_SITES};
