//! API types exchanged with the dashboard front end.
//!
//! Everything here is a plain serde DTO. The front end receives these as
//! JSON through the binding layer and never sees internal domain types.

pub mod types;

pub use types::{
    ChartData, ChartDescriptor, ChartEncoding, ChartKind, DashboardControls, PayloadSliderConfig,
    ScatterPoint, SiteOption,
};
