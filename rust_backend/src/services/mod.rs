//! Service layer building chart descriptors and control metadata.
//!
//! Services sit between the pure transformation functions and the binding
//! layer: they apply the filters the view calls for, run the matching
//! aggregation, and wrap the result in a [`ChartDescriptor`] with the exact
//! title the dashboard contract requires.
//!
//! [`ChartDescriptor`]: crate::api::types::ChartDescriptor

pub mod controls;
pub mod payload_scatter;
pub mod success_pie;

pub use controls::dashboard_controls;
pub use payload_scatter::payload_scatter;
pub use success_pie::success_pie;
