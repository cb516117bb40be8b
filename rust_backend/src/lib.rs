//! Launch records dashboard backend.
//!
//! Compute core of an interactive launch-records dashboard: the immutable
//! Record Store, pure filtering and aggregation over it, chart descriptor
//! builders, and the reactive session binding filter inputs to chart
//! outputs. Rendering is the front end's job; this crate only produces the
//! data the charts are drawn from.
//!
//! # Modules
//!
//! - [`core`]: Domain types (records, selections, ranges)
//! - [`parsing`]: CSV/JSON parsers for the input table
//! - [`io`]: Dataset loading with format detection and checksumming
//! - [`store`]: Process-wide read-only Record Store
//! - [`transformations`]: Pure filter and aggregation functions
//! - [`api`]: Chart descriptor and control DTOs
//! - [`services`]: Chart descriptor builders
//! - [`session`]: Reactive input/output binding per user session
//! - [`config`]: TOML configuration

pub mod api;
pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod services;
pub mod session;
pub mod store;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Launch records dashboard backend - filtering, aggregation and chart data.
#[cfg(feature = "python")]
#[pymodule]
fn launchdash_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_api_functions(m)
}
