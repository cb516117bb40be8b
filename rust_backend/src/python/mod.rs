//! Python bindings for the launch records dashboard backend.
//!
//! This module exposes the backend to the Python front end via PyO3. Each
//! function is a thin wrapper: parse primitives at the boundary, call the
//! store/service layer, and hand back JSON text the front end feeds straight
//! into its charting library.
//!
//! Route-name constants are exported alongside the functions so Python call
//! sites can reference them without hard-coded strings.

use pyo3::prelude::*;
use std::path::Path;

use crate::config::DashboardConfig;
use crate::core::domain::{PayloadRange, SiteSelection};
use crate::services;
use crate::store;

/// Route function name constants.
pub const GET_SUCCESS_PIE_DATA: &str = "get_success_pie_data";
pub const GET_PAYLOAD_SCATTER_DATA: &str = "get_payload_scatter_data";
pub const GET_DASHBOARD_CONTROLS: &str = "get_dashboard_controls";

/// Initialize the global Record Store from a dataset file (CSV or JSON).
///
/// Must be called once before any chart query. Idempotent.
#[pyfunction]
pub fn init_record_store(file_path: &str) -> PyResult<()> {
    store::init_record_store(Path::new(file_path)).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!(
            "Failed to initialize record store: {}",
            e
        ))
    })
}

/// Initialize the global Record Store from a TOML config file.
#[pyfunction]
pub fn init_record_store_from_config(config_path: &str) -> PyResult<()> {
    let config = DashboardConfig::from_file(Path::new(config_path))
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(format!("{:#}", e)))?;
    store::init_record_store(&config.dataset.path).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!(
            "Failed to initialize record store: {}",
            e
        ))
    })
}

/// Distinct launch sites in the loaded dataset, in first-seen order.
#[pyfunction]
pub fn get_launch_sites() -> PyResult<Vec<String>> {
    Ok(get_store()?.launch_sites())
}

/// Minimum and maximum payload mass observed in the loaded dataset.
#[pyfunction]
pub fn get_payload_bounds() -> PyResult<(f64, f64)> {
    Ok(get_store()?.payload_bounds())
}

/// Success pie descriptor for the given site value (`"ALL"` or a site name),
/// returned as JSON text.
#[pyfunction]
pub fn get_success_pie_data(site: &str) -> PyResult<String> {
    let store = get_store()?;
    let descriptor = services::success_pie(store.records(), &SiteSelection::from_value(site));
    to_json(&descriptor)
}

/// Payload scatter descriptor for the given site value and payload range,
/// returned as JSON text.
#[pyfunction]
pub fn get_payload_scatter_data(site: &str, payload_low: f64, payload_high: f64) -> PyResult<String> {
    let store = get_store()?;
    let descriptor = services::payload_scatter(
        store.records(),
        &SiteSelection::from_value(site),
        &PayloadRange::new(payload_low, payload_high),
    );
    to_json(&descriptor)
}

/// Selector options and slider configuration for the dashboard layout,
/// returned as JSON text.
#[pyfunction]
pub fn get_dashboard_controls() -> PyResult<String> {
    to_json(&services::dashboard_controls(get_store()?))
}

fn get_store() -> PyResult<&'static store::RecordStore> {
    store::record_store().map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to serialize result: {}", e))
    })
}

/// Register all dashboard functions and constants with the Python module.
pub fn register_api_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_record_store, m)?)?;
    m.add_function(wrap_pyfunction!(init_record_store_from_config, m)?)?;
    m.add_function(wrap_pyfunction!(get_launch_sites, m)?)?;
    m.add_function(wrap_pyfunction!(get_payload_bounds, m)?)?;
    m.add_function(wrap_pyfunction!(get_success_pie_data, m)?)?;
    m.add_function(wrap_pyfunction!(get_payload_scatter_data, m)?)?;
    m.add_function(wrap_pyfunction!(get_dashboard_controls, m)?)?;

    m.add("GET_SUCCESS_PIE_DATA", GET_SUCCESS_PIE_DATA)?;
    m.add("GET_PAYLOAD_SCATTER_DATA", GET_PAYLOAD_SCATTER_DATA)?;
    m.add("GET_DASHBOARD_CONTROLS", GET_DASHBOARD_CONTROLS)?;

    Ok(())
}
