//! Utility functions exposed to Python.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use roundmode_core::RoundingMode;

/// Returns the extension's version string (e.g., for diagnostics).
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the standard modes as a `{constant name: code}` dict.
///
/// Handy for printing the platform's encoding, which differs between architectures.
#[pyfunction]
pub fn modes(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let table = PyDict::new(py);
    for mode in RoundingMode::ALL {
        table.set_item(mode.name(), mode.code())?;
    }
    Ok(table)
}
