//! Python bindings for the rounding-mode gateway.
//!
//! This crate exposes `roundmode-core` to Python via PyO3 under the names scripting
//! callers already use. It provides:
//! 1. **Gateway:** `getRoundingMode` and `setRoundingMode`.
//! 2. **Constants:** `ROUND_TONEAREST`, `ROUND_TOWARDZERO`, `ROUND_DOWNWARD`, `ROUND_UPWARD`.
//! 3. **Exceptions:** `InvalidArgumentError`, `InvalidRoundingModeError`,
//!    `RoundingModeRetrievalError`.
//! 4. **Utilities:** `version` and `modes`.

use pyo3::prelude::*;
use roundmode_core::RoundingMode;

/// Python object to mode-code conversion.
pub mod conversion;
/// Python exception classes and the `FenvError` mapping.
pub mod errors;
/// `getRoundingMode` / `setRoundingMode`.
pub mod gateway;
/// Log subscriber installed on import.
pub mod logging;
/// Utility functions (version, mode table).
pub mod utils;

/// Registers the gateway functions, constants and exception classes on `m`.
///
/// Called from the `#[pymodule]` entry point; also usable to embed the gateway in
/// another extension module.
///
/// # Arguments
///
/// * `m` - The Python module to populate.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_roundmode_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(gateway::get_rounding_mode, m)?)?;
    m.add_function(wrap_pyfunction!(gateway::set_rounding_mode, m)?)?;

    for mode in RoundingMode::ALL {
        m.add(mode.name(), mode.code())?;
    }

    let py = m.py();
    m.add("InvalidArgumentError", py.get_type::<errors::InvalidArgumentError>())?;
    m.add(
        "InvalidRoundingModeError",
        py.get_type::<errors::InvalidRoundingModeError>(),
    )?;
    m.add(
        "RoundingModeRetrievalError",
        py.get_type::<errors::RoundingModeRetrievalError>(),
    )?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::modes, m)?)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let _ = logging::init();
    register_roundmode_module(m)
}
