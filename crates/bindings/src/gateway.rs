//! Rounding-mode gateway functions.
//!
//! Both functions act on the floating-point environment of the Python thread that calls
//! them. The GIL is held throughout; each call is a single register access.

use pyo3::prelude::*;
use roundmode_core::FloatEnv;

use crate::conversion::py_to_mode_code;
use crate::errors::to_py_err;

/// Returns the calling thread's rounding mode as its native integer code.
///
/// # Returns
///
/// One of the `ROUND_*` constants, or another platform code if foreign code installed
/// one.
#[pyfunction]
#[pyo3(name = "getRoundingMode")]
pub fn get_rounding_mode() -> PyResult<i32> {
    FloatEnv::current().rounding_mode().map_err(to_py_err)
}

/// Installs a rounding mode on the calling thread.
///
/// # Arguments
///
/// * `value` - An integer code (normally a `ROUND_*` constant) or any object with
///   `__index__`, an integral float, a numeric string or a constant name.
///
/// # Errors
///
/// * `InvalidArgumentError` if `value` is missing or not integer-like; the mode is
///   left untouched.
/// * `InvalidRoundingModeError` if the platform rejects the code; the previous mode
///   stays active.
#[pyfunction]
#[pyo3(name = "setRoundingMode", signature = (value=None))]
pub fn set_rounding_mode(value: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
    let code = py_to_mode_code(value).map_err(to_py_err)?;
    FloatEnv::current().set_rounding_mode(code).map_err(to_py_err)
}
