//! Python-to-Rust mode argument conversion.
//!
//! Dispatches on the Python type and hands the payload to `roundmode_core::coerce`, so
//! the same parse-or-reject rules apply whatever the caller passes:
//!
//! | Python type     | Rule                                                   |
//! |-----------------|--------------------------------------------------------|
//! | `None` / absent | rejected as a missing mode                             |
//! | `float`         | finite and integral, must fit in a C `int`             |
//! | `str`           | decimal, `0x` hex, or a constant name (`"ROUND_UPWARD"`) |
//! | anything else   | converted through `__index__` (`int`, `bool`, `numpy.int64`, ...), must fit in a C `int` |

use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyString};
use roundmode_core::FenvError;
use roundmode_core::coerce::{mode_code_from_f64, mode_code_from_i64, parse_mode_code};

/// Converts an optional Python argument into a native mode code.
///
/// # Arguments
///
/// * `value` - The argument as received, `None` when omitted or passed as `None`.
///
/// # Returns
///
/// The integer code, `FenvError::MissingArgument` for `None`, or
/// `FenvError::InvalidArgument` naming a value that has no integer form.
pub fn py_to_mode_code(value: Option<&Bound<'_, PyAny>>) -> Result<i32, FenvError> {
    let Some(value) = value else {
        return Err(FenvError::MissingArgument);
    };

    if let Ok(float) = value.downcast::<PyFloat>() {
        return mode_code_from_f64(float.value());
    }

    if let Ok(text) = value.downcast::<PyString>() {
        let text = text
            .to_cow()
            .map_err(|_| FenvError::invalid_argument(describe(value)))?;
        return parse_mode_code(&text);
    }

    value
        .extract::<i64>()
        .map_err(|_| FenvError::invalid_argument(describe(value)))
        .and_then(mode_code_from_i64)
}

fn describe(value: &Bound<'_, PyAny>) -> String {
    value
        .repr()
        .map_or_else(|_| String::from("<unprintable object>"), |repr| repr.to_string())
}
