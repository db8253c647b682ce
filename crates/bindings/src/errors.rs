//! Python exception classes.
//!
//! Each `FenvError` variant has its own class so callers can catch precisely. The
//! argument and platform-rejection classes derive from `ValueError`, matching what
//! Python code expects from a bad argument.

use pyo3::create_exception;
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use roundmode_core::FenvError;

create_exception!(
    _core,
    InvalidArgumentError,
    PyValueError,
    "setRoundingMode got no value, or one that could not be read as an integer."
);

create_exception!(
    _core,
    InvalidRoundingModeError,
    PyValueError,
    "The platform rejected the requested rounding-mode code."
);

create_exception!(
    _core,
    RoundingModeRetrievalError,
    PyOSError,
    "The platform could not report the active rounding mode."
);

/// Converts a gateway error into the matching Python exception.
///
/// The message is the error's `Display` output, so platform rejections read
/// `rounding mode <mode> invalid (got error code <code>)`.
pub fn to_py_err(err: FenvError) -> PyErr {
    let message = err.to_string();
    match err {
        FenvError::MissingArgument | FenvError::InvalidArgument { .. } => {
            InvalidArgumentError::new_err(message)
        }
        FenvError::InvalidRoundingMode { .. } => InvalidRoundingModeError::new_err(message),
        FenvError::Retrieval { .. } => RoundingModeRetrievalError::new_err(message),
    }
}
