//! Host floating-point rounding-mode control.
//!
//! This crate is a thin, stateless gateway over the C floating-point environment
//! (`<fenv.h>`). It provides:
//! 1. **Query:** [`FloatEnv::rounding_mode`] reads the active IEEE-754 rounding mode.
//! 2. **Control:** [`FloatEnv::set_rounding_mode`] installs a new mode, surfacing platform
//!    rejections as [`FenvError::InvalidRoundingMode`].
//! 3. **Constants:** [`ROUND_TONEAREST`], [`ROUND_TOWARDZERO`], [`ROUND_DOWNWARD`] and
//!    [`ROUND_UPWARD`], the platform's native encodings of the four standard modes.
//! 4. **Coercion:** [`coerce`] turns loosely typed input (text, floats) into a mode code
//!    or an [`FenvError::InvalidArgument`].
//!
//! The rounding mode is per-thread machine state. [`FloatEnv`] is a handle to the calling
//! thread's copy of it and is deliberately neither `Send` nor `Sync`.
//!
//! ```
//! use roundmode_core::{FloatEnv, ROUND_TONEAREST, ROUND_UPWARD};
//!
//! let mut env = FloatEnv::current();
//! env.set_rounding_mode(ROUND_UPWARD)?;
//! assert_eq!(env.rounding_mode()?, ROUND_UPWARD);
//! env.set_rounding_mode(ROUND_TONEAREST)?;
//! # Ok::<(), roundmode_core::FenvError>(())
//! ```

/// Parse-or-reject conversion of loosely typed mode arguments.
pub mod coerce;
/// Handle to the calling thread's floating-point environment.
pub mod env;
/// Error type shared by every gateway operation.
pub mod error;
/// Raw `<fenv.h>` bindings and per-target mode encodings.
pub mod ffi;
/// Typed rounding-mode enumeration.
pub mod mode;

pub use crate::env::{FloatEnv, RoundingGuard};
pub use crate::error::{FenvError, Result};
pub use crate::mode::RoundingMode;

/// Native code for round-to-nearest (`FE_TONEAREST`).
pub const ROUND_TONEAREST: i32 = ffi::FE_TONEAREST;
/// Native code for round-toward-zero (`FE_TOWARDZERO`).
pub const ROUND_TOWARDZERO: i32 = ffi::FE_TOWARDZERO;
/// Native code for round-toward-negative-infinity (`FE_DOWNWARD`).
pub const ROUND_DOWNWARD: i32 = ffi::FE_DOWNWARD;
/// Native code for round-toward-positive-infinity (`FE_UPWARD`).
pub const ROUND_UPWARD: i32 = ffi::FE_UPWARD;

/// Reads the calling thread's rounding mode.
///
/// Shorthand for `FloatEnv::current().rounding_mode()`.
pub fn get_rounding_mode() -> Result<i32> {
    FloatEnv::current().rounding_mode()
}

/// Installs `code` as the calling thread's rounding mode.
///
/// Shorthand for `FloatEnv::current().set_rounding_mode(code)`.
pub fn set_rounding_mode(code: i32) -> Result<()> {
    FloatEnv::current().set_rounding_mode(code)
}
