//! Handle to the calling thread's floating-point environment.
//!
//! The rounding mode lives in a hardware control register (MXCSR, FPCR, `frm`, ...)
//! that each thread owns a copy of. [`FloatEnv`] makes that ambient state visible in
//! signatures: reading takes `&self`, changing it takes `&mut self`, and the handle
//! cannot leave the thread it was created on.

use std::marker::PhantomData;

use crate::error::{FenvError, Result};
use crate::ffi;
use crate::mode::RoundingMode;

/// Opaque handle to the current thread's floating-point control.
///
/// Creating a handle is free and does not touch the register. Handles carry no state
/// of their own; two handles on the same thread observe the same mode.
#[derive(Debug)]
pub struct FloatEnv {
    _thread_bound: PhantomData<*const ()>,
}

// The receiver is the capability, not data; `&mut self` marks that a call mutates the
// thread's floating-point register.
#[allow(clippy::unused_self, clippy::needless_pass_by_ref_mut)]
impl FloatEnv {
    /// Returns a handle to the calling thread's floating-point environment.
    pub const fn current() -> Self {
        Self {
            _thread_bound: PhantomData,
        }
    }

    /// Reads the active rounding mode as a raw native code.
    ///
    /// The code is returned unchanged, so values installed by other code that fall
    /// outside the four standard modes are reported as-is.
    ///
    /// # Errors
    ///
    /// [`FenvError::Retrieval`] if the platform cannot determine the mode.
    pub fn rounding_mode(&self) -> Result<i32> {
        let code = ffi::get_round();
        if code < 0 {
            return Err(FenvError::Retrieval { code });
        }
        tracing::trace!(target: "roundmode::fenv", code, "queried rounding mode");
        Ok(code)
    }

    /// Reads the active rounding mode as a [`RoundingMode`].
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the active code is not one of the four standard modes.
    ///
    /// # Errors
    ///
    /// [`FenvError::Retrieval`] if the platform cannot determine the mode.
    pub fn mode(&self) -> Result<Option<RoundingMode>> {
        self.rounding_mode().map(RoundingMode::from_code)
    }

    /// Installs `code` as the active rounding mode.
    ///
    /// The code is handed to the platform without checking it against the standard
    /// modes; the platform alone decides what it supports. Setting the mode that is
    /// already active succeeds and changes nothing.
    ///
    /// # Arguments
    ///
    /// * `code` - Native rounding-mode code, e.g. [`crate::ROUND_UPWARD`].
    ///
    /// # Errors
    ///
    /// [`FenvError::InvalidRoundingMode`] carrying `code` and the platform status if
    /// the platform rejects it. The previous mode stays active in that case.
    pub fn set_rounding_mode(&mut self, code: i32) -> Result<()> {
        let status = ffi::set_round(code);
        if status != 0 {
            return Err(FenvError::InvalidRoundingMode { mode: code, code: status });
        }
        tracing::debug!(
            target: "roundmode::fenv",
            code,
            mode = ?RoundingMode::from_code(code),
            "installed rounding mode"
        );
        Ok(())
    }

    /// Installs a standard rounding mode.
    ///
    /// # Errors
    ///
    /// [`FenvError::InvalidRoundingMode`] if the platform rejects the mode, which only
    /// happens on targets without a hardware FPU.
    pub fn set_mode(&mut self, mode: RoundingMode) -> Result<()> {
        self.set_rounding_mode(mode.code())
    }

    /// Installs `code` until the returned guard is dropped.
    ///
    /// The previously active code is captured first and put back when the guard goes
    /// out of scope, including on early return or unwinding.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::rounding_mode`] or [`Self::set_rounding_mode`]; on error
    /// the mode is unchanged and no guard is created.
    pub fn scoped(&mut self, code: i32) -> Result<RoundingGuard<'_>> {
        let previous = self.rounding_mode()?;
        self.set_rounding_mode(code)?;
        Ok(RoundingGuard {
            env: self,
            previous,
        })
    }
}

/// Restores a saved rounding mode on drop. Created by [`FloatEnv::scoped`].
#[derive(Debug)]
#[must_use = "the previous rounding mode is restored as soon as the guard is dropped"]
pub struct RoundingGuard<'a> {
    env: &'a mut FloatEnv,
    previous: i32,
}

impl RoundingGuard<'_> {
    /// The code that will be restored on drop.
    pub const fn previous(&self) -> i32 {
        self.previous
    }
}

impl Drop for RoundingGuard<'_> {
    fn drop(&mut self) {
        // `previous` came from fegetround, so the platform already accepted it once.
        if let Err(err) = self.env.set_rounding_mode(self.previous) {
            tracing::warn!(target: "roundmode::fenv", %err, "failed to restore rounding mode");
        }
    }
}
