//! Gateway error definitions.
//!
//! Every failure the gateway can report maps to one variant here:
//! 1. **Argument errors:** a missing mode, or input that cannot be read as an integer code.
//! 2. **Platform rejections:** `fesetround` returned a non-zero status.
//! 3. **Query failures:** `fegetround` could not determine the active mode.

use thiserror::Error;

/// Errors raised by rounding-mode queries and updates.
///
/// None of these leave the floating-point environment in a partial state: the platform
/// either applies a new mode completely or not at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FenvError {
    /// No mode was passed at all.
    #[error("didn't supply a mode")]
    MissingArgument,

    /// The requested mode could not be interpreted as an integer.
    ///
    /// Raised before the platform is consulted, so the active mode is untouched.
    #[error("invalid mode argument {input}")]
    InvalidArgument {
        /// Textual rendering of the rejected input.
        input: String,
    },

    /// The platform refused to install the requested mode.
    #[error("rounding mode {mode} invalid (got error code {code})")]
    InvalidRoundingMode {
        /// The code that was passed to `fesetround`.
        mode: i32,
        /// The raw non-zero status `fesetround` returned.
        code: i32,
    },

    /// The platform could not report the active mode.
    #[error("unable to determine the current rounding mode (got {code})")]
    Retrieval {
        /// The negative value `fegetround` returned.
        code: i32,
    },
}

impl FenvError {
    /// Builds an [`FenvError::InvalidArgument`] from anything printable.
    pub fn invalid_argument(input: impl std::fmt::Display) -> Self {
        Self::InvalidArgument {
            input: input.to_string(),
        }
    }
}

/// Result alias used throughout the gateway.
pub type Result<T> = std::result::Result<T, FenvError>;
