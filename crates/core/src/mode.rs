//! IEEE-754 rounding modes.
//!
//! The four modes every conforming `<fenv.h>` defines, each tied to its native code:
//!
//! | Variant      | Constant           | Rounds inexact results         |
//! |--------------|--------------------|--------------------------------|
//! | `ToNearest`  | `ROUND_TONEAREST`  | to nearest, ties to even       |
//! | `TowardZero` | `ROUND_TOWARDZERO` | toward zero (truncation)       |
//! | `Downward`   | `ROUND_DOWNWARD`   | toward negative infinity       |
//! | `Upward`     | `ROUND_UPWARD`     | toward positive infinity       |
//!
//! Platforms may accept further codes; those are carried as raw `i32`s and never
//! forced into this enum.

use std::fmt;
use std::str::FromStr;

use crate::error::FenvError;
use crate::ffi;

/// A standard IEEE-754 rounding mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even. The power-on default.
    #[default]
    ToNearest,
    /// Round toward zero.
    TowardZero,
    /// Round toward negative infinity.
    Downward,
    /// Round toward positive infinity.
    Upward,
}

impl RoundingMode {
    /// All four modes, in the order their constants are exported.
    pub const ALL: [Self; 4] = [
        Self::ToNearest,
        Self::TowardZero,
        Self::Downward,
        Self::Upward,
    ];

    /// Returns the platform's native code for this mode.
    pub const fn code(self) -> i32 {
        match self {
            Self::ToNearest => ffi::FE_TONEAREST,
            Self::TowardZero => ffi::FE_TOWARDZERO,
            Self::Downward => ffi::FE_DOWNWARD,
            Self::Upward => ffi::FE_UPWARD,
        }
    }

    /// Maps a native code back to a mode.
    ///
    /// Returns `None` for codes outside the four standard modes. Such codes are not
    /// errors; the platform may support them.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    /// Returns the exported constant name, e.g. `"ROUND_UPWARD"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToNearest => "ROUND_TONEAREST",
            Self::TowardZero => "ROUND_TOWARDZERO",
            Self::Downward => "ROUND_DOWNWARD",
            Self::Upward => "ROUND_UPWARD",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::ToNearest => "to nearest",
            Self::TowardZero => "toward zero",
            Self::Downward => "downward",
            Self::Upward => "upward",
        };
        f.write_str(description)
    }
}

impl FromStr for RoundingMode {
    type Err = FenvError;

    /// Parses a constant name, case-insensitively, with or without the `ROUND_` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("ROUND_").unwrap_or(&upper);
        Self::ALL
            .into_iter()
            .find(|mode| &mode.name()["ROUND_".len()..] == bare)
            .ok_or_else(|| FenvError::invalid_argument(format!("{s:?}")))
    }
}

impl From<RoundingMode> for i32 {
    fn from(mode: RoundingMode) -> Self {
        mode.code()
    }
}
