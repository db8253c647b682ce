//! Conversion of loosely typed mode arguments into native codes.
//!
//! Scripting callers hand the setter whatever they have: numbers, numeric strings,
//! constant names. Each helper here either yields an `i32` code or an
//! [`FenvError::InvalidArgument`], so the platform is only ever called with an integer.

use crate::error::{FenvError, Result};
use crate::mode::RoundingMode;

/// Parses a textual mode argument.
///
/// Accepted forms, after trimming surrounding whitespace:
/// - decimal integers with an optional sign (`"3072"`, `"-1"`),
/// - hexadecimal with a `0x`/`0X` prefix and optional sign (`"0xC00"`),
/// - constant names, case-insensitive, with or without `ROUND_` (`"upward"`).
///
/// # Errors
///
/// [`FenvError::InvalidArgument`] for empty input, anything else that is not one of the
/// forms above, or numbers outside the `i32` range.
pub fn parse_mode_code(input: &str) -> Result<i32> {
    let text = input.trim();
    if text.is_empty() {
        return Err(FenvError::invalid_argument(format!("{input:?}")));
    }

    if let Some(code) = parse_integer(text) {
        return Ok(code);
    }

    text.parse::<RoundingMode>().map(RoundingMode::code)
}

/// Converts a floating-point mode argument.
///
/// Only finite values with no fractional part that fit in an `i32` are accepted;
/// `-0.0` converts to `0`.
///
/// # Errors
///
/// [`FenvError::InvalidArgument`] for NaN, infinities, fractional or out-of-range values.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn mode_code_from_f64(value: f64) -> Result<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if value.is_finite() && value.trunc() == value && in_range {
        Ok(value as i32)
    } else {
        Err(FenvError::invalid_argument(value))
    }
}

/// Converts a wide integer mode argument.
///
/// # Errors
///
/// [`FenvError::InvalidArgument`] when `value` does not fit in an `i32`.
pub fn mode_code_from_i64(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| FenvError::invalid_argument(value))
}

fn parse_integer(text: &str) -> Option<i32> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (digits, radix) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };

    // `from_str_radix` tolerates its own sign, which would let "--1" or "0x-1" through.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
