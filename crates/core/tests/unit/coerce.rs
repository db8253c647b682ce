//! # Argument Coercion Tests
//!
//! Verifies that loosely typed setter arguments either become an integer code or are
//! rejected with `InvalidArgument` before the platform is consulted.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use roundmode_core::coerce::{mode_code_from_f64, mode_code_from_i64, parse_mode_code};
use roundmode_core::{FenvError, ROUND_DOWNWARD, ROUND_TONEAREST, ROUND_UPWARD};

// ══════════════════════════════════════════════════════════
// 1. Text
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("0", 0)]
#[case("3072", 3072)]
#[case("+17", 17)]
#[case("-1", -1)]
#[case("  42\n", 42)]
#[case("0xC00", 0xC00)]
#[case("0X400000", 0x400000)]
#[case("-0x10", -16)]
#[case("999999", 999_999)]
fn parses_numbers(#[case] input: &str, #[case] expected: i32) {
    assert_eq!(parse_mode_code(input).unwrap(), expected);
}

#[test]
fn parses_names_to_native_codes() {
    assert_eq!(parse_mode_code("ROUND_UPWARD").unwrap(), ROUND_UPWARD);
    assert_eq!(parse_mode_code("downward").unwrap(), ROUND_DOWNWARD);
    assert_eq!(parse_mode_code("ToNearest").unwrap(), ROUND_TONEAREST);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("abc")]
#[case("1.5")]
#[case("12abc")]
#[case("0xZZ")]
#[case("--3")]
#[case("99999999999")]
fn rejects_non_integers(#[case] input: &str) {
    let err = parse_mode_code(input).unwrap_err();
    assert!(
        matches!(err, FenvError::InvalidArgument { .. }),
        "{input:?} produced {err:?}"
    );
}

proptest! {
    #[test]
    fn decimal_round_trips(code in any::<i32>()) {
        prop_assert_eq!(parse_mode_code(&code.to_string()).unwrap(), code);
    }

    #[test]
    fn hex_round_trips(code in 0..=i32::MAX) {
        prop_assert_eq!(parse_mode_code(&format!("{code:#x}")).unwrap(), code);
    }

    #[test]
    fn alphabetic_noise_is_rejected(text in "[g-wyz]{1,12}") {
        prop_assert!(parse_mode_code(&text).is_err());
    }
}

// ══════════════════════════════════════════════════════════
// 2. Floats and wide integers
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0.0, 0)]
#[case(-0.0, 0)]
#[case(1024.0, 1024)]
#[case(-3.0, -3)]
#[case(2_147_483_647.0, i32::MAX)]
fn accepts_integral_floats(#[case] value: f64, #[case] expected: i32) {
    assert_eq!(mode_code_from_f64(value).unwrap(), expected);
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
#[case(0.5)]
#[case(2_147_483_648.0)]
fn rejects_other_floats(#[case] value: f64) {
    assert!(matches!(
        mode_code_from_f64(value),
        Err(FenvError::InvalidArgument { .. })
    ));
}

#[test]
fn wide_integers_must_fit() {
    assert_eq!(mode_code_from_i64(3072).unwrap(), 3072);
    assert_eq!(mode_code_from_i64(i64::from(i32::MIN)).unwrap(), i32::MIN);
    assert!(mode_code_from_i64(i64::from(i32::MAX) + 1).is_err());
}
