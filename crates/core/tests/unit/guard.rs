//! # Scoped Rounding Tests
//!
//! `FloatEnv::scoped` must put the previous mode back however the scope is left.

use pretty_assertions::assert_eq;
use roundmode_core::{FenvError, FloatEnv, ROUND_DOWNWARD, ROUND_TONEAREST, ROUND_UPWARD};

#[test]
fn guard_restores_on_drop() {
    let mut env = FloatEnv::current();
    {
        let guard = env.scoped(ROUND_UPWARD).unwrap();
        assert_eq!(guard.previous(), ROUND_TONEAREST);
        assert_eq!(FloatEnv::current().rounding_mode().unwrap(), ROUND_UPWARD);
    }
    assert_eq!(env.rounding_mode().unwrap(), ROUND_TONEAREST);
}

#[test]
fn guards_nest() {
    let mut outer_env = FloatEnv::current();
    let _outer = outer_env.scoped(ROUND_DOWNWARD).unwrap();
    {
        let mut inner_env = FloatEnv::current();
        let inner = inner_env.scoped(ROUND_UPWARD).unwrap();
        assert_eq!(inner.previous(), ROUND_DOWNWARD);
    }
    assert_eq!(FloatEnv::current().rounding_mode().unwrap(), ROUND_DOWNWARD);
}

#[test]
fn guard_restores_on_early_return() {
    fn bail_out(env: &mut FloatEnv) -> Result<(), FenvError> {
        let _guard = env.scoped(ROUND_UPWARD)?;
        env_is(ROUND_UPWARD);
        Err(FenvError::Retrieval { code: -1 })
    }

    fn env_is(code: i32) {
        assert_eq!(FloatEnv::current().rounding_mode().unwrap(), code);
    }

    let mut env = FloatEnv::current();
    assert!(bail_out(&mut env).is_err());
    env_is(ROUND_TONEAREST);
}

#[test]
fn guard_restores_on_panic() {
    let result = std::panic::catch_unwind(|| {
        let mut env = FloatEnv::current();
        let _guard = env.scoped(ROUND_DOWNWARD).unwrap();
        panic!("unwinding through a rounding scope");
    });
    assert!(result.is_err());
    assert_eq!(FloatEnv::current().rounding_mode().unwrap(), ROUND_TONEAREST);
}

#[test]
fn rejected_scope_creates_no_guard() {
    let mut env = FloatEnv::current();
    assert!(matches!(
        env.scoped(999_999),
        Err(FenvError::InvalidRoundingMode { mode: 999_999, .. })
    ));
    assert_eq!(env.rounding_mode().unwrap(), ROUND_TONEAREST);
}
