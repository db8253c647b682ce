//! # Thread Isolation Tests
//!
//! The rounding mode is per-thread state. A thread starts with the environment of the
//! thread that created it, and changes it makes stay on that thread.

use std::thread;

use pretty_assertions::assert_eq;
use roundmode_core::{FloatEnv, ROUND_TONEAREST, ROUND_TOWARDZERO, ROUND_UPWARD, RoundingMode};

#[test]
fn fresh_thread_defaults_to_nearest() {
    let observed = thread::spawn(|| FloatEnv::current().mode())
        .join()
        .unwrap()
        .unwrap();
    assert_eq!(observed, Some(RoundingMode::ToNearest));
    assert_eq!(FloatEnv::current().rounding_mode().unwrap(), ROUND_TONEAREST);
}

#[test]
fn child_changes_do_not_leak_to_parent() {
    let child = thread::spawn(|| {
        let mut env = FloatEnv::current();
        env.set_rounding_mode(ROUND_UPWARD).unwrap();
        env.rounding_mode().unwrap()
    })
    .join()
    .unwrap();

    assert_eq!(child, ROUND_UPWARD);
    assert_eq!(FloatEnv::current().rounding_mode().unwrap(), ROUND_TONEAREST);
}

#[test]
fn sibling_threads_hold_independent_modes() {
    let handles: Vec<_> = RoundingMode::ALL
        .into_iter()
        .map(|mode| {
            thread::spawn(move || {
                let mut env = FloatEnv::current();
                env.set_mode(mode).unwrap();
                for _ in 0..1_000 {
                    thread::yield_now();
                    assert_eq!(env.mode().unwrap(), Some(mode));
                }
                mode
            })
        })
        .collect();

    for handle in handles {
        let _mode = handle.join().unwrap();
    }
}

#[test]
fn parent_change_is_invisible_after_child_started() {
    let (ready_tx, ready_rx) = std::sync::mpsc::channel::<()>();
    let (go_tx, go_rx) = std::sync::mpsc::channel::<()>();

    let child = thread::spawn(move || {
        ready_tx.send(()).unwrap();
        go_rx.recv().unwrap();
        FloatEnv::current().rounding_mode().unwrap()
    });

    ready_rx.recv().unwrap();
    let mut env = FloatEnv::current();
    let guard = env.scoped(ROUND_TOWARDZERO).unwrap();
    go_tx.send(()).unwrap();
    let seen_by_child = child.join().unwrap();
    drop(guard);

    assert_eq!(seen_by_child, ROUND_TONEAREST);
}
