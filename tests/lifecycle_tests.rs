// Host-side tests for release-once ownership of listener and frame callbacks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::ReleaseOnce;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn release_hands_back_the_value_once() {
    let mut slot = ReleaseOnce::default();
    assert_eq!(slot.hold(vec!["close", "backdrop", "escape"]), None);
    assert_eq!(slot.get().map(Vec::len), Some(3));

    assert_eq!(slot.release(), Some(vec!["close", "backdrop", "escape"]));
    assert!(slot.is_released());
    assert_eq!(slot.release(), None);
    assert!(slot.get().is_none());
}

#[test]
fn hold_after_release_returns_the_value() {
    let mut slot: ReleaseOnce<u8> = ReleaseOnce::default();
    assert_eq!(slot.release(), None);
    assert_eq!(slot.hold(7), Some(7));
    assert!(slot.get().is_none());
}

// A modal owns callbacks that each capture the modal itself. Releasing the
// callbacks on close must break that cycle so everything is freed.
struct Modal {
    callbacks: ReleaseOnce<Vec<Box<dyn Fn()>>>,
    closes: usize,
}

#[test]
fn closing_breaks_the_callback_cycle() {
    let modal = Rc::new(RefCell::new(Modal {
        callbacks: ReleaseOnce::default(),
        closes: 0,
    }));
    let callbacks: Vec<Box<dyn Fn()>> = (0..3)
        .map(|_| {
            let modal = modal.clone();
            Box::new(move || modal.borrow_mut().closes += 1) as Box<dyn Fn()>
        })
        .collect();
    modal.borrow_mut().callbacks.hold(callbacks);
    assert_eq!(Rc::strong_count(&modal), 4);

    // close from one callback, drop the set once it has returned
    let released = modal.borrow_mut().callbacks.release();
    let released = released.expect("first close releases callbacks");
    released[0]();
    drop(released);

    assert_eq!(modal.borrow().closes, 1);
    assert_eq!(Rc::strong_count(&modal), 1);
    // a second close gesture finds nothing left to release
    assert!(modal.borrow_mut().callbacks.release().is_none());
}
