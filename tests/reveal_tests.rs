// Host-side tests for one-way reveal tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn first_intersection_reveals() {
    let mut t = RevealTracker::new(3);
    assert_eq!(t.on_entry(1, true), RevealOutcome::Revealed);
    assert!(t.is_revealed(1));
    assert!(!t.is_revealed(0));
    assert_eq!(t.revealed_count(), 1);
}

#[test]
fn non_intersecting_entries_do_nothing() {
    let mut t = RevealTracker::new(2);
    assert_eq!(t.on_entry(0, false), RevealOutcome::Ignored);
    assert!(!t.is_revealed(0));
}

#[test]
fn reveal_is_monotonic() {
    let mut t = RevealTracker::new(2);
    t.on_entry(0, true);
    // element scrolls out and back in repeatedly
    for visible in [false, true, false, false, true] {
        let outcome = t.on_entry(0, visible);
        assert_ne!(outcome, RevealOutcome::Revealed);
        assert!(t.is_revealed(0));
    }
}

#[test]
fn unknown_index_is_ignored() {
    let mut t = RevealTracker::new(1);
    assert_eq!(t.on_entry(7, true), RevealOutcome::Ignored);
    assert!(!t.is_revealed(7));
}

#[test]
fn no_reveals_after_teardown() {
    let mut t = RevealTracker::new(3);
    t.on_entry(0, true);
    t.disconnect();
    assert!(!t.is_connected());
    assert_eq!(t.on_entry(1, true), RevealOutcome::Ignored);
    assert!(!t.is_revealed(1));
    assert!(t.is_revealed(0));
}

#[test]
fn empty_set_is_valid() {
    let t = RevealTracker::new(0);
    assert!(t.is_empty());
    assert_eq!(t.revealed_count(), 0);
}
