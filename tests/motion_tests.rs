// Host-side tests for easing, intro classes and load timing math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod easing {
    include!("../src/core/easing.rs");
}
mod intro {
    include!("../src/core/intro.rs");
}
mod perf {
    include!("../src/core/perf.rs");
}

use easing::*;

#[test]
fn ease_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_quad(0.0, 100.0, 400.0, 1000.0), 100.0);
    assert_eq!(ease_in_out_quad(500.0, 100.0, 400.0, 1000.0), 300.0);
    assert!((ease_in_out_quad(1000.0, 100.0, 400.0, 1000.0) - 500.0).abs() < 1e-9);
}

#[test]
fn ease_is_monotonic_for_positive_distance() {
    let mut prev = ease_in_out_quad(0.0, 0.0, 1.0, 100.0);
    for t in 1..=100 {
        let v = ease_in_out_quad(t as f64, 0.0, 1.0, 100.0);
        assert!(v >= prev, "not monotonic at t={t}");
        prev = v;
    }
}

#[test]
fn zero_duration_jumps_to_target() {
    assert_eq!(ease_in_out_quad(0.0, 10.0, 5.0, 0.0), 15.0);
}

#[test]
fn tween_anchors_on_first_frame_and_lands_on_target() {
    let mut tween = ScrollTween::new(0.0, 800.0, 1000.0);
    let first = tween.step(5000.0);
    assert_eq!(first.position, 0.0);
    assert!(!first.finished);

    let mid = tween.step(5500.0);
    assert_eq!(mid.position, 400.0);

    let last = tween.step(6016.0);
    assert!(last.finished);
    assert_eq!(last.position, 800.0);
}

#[test]
fn tween_scrolls_upward() {
    let mut tween = ScrollTween::new(1200.0, 200.0, 400.0);
    tween.step(0.0);
    let step = tween.step(100.0);
    assert!(step.position < 1200.0 && step.position > 200.0);
    assert_eq!(tween.step(400.0).position, 200.0);
}

#[test]
fn slide_classes_alternate() {
    let classes: Vec<_> = (0..4).map(intro::slide_class).collect();
    assert_eq!(
        classes,
        ["slide-in-left", "slide-in-right", "slide-in-left", "slide-in-right"]
    );
}

#[test]
fn load_timings_from_navigation_marks() {
    let marks = perf::NavigationMarks {
        fetch_start: 5.0,
        dom_content_loaded_event_start: 120.0,
        dom_content_loaded_event_end: 124.5,
        load_event_start: 300.0,
        load_event_end: 302.0,
    };
    let t: perf::LoadTimings = marks.into();
    assert_eq!(t.load_time, 2.0);
    assert_eq!(t.dom_content_loaded, 4.5);
    assert_eq!(t.total_time, 297.0);
}

#[test]
fn load_log_runs_immediately_only_after_load() {
    use perf::LoadPhase;
    assert!(LoadPhase::Complete.load_already_fired());
    assert!(!LoadPhase::Interactive.load_already_fired());
    assert!(!LoadPhase::Loading.load_already_fired());
}
