// Host-side tests for the parallax table and frame gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod parallax {
    include!("../src/core/parallax.rs");
}

use parallax::*;

const BASE: f64 = 0.5;
const STEP: f64 = 0.2;

#[test]
fn speed_factor_increases_with_index() {
    let speeds: Vec<f64> = (0..6).map(|i| speed_factor(BASE, STEP, i)).collect();
    assert_eq!(speeds[0], 0.5);
    for w in speeds.windows(2) {
        assert!(w[1] > w[0]);
    }
}

#[test]
fn offsets_follow_scroll_times_speed() {
    let table = ParallaxTable::new(["a", "b", "c", "d"], BASE, STEP);
    let s = 240.0;
    for (i, (el, y)) in table.offsets(s).enumerate() {
        let expected = -(s * (0.5 + i as f64 * 0.2));
        assert_eq!(y, expected, "element {el} at index {i}");
    }
}

#[test]
fn table_keeps_document_order() {
    let table = ParallaxTable::new(vec!["first", "second", "third"], BASE, STEP);
    let order: Vec<&str> = table.rows().iter().map(|r| r.element).collect();
    assert_eq!(order, ["first", "second", "third"]);
    assert_eq!(table.len(), 3);
}

#[test]
fn empty_table_produces_no_updates() {
    let table: ParallaxTable<&str> = ParallaxTable::new(Vec::new(), BASE, STEP);
    assert!(table.is_empty());
    assert_eq!(table.offsets(500.0).count(), 0);
}

#[test]
fn transform_string_has_no_negative_zero() {
    assert_eq!(translate_y(offset_for(0.0, 0.7)), "translateY(0px)");
    assert_eq!(translate_y(offset_for(100.0, 0.5)), "translateY(-50px)");
    assert_eq!(translate_y(offset_for(10.0, 0.25)), "translateY(-2.5px)");
}

#[test]
fn gate_coalesces_requests_within_a_frame() {
    let mut gate = FrameGate::default();
    let scheduled = (0..25).filter(|_| gate.request()).count();
    assert_eq!(scheduled, 1);
    assert!(gate.is_pending());

    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.request(), "a scroll after the frame ran schedules again");
}

// Frame loop simulation: scroll events push offsets, frames read the latest.
struct FakePage {
    gate: FrameGate,
    scroll_y: f64,
    queued_frames: usize,
    updates: Vec<Vec<f64>>,
    table: ParallaxTable<usize>,
}

impl FakePage {
    fn new(n: usize) -> Self {
        Self {
            gate: FrameGate::default(),
            scroll_y: 0.0,
            queued_frames: 0,
            updates: Vec::new(),
            table: ParallaxTable::new(0..n, BASE, STEP),
        }
    }

    fn scroll(&mut self, y: f64) {
        self.scroll_y = y;
        if self.gate.request() {
            self.queued_frames += 1;
        }
    }

    fn run_frames(&mut self) {
        while self.queued_frames > 0 {
            self.queued_frames -= 1;
            self.gate.complete();
            let ys = self.table.offsets(self.scroll_y).map(|(_, y)| y).collect();
            self.updates.push(ys);
        }
    }
}

#[test]
fn burst_of_scrolls_yields_one_update_with_latest_offset() {
    let mut page = FakePage::new(3);
    for y in [10.0, 20.0, 35.0, 80.0] {
        page.scroll(y);
    }
    page.run_frames();
    assert_eq!(page.updates.len(), 1);
    assert_eq!(page.updates[0], vec![-40.0, -(80.0 * 0.7), -(80.0 * 0.9)]);
}

#[test]
fn scrolls_across_frames_are_not_dropped() {
    let mut page = FakePage::new(2);
    page.scroll(100.0);
    page.run_frames();
    page.scroll(200.0);
    page.run_frames();
    assert_eq!(page.updates.len(), 2);
    assert_eq!(page.updates[1][0], -100.0);
}
