use crate::core::perf::{LoadPhase, LoadTimings, NavigationMarks};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Log page-load timings once the `load` event has finished. When the
/// module starts after `load`, the log is scheduled right away.
pub fn log_page_load(window: &web::Window) {
    if !dom::has_global(window, "performance") {
        return;
    }
    let phase = window
        .document()
        .map(|d| load_phase(&d.ready_state()))
        .unwrap_or(LoadPhase::Loading);
    if phase.load_already_fired() {
        schedule_log(window);
        return;
    }
    let timer_window = window.clone();
    dom::add_listener(window, "load", move |_ev: web::Event| {
        schedule_log(&timer_window);
    });
}

fn load_phase(state: &str) -> LoadPhase {
    match state {
        "complete" => LoadPhase::Complete,
        "interactive" => LoadPhase::Interactive,
        _ => LoadPhase::Loading,
    }
}

fn schedule_log(window: &web::Window) {
    // defer so loadEventEnd is populated
    let perf_window = window.clone();
    dom::set_timeout(window, 0, move || match navigation_timings(&perf_window) {
        Some(t) => log::info!(
            "[perf] page load: loadTime={:.1}ms domContentLoaded={:.1}ms totalTime={:.1}ms",
            t.load_time,
            t.dom_content_loaded,
            t.total_time
        ),
        None => log::debug!("[perf] no navigation timing entry"),
    });
}

fn navigation_timings(window: &web::Window) -> Option<LoadTimings> {
    let performance = window.performance()?;
    let entry = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<web::PerformanceNavigationTiming>()
        .ok()?;
    Some(
        NavigationMarks {
            fetch_start: entry.fetch_start(),
            dom_content_loaded_event_start: entry.dom_content_loaded_event_start(),
            dom_content_loaded_event_end: entry.dom_content_loaded_event_end(),
            load_event_start: entry.load_event_start(),
            load_event_end: entry.load_event_end(),
        }
        .into(),
    )
}
