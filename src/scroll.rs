use crate::core::easing::ScrollTween;
use crate::core::lifecycle::ReleaseOnce;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Animate the window scroll to the element matching `selector`.
/// Missing targets are ignored.
pub fn smooth_scroll_to(window: &web::Window, document: &web::Document, selector: &str, duration_ms: f64) {
    let target = match document.query_selector(selector) {
        Ok(Some(el)) => el,
        _ => {
            log::debug!("[scroll] no target {}", selector);
            return;
        }
    };
    let Ok(target) = target.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let start = window.page_y_offset().unwrap_or(0.0);
    let tween = Rc::new(RefCell::new(ScrollTween::new(
        start,
        target.offset_top() as f64,
        duration_ms,
    )));

    let tick: Rc<RefCell<ReleaseOnce<Closure<dyn FnMut(f64)>>>> =
        Rc::new(RefCell::new(ReleaseOnce::default()));
    let tick_clone = tick.clone();
    let frame_window = window.clone();
    let callback = Closure::wrap(Box::new(move |now: f64| {
        let step = tween.borrow_mut().step(now);
        frame_window.scroll_to_with_x_and_y(0.0, step.position);
        if step.finished {
            // still running inside the closure; drop it on a later task
            let released = tick_clone.borrow_mut().release();
            if let Some(cb) = released {
                dom::release_later(&frame_window, cb);
            }
            return;
        }
        if let Some(cb) = tick_clone.borrow().get() {
            _ = frame_window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>);
    _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    _ = tick.borrow_mut().hold(callback);
}
