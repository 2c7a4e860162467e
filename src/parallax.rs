use crate::core::parallax::{translate_y, FrameGate, ParallaxTable};
use crate::core::MotionConfig;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ParallaxState {
    window: web::Window,
    table: ParallaxTable<web::HtmlElement>,
    gate: RefCell<FrameGate>,
    pending_frame: Cell<Option<i32>>,
    frame_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl ParallaxState {
    fn schedule(&self) {
        if !self.gate.borrow_mut().request() {
            return;
        }
        let handle = self.frame_cb.borrow().as_ref().and_then(|cb| {
            self.window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .ok()
        });
        if handle.is_none() {
            // nothing will run; let the next scroll try again
            self.gate.borrow_mut().complete();
        }
        self.pending_frame.set(handle);
    }

    fn update(&self) {
        self.gate.borrow_mut().complete();
        self.pending_frame.set(None);
        // read at run time so the frame sees the latest offset
        let scrolled = self.window.page_y_offset().unwrap_or(0.0);
        for (el, y) in self.table.offsets(scrolled) {
            dom::set_inline_style(el, "transform", &translate_y(y));
        }
    }
}

/// Scroll-linked translation of the portfolio items, at most one update per frame.
pub struct ParallaxScheduler {
    state: Rc<ParallaxState>,
}

impl ParallaxScheduler {
    pub fn attach(
        window: &web::Window,
        elements: Vec<web::HtmlElement>,
        config: &MotionConfig,
    ) -> Self {
        let table = ParallaxTable::new(
            elements,
            config.parallax_base_speed,
            config.parallax_speed_step,
        );
        log::info!("[parallax] tracking {} elements", table.len());
        let state = Rc::new(ParallaxState {
            window: window.clone(),
            table,
            gate: RefCell::new(FrameGate::default()),
            pending_frame: Cell::new(None),
            frame_cb: RefCell::new(None),
        });

        let weak: Weak<ParallaxState> = Rc::downgrade(&state);
        *state.frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.update();
            }
        }) as Box<dyn FnMut()>));

        let weak = Rc::downgrade(&state);
        dom::add_listener(window, "scroll", move |_ev: web::Event| {
            if let Some(state) = weak.upgrade() {
                state.schedule();
            }
        });

        Self { state }
    }

    /// Drop a frame that was requested but has not run yet.
    pub fn cancel_pending(&self) {
        if let Some(handle) = self.state.pending_frame.take() {
            _ = self.state.window.cancel_animation_frame(handle);
            self.state.gate.borrow_mut().complete();
        }
    }
}

impl Drop for ParallaxScheduler {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
