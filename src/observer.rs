use crate::constants::REVEALED_CLASS;
use crate::core::reveal::{RevealOutcome, RevealTracker};
use crate::core::MotionConfig;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Adds the reveal class to each element the first time it scrolls into view.
pub struct VisibilityObserver {
    observer: web::IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker>>,
    // kept alive for as long as the observer may call it
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    /// Returns `Ok(None)` when the runtime has no `IntersectionObserver`;
    /// elements then keep their initial state.
    pub fn attach(
        window: &web::Window,
        elements: Vec<web::HtmlElement>,
        config: &MotionConfig,
    ) -> anyhow::Result<Option<Self>> {
        if !dom::has_global(window, "IntersectionObserver") {
            log::debug!("[reveal] IntersectionObserver unavailable; reveal disabled");
            return Ok(None);
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
        let targets = Rc::new(elements);

        let cb_tracker = tracker.clone();
        let cb_targets = targets.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = cb_targets
                        .iter()
                        .position(|el| AsRef::<web::Element>::as_ref(el) == &target)
                    else {
                        continue;
                    };
                    let outcome = cb_tracker
                        .borrow_mut()
                        .on_entry(index, entry.is_intersecting());
                    if outcome == RevealOutcome::Revealed {
                        _ = target.class_list().add_1(REVEALED_CLASS);
                        log::debug!("[reveal] element {} revealed", index);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin());
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        for el in targets.iter() {
            observer.observe(el);
        }
        log::info!("[reveal] observing {} elements", targets.len());

        Ok(Some(Self {
            observer,
            tracker,
            _callback: callback,
        }))
    }

    /// Stop all observation. Entries already queued by the browser are ignored.
    pub fn disconnect(&self) {
        self.tracker.borrow_mut().disconnect();
        self.observer.disconnect();
    }

    pub fn revealed_count(&self) -> usize {
        self.tracker.borrow().revealed_count()
    }
}
