use crate::constants::RIPPLE_STYLE_ID;
use crate::core::neighbors::{neighbor_plan, HoverPhase};
use crate::core::ripple::{Bounds, RippleGeometry, RIPPLE_KEYFRAMES_CSS};
use crate::core::timers::PendingSet;
use crate::core::MotionConfig;
use crate::dom;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct PendingRipple {
    timer: dom::Timeout,
    node: web::HtmlElement,
}

struct HoverState {
    window: web::Window,
    document: web::Document,
    items: Vec<web::HtmlElement>,
    ripple_ms: i32,
    ripples: RefCell<PendingSet<PendingRipple>>,
}

impl HoverState {
    fn on_enter(this: &Rc<Self>, index: usize, ev: &web::MouseEvent) {
        if let Err(e) = Self::spawn_ripple(this, index, ev) {
            log::warn!("[hover] ripple skipped: {:?}", e);
        }
        this.apply_neighbors(index, HoverPhase::Enter);
    }

    fn on_leave(&self, index: usize) {
        self.apply_neighbors(index, HoverPhase::Leave);
    }

    fn apply_neighbors(&self, active: usize, phase: HoverPhase) {
        for (i, emphasis) in neighbor_plan(self.items.len(), active, phase) {
            let item = &self.items[i];
            dom::set_inline_style(item, "transform", emphasis.transform());
            dom::set_inline_style(item, "opacity", emphasis.opacity());
        }
    }

    fn spawn_ripple(this: &Rc<Self>, index: usize, ev: &web::MouseEvent) -> anyhow::Result<()> {
        let item = &this.items[index];
        let rect = item.get_bounding_client_rect();
        let geometry = RippleGeometry::anchored(
            Bounds::new(rect.left(), rect.top(), rect.width(), rect.height()),
            DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        );

        let node = dom::create_html_element(&this.document, "div")?;
        node.style().set_css_text(&geometry.css_text(this.ripple_ms));
        if dom::inject_style_once(&this.document, RIPPLE_STYLE_ID, RIPPLE_KEYFRAMES_CSS)? {
            log::debug!("[hover] injected #{}", RIPPLE_STYLE_ID);
        }
        item.append_child(&node)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        // removal is not tied to pointer-leave
        let key = this.ripples.borrow_mut().reserve_key();
        let weak: Weak<HoverState> = Rc::downgrade(this);
        let fired = node.clone();
        let timer = dom::Timeout::schedule(&this.window, this.ripple_ms, move || {
            fired.remove();
            if let Some(state) = weak.upgrade() {
                // this callback lives in the entry; free it once it has returned
                let entry = state.ripples.borrow_mut().take(key);
                if let Some(entry) = entry {
                    dom::release_later(&state.window, entry);
                }
            }
        });
        match timer {
            Some(timer) => this
                .ripples
                .borrow_mut()
                .insert(key, PendingRipple { timer, node }),
            None => node.remove(),
        }
        Ok(())
    }

    /// Cancel outstanding removal timers and remove their ripples now.
    fn flush_ripples(&self) {
        let pending: Vec<PendingRipple> = self.ripples.borrow_mut().drain().collect();
        for ripple in pending {
            ripple.timer.cancel();
            ripple.node.remove();
        }
    }
}

/// Ripple and neighbor de-emphasis on pointer enter/leave of portfolio items.
pub struct HoverEngine {
    state: Rc<HoverState>,
}

impl HoverEngine {
    pub fn attach(
        window: &web::Window,
        document: &web::Document,
        items: Vec<web::HtmlElement>,
        config: &MotionConfig,
    ) -> Self {
        let state = Rc::new(HoverState {
            window: window.clone(),
            document: document.clone(),
            items,
            ripple_ms: config.ripple_lifetime_ms(),
            ripples: RefCell::new(PendingSet::new()),
        });

        for (index, item) in state.items.iter().enumerate() {
            let weak = Rc::downgrade(&state);
            dom::add_listener(item, "mouseenter", move |ev: web::MouseEvent| {
                if let Some(state) = weak.upgrade() {
                    HoverState::on_enter(&state, index, &ev);
                }
            });
            let weak = Rc::downgrade(&state);
            dom::add_listener(item, "mouseleave", move |_ev: web::MouseEvent| {
                if let Some(state) = weak.upgrade() {
                    state.on_leave(index);
                }
            });
        }
        log::info!("[hover] wired {} items", state.items.len());

        Self { state }
    }

    pub fn pending_ripples(&self) -> usize {
        self.state.ripples.borrow().len()
    }
}

impl Drop for HoverEngine {
    fn drop(&mut self) {
        self.state.flush_ripples();
    }
}
