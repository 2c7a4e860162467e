use crate::constants::{MODAL_CLASS, MODAL_CLOSE_SELECTOR, MODAL_OVERLAY_SELECTOR, PORTFOLIO_IMAGE_SELECTOR, PORTFOLIO_ITEM_SELECTOR};
use crate::core::lifecycle::ReleaseOnce;
use crate::core::modal::{backdrop_click_closes, key_closes, CloseTrigger, ModalContent, MODAL_CSS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Open the lightbox when a portfolio item is clicked.
pub fn wire_portfolio_clicks(document: &web::Document) {
    for (i, item) in dom::query_all(document, PORTFOLIO_ITEM_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let clicked = item.clone();
        dom::add_listener(&item, "click", move |_ev: web::MouseEvent| {
            let src = clicked
                .query_selector(PORTFOLIO_IMAGE_SELECTOR)
                .ok()
                .flatten()
                .and_then(|img| img.dyn_into::<web::HtmlImageElement>().ok())
                .map(|img| img.src())
                .unwrap_or_default();
            if let Err(e) = open(ModalContent::new(src, i + 1)) {
                log::error!("[modal] open failed: {:?}", e);
            }
        });
    }
}

struct OpenModal {
    window: web::Window,
    root: web::HtmlElement,
    style: web::Element,
    listeners: ReleaseOnce<Vec<dom::Listener>>,
}

impl OpenModal {
    fn close(&mut self, trigger: CloseTrigger) {
        let Some(listeners) = self.listeners.release() else {
            return;
        };
        self.root.remove();
        self.style.remove();
        for listener in &listeners {
            listener.detach();
        }
        // one of these closures is running right now; drop them after it returns
        dom::release_later(&self.window, listeners);
        log::debug!("[modal] closed via {:?}", trigger);
    }
}

pub fn open(content: ModalContent) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;

    let root = dom::create_html_element(&document, "div")?;
    root.set_class_name(MODAL_CLASS);
    root.set_inner_html(&content.markup());

    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_text_content(Some(MODAL_CSS));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    body.append_child(&root)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let modal = Rc::new(RefCell::new(OpenModal {
        window,
        root: root.clone(),
        style,
        listeners: ReleaseOnce::default(),
    }));
    let mut listeners = Vec::with_capacity(3);

    if let Ok(Some(close_btn)) = root.query_selector(MODAL_CLOSE_SELECTOR) {
        let modal = modal.clone();
        listeners.push(dom::Listener::attach(&close_btn, "click", move |_ev| {
            modal.borrow_mut().close(CloseTrigger::Button);
        }));
    }

    if let Ok(Some(overlay)) = root.query_selector(MODAL_OVERLAY_SELECTOR) {
        let modal = modal.clone();
        let overlay_target: web::EventTarget = overlay.clone().into();
        listeners.push(dom::Listener::attach(&overlay, "click", move |ev| {
            let on_overlay = ev.target().as_ref() == Some(&overlay_target);
            if let Some(trigger) = backdrop_click_closes(on_overlay) {
                modal.borrow_mut().close(trigger);
            }
        }));
    }

    let escape_modal = modal.clone();
    listeners.push(dom::Listener::attach(&document, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if let Some(trigger) = key_closes(&ev.key()) {
            escape_modal.borrow_mut().close(trigger);
        }
    }));
    _ = modal.borrow_mut().listeners.hold(listeners);

    log::info!("[modal] opened item {}", content.ordinal);
    Ok(())
}
