use crate::constants::{EXTERNAL_LINK_TARGET, SOCIAL_ITEM_SELECTOR, SOCIAL_TEXT_SELECTOR};
use crate::core::constants::SOCIAL_HOVER_SHIFT_PX;
use crate::core::social::{resolve_profile_url, translate_x};
use crate::dom;
use web_sys as web;

/// Click-through to external profiles plus a small hover nudge.
pub fn wire_social_items(window: &web::Window, document: &web::Document) {
    let items = dom::query_all(document, SOCIAL_ITEM_SELECTOR);
    for item in &items {
        let clicked = item.clone();
        let window = window.clone();
        dom::add_listener(item, "click", move |_ev: web::MouseEvent| {
            let text = clicked
                .query_selector(SOCIAL_TEXT_SELECTOR)
                .ok()
                .flatten()
                .and_then(|el| el.text_content())
                .unwrap_or_default();
            match resolve_profile_url(&text) {
                Some(url) => {
                    log::info!("[social] open {}", url);
                    _ = window.open_with_url_and_target(&url, EXTERNAL_LINK_TARGET);
                }
                None => log::debug!("[social] no link for {:?}", text),
            }
        });

        let entered = item.clone();
        dom::add_listener(item, "mouseenter", move |_ev: web::MouseEvent| {
            dom::set_inline_style(&entered, "transform", &translate_x(SOCIAL_HOVER_SHIFT_PX));
        });
        let left = item.clone();
        dom::add_listener(item, "mouseleave", move |_ev: web::MouseEvent| {
            dom::set_inline_style(&left, "transform", &translate_x(0.0));
        });
    }
    log::info!("[social] wired {} items", items.len());
}
