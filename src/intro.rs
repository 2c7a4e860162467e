use crate::constants::{FADE_IN_CLASS, HERO_SELECTOR, INTRO_SELECTOR, PORTFOLIO_ITEM_SELECTOR, VISIBLE_CLASS};
use crate::core::constants::INTRO_REVEAL_DELAY_MS;
use crate::core::intro::slide_class;
use crate::dom;
use web_sys as web;

/// Entrance classes for the hero and portfolio grid, made visible shortly after load.
pub fn play(window: &web::Window, document: &web::Document) {
    if let Ok(Some(hero)) = document.query_selector(HERO_SELECTOR) {
        _ = hero.class_list().add_1(FADE_IN_CLASS);
    }
    for (i, item) in dom::query_all(document, PORTFOLIO_ITEM_SELECTOR)
        .iter()
        .enumerate()
    {
        _ = item.class_list().add_1(slide_class(i));
    }

    let animated = dom::query_all(document, INTRO_SELECTOR);
    dom::set_timeout(window, INTRO_REVEAL_DELAY_MS, move || {
        for el in &animated {
            _ = el.class_list().add_1(VISIBLE_CLASS);
        }
    });
}
