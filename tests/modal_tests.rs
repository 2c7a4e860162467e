// Host-side tests for the portfolio lightbox markup and close handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod modal {
    include!("../src/core/modal.rs");
}

use modal::*;

#[test]
fn title_uses_one_based_ordinal() {
    let m = ModalContent::new("img/one.png", 1);
    assert_eq!(m.title(), "Funiro Landing Page Design 1");
}

#[test]
fn markup_contains_structure_and_image() {
    let html = ModalContent::new("img/three.png", 3).markup();
    assert!(html.contains("class=\"modal-overlay\""));
    assert!(html.contains("class=\"modal-close\""));
    assert!(html.contains("src=\"img/three.png\""));
    assert!(html.contains("alt=\"Funiro Landing Page Design 3\""));
    assert!(html.contains("<h3>Funiro Landing Page Design 3</h3>"));
    assert!(html.contains(MODAL_DESCRIPTION));
}

#[test]
fn image_source_is_escaped() {
    let html = ModalContent::new("x\" onerror=\"alert(1)", 2).markup();
    assert!(!html.contains("\" onerror=\""));
    assert!(html.contains("x&quot; onerror=&quot;alert(1)"));
}

#[test]
fn escape_html_covers_special_characters() {
    assert_eq!(escape_html("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn only_escape_key_closes() {
    assert_eq!(key_closes("Escape"), Some(CloseTrigger::Escape));
    assert_eq!(key_closes("Enter"), None);
    assert_eq!(key_closes("Esc"), None);
}

#[test]
fn clicks_inside_content_do_not_close() {
    assert_eq!(backdrop_click_closes(true), Some(CloseTrigger::Backdrop));
    assert_eq!(backdrop_click_closes(false), None);
}

#[test]
fn modal_css_positions_overlay_above_page() {
    assert!(MODAL_CSS.contains(".portfolio-modal {"));
    assert!(MODAL_CSS.contains("z-index: 1000;"));
}
