// Host-side tests for social link resolution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod social {
    include!("../src/core/social.rs");
}

use social::*;

#[test]
fn full_urls_open_as_is() {
    let url = "https://www.linkedin.com/in/someone";
    assert_eq!(resolve_profile_url(url), Some(url.to_string()));
}

#[test]
fn handle_with_path_goes_to_behance() {
    assert_eq!(
        resolve_profile_url("/aashifasheikh12"),
        Some("https://behance.net/aashifasheikh12".to_string())
    );
}

#[test]
fn bare_handle_goes_to_dribbble() {
    assert_eq!(
        resolve_profile_url("aashifasheikh12"),
        Some("https://dribbble.com/aashifasheikh12".to_string())
    );
}

#[test]
fn unrelated_text_is_inert() {
    assert_eq!(resolve_profile_url("hello@example.com"), None);
    assert_eq!(resolve_profile_url(""), None);
    assert_eq!(resolve_profile_url("http://insecure.example"), None);
}

#[test]
fn hover_shift_transform() {
    assert_eq!(translate_x(10.0), "translateX(10px)");
    assert_eq!(translate_x(0.0), "translateX(0px)");
}
