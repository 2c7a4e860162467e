#![cfg(target_arch = "wasm32")]
use crate::core::constants::SMOOTH_SCROLL_DEFAULT_MS;
use crate::core::MotionConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod controller;
mod core;
mod dom;
mod hover;
mod intro;
mod modal;
mod observer;
mod parallax;
mod perf;
mod scroll;
mod social;

use controller::AnimationController;

/// Page handle published on the host window for external teardown.
#[wasm_bindgen]
pub struct LandingPage {
    controller: AnimationController,
}

#[wasm_bindgen]
impl LandingPage {
    /// Disconnect the reveal observers. Scroll and hover listeners stay active.
    pub fn destroy(&self) {
        self.controller.destroy();
    }
}

impl LandingPage {
    fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        intro::play(window, document);
        social::wire_social_items(window, document);
        modal::wire_portfolio_clicks(document);
        let controller = AnimationController::init(window, document, &MotionConfig::default())?;
        Ok(Self { controller })
    }
}

/// Smoothly scroll the window to the first element matching `selector`.
#[wasm_bindgen]
pub fn smooth_scroll_to(selector: &str, duration_ms: Option<f64>) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    scroll::smooth_scroll_to(
        &window,
        &document,
        selector,
        duration_ms.unwrap_or(SMOOTH_SCROLL_DEFAULT_MS),
    );
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Some(window) = web::window() {
        perf::log_page_load(&window);
    }

    spawn_local(async move {
        if let Err(e) = boot().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn boot() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom_ready(&document).await?;

    let page = LandingPage::mount(&window, &document)?;
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(constants::PAGE_HANDLE_PROPERTY),
        &JsValue::from(page),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("landing page ready");
    Ok(())
}

/// Resolve once the document has been parsed.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let target: web::EventTarget = document.clone().into();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let options = web::AddEventListenerOptions::new();
        options.set_once(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &options,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
