use crate::core::styles::{self, StyleHost};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order. Invalid selectors and
/// non-HTML nodes yield nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] invalid selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn create_html_element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{tag}> is not an HtmlElement: {:?}", e))
}

/// `<head>` of a document as a style injection target.
pub struct DocumentStyles<'a>(pub &'a web::Document);

impl StyleHost for DocumentStyles<'_> {
    type Error = anyhow::Error;

    fn has_element(&self, id: &str) -> bool {
        self.0.get_element_by_id(id).is_some()
    }

    fn append_style(&self, id: &str, css: &str) -> anyhow::Result<()> {
        let head = self.0.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
        let style = self
            .0
            .create_element("style")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(())
    }
}

/// Append a `<style>` with `id` to `<head>` unless one already exists.
/// Returns true when a new element was added.
#[inline]
pub fn inject_style_once(document: &web::Document, id: &str, css: &str) -> anyhow::Result<bool> {
    styles::inject_style_once(&DocumentStyles(document), id, css)
}

#[inline]
pub fn set_inline_style(el: &web::HtmlElement, property: &str, value: &str) {
    // an empty value removes the inline declaration
    _ = el.style().set_property(property, value);
}

/// Register `handler` for `event` on `target`. The listener lives for the
/// rest of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot timer that is never cancelled; the callback is freed by the JS
/// side after it runs.
pub fn set_timeout(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .ok()
}

/// Drop `value` on a later task. Used for closures that are still on the
/// call stack when their owner lets go of them.
pub fn release_later<T: 'static>(window: &web::Window, value: T) {
    set_timeout(window, 0, move || drop(value));
}

/// Cancelable timer that owns its callback.
pub struct Timeout {
    window: web::Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Option<Self> {
        let callback = Closure::once(f);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }

    /// Clear the timer and free its callback. Must not be called from the
    /// callback itself; hand the value to [`release_later`] there instead.
    pub fn cancel(self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}

/// Event listener that can be detached; the callback is owned here rather
/// than leaked.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    pub fn detach(&self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn has_global(window: &web::Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}
