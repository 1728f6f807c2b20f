//! Browser listener guards and element helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only glue shared by the menu, reveal, and tilt bindings. Every
//! listener is owned by an [`EventBinding`]; dropping the binding removes the
//! listener, so releasing a behavior is just dropping its state.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// A registered DOM event listener, removed on drop.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    /// Register `handler` for `event` on `target`.
    ///
    /// Returns `None` when the browser rejects the registration.
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        match target.add_event_listener_with_callback_and_bool(event, callback.as_ref().unchecked_ref(), capture) {
            Ok(()) => Some(Self { target: target.clone(), event, capture, callback }),
            Err(err) => {
                log_js_error(event, &err);
                None
            }
        }
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        ) {
            log_js_error(self.event, &err);
        }
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All `HtmlElement`s under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

/// Document-wide variant of [`query_all`].
pub fn query_document(selector: &str) -> Vec<HtmlElement> {
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

/// Write a CSS custom property on an element's inline style.
pub fn set_css_var(el: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = el.style().set_property(name, value) {
        log_js_error(name, &err);
    }
}

pub fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log_js_error(class, &err);
    }
}

pub fn remove_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log_js_error(class, &err);
    }
}

/// Browser API failures only disable an effect; record them at debug level.
pub fn log_js_error(context: &str, err: &JsValue) {
    log::debug!("{context}: {err:?}");
}
