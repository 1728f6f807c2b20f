//! Scroll-reveal binding: stagger delays plus a one-shot intersection observer.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{add_class, document, log_js_error, query_all, query_document, set_css_var};
use super::motion::MotionPreferences;
use super::reveal::{
    DELAY_PROPERTY, GROUP_ATTR, READY_CLASS, REVEAL_ATTR, REVEALED_CLASS, ROOT_MARGIN, RevealOutcome, RevealTracker,
    VISIBILITY_THRESHOLD, delay_css, stagger_delay_ms,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live reveal observer. Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
    tracker: Rc<RefCell<RevealTracker>>,
}

impl RevealObserver {
    /// Apply group stagger and start observing every `data-reveal` element.
    ///
    /// Returns `None` when reduced motion is requested, nothing is marked,
    /// or the browser has no `IntersectionObserver`.
    pub fn install(prefs: MotionPreferences) -> Option<Self> {
        if !prefs.allows_reveal() {
            log::debug!("reduced motion requested, scroll reveal disabled");
            return None;
        }

        let reveal_selector = format!("[{REVEAL_ATTR}]");
        let elements: Rc<[HtmlElement]> = query_document(&reveal_selector).into();
        if elements.is_empty() {
            return None;
        }

        let mut tracker = RevealTracker::new(elements.len());
        apply_group_stagger(&elements, &reveal_selector, &mut tracker);
        let tracker = Rc::new(RefCell::new(tracker));

        let callback = {
            let tracker = Rc::clone(&tracker);
            let elements = Rc::clone(&elements);
            ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = elements.iter().position(|el| AsRef::<Element>::as_ref(el) == &target) else {
                        continue;
                    };
                    let outcome = tracker.borrow_mut().on_visibility(index, entry.is_intersecting());
                    if outcome == RevealOutcome::Reveal {
                        add_class(&target, REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            })
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        init.set_root_margin(ROOT_MARGIN);
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log_js_error("IntersectionObserver", &err);
                return None;
            }
        };
        for el in elements.iter() {
            observer.observe(el);
        }

        // Content is only hidden for animation once something will reveal it.
        if let Some(root) = document().and_then(|doc| doc.document_element()) {
            add_class(&root, READY_CLASS);
        }
        log::debug!("scroll reveal observing {} elements", elements.len());

        Some(Self { observer, _callback: callback, tracker })
    }

    /// Elements that have not revealed yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tracker.borrow().pending()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn apply_group_stagger(elements: &[HtmlElement], reveal_selector: &str, tracker: &mut RevealTracker) {
    for group in query_document(&format!("[{GROUP_ATTR}]")) {
        for (position, el) in query_all(&group, reveal_selector).iter().enumerate() {
            let delay = stagger_delay_ms(position);
            set_css_var(el, DELAY_PROPERTY, &delay_css(delay));
            if let Some(index) = elements.iter().position(|item| item == el) {
                tracker.set_delay(index, delay);
            }
        }
    }
}
