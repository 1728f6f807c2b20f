//! Pointer tilt binding for `data-tilt` elements.
//!
//! Each element gets a [`TiltTarget`] plus one reusable animation-frame
//! callback. Pointer moves only record samples; the frame callback renders
//! the latest one.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement, PointerEvent};

use super::dom::{EventBinding, add_class, log_js_error, query_document, remove_class, set_css_var};
use super::motion::MotionPreferences;
use super::tilt::{
    Bounds, FrameHandle, MoveOutcome, PointerKind, PointerSample, TILT_ATTR, TILTING_CLASS, TiltTarget, reset_css_properties,
};

/// All live tilt bindings. Dropping it removes every listener.
pub struct TiltBindings {
    targets: Vec<BoundTarget>,
}

impl TiltBindings {
    /// Bind every `data-tilt` element when the device supports the effect.
    pub fn install(prefs: MotionPreferences) -> Option<Self> {
        if !prefs.allows_tilt() {
            log::debug!("reduced motion or coarse pointer, tilt disabled");
            return None;
        }
        let targets = query_document(&format!("[{TILT_ATTR}]"))
            .into_iter()
            .filter_map(BoundTarget::bind)
            .collect::<Vec<_>>();
        if targets.is_empty() {
            return None;
        }
        log::debug!("tilt bound to {} elements", targets.len());
        Some(Self { targets })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

struct BoundTarget {
    state: Rc<RefCell<TiltTarget>>,
    _on_move: EventBinding,
    _on_leave: EventBinding,
    _frame: Closure<dyn FnMut(f64)>,
}

impl BoundTarget {
    fn bind(el: HtmlElement) -> Option<Self> {
        let state = Rc::new(RefCell::new(TiltTarget::new()));

        let frame = {
            let node = el.clone();
            let state = Rc::clone(&state);
            Closure::<dyn FnMut(f64)>::new(move |_ts: f64| render_frame(&node, &state))
        };
        let frame_fn: Function = frame.as_ref().unchecked_ref::<Function>().clone();

        let on_move = {
            let node = el.clone();
            let state = Rc::clone(&state);
            EventBinding::listen(&el, "pointermove", false, move |event: Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let kind = PointerKind::parse(&event.pointer_type());
                let sample = PointerSample { x: f64::from(event.client_x()), y: f64::from(event.client_y()) };
                let outcome = state.borrow_mut().pointer_moved(kind, sample);
                if outcome != MoveOutcome::ScheduleFrame {
                    return;
                }
                match web_sys::window().map(|w| w.request_animation_frame(&frame_fn)) {
                    Some(Ok(handle)) => state.borrow_mut().frame_scheduled(handle),
                    // No frame scheduling available: render immediately.
                    _ => render_frame(&node, &state),
                }
            })?
        };

        let on_leave = {
            let node = el.clone();
            let state = Rc::clone(&state);
            EventBinding::listen(&el, "pointerleave", false, move |_event: Event| {
                let cancelled = state.borrow_mut().pointer_left();
                cancel_frame(cancelled);
                for (name, value) in reset_css_properties() {
                    set_css_var(&node, name, value);
                }
                remove_class(&node, TILTING_CLASS);
            })?
        };

        Some(Self { state, _on_move: on_move, _on_leave: on_leave, _frame: frame })
    }
}

impl Drop for BoundTarget {
    fn drop(&mut self) {
        let cancelled = self.state.borrow_mut().pointer_left();
        cancel_frame(cancelled);
    }
}

fn render_frame(el: &HtmlElement, state: &RefCell<TiltTarget>) {
    let rect = el.get_bounding_client_rect();
    let bounds = Bounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
    let Some(pose) = state.borrow_mut().run_frame(bounds) else {
        return;
    };
    for (name, value) in pose.css_properties() {
        set_css_var(el, name, &value);
    }
    add_class(el, TILTING_CLASS);
}

fn cancel_frame(handle: Option<FrameHandle>) {
    let (Some(handle), Some(window)) = (handle, web_sys::window()) else {
        return;
    };
    if let Err(err) = window.cancel_animation_frame(handle) {
        log_js_error("cancelAnimationFrame", &err);
    }
}
