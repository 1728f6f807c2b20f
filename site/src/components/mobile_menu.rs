//! Mobile navigation menu built on a native `<details>` disclosure.
//!
//! ARCHITECTURE
//! ============
//! The browser toggles the element; a `toggle` listener mirrors that into a
//! [`MenuState`] signal which drives the summary label and icon. While the
//! menu is open, capture-phase document listeners dismiss it on an outside
//! pointer-down or Escape. Those listeners live in an [`OutsideDismissal`]
//! guard that exists only while the menu is open and is dropped on close or
//! unmount.

use leptos::html::Details;
use leptos::prelude::*;

use super::booking::{BOOKING_LABEL, BOOKING_URL};
use super::header::NAV_LINKS;
use super::icons::{CLOSE, Icon, MENU};
use crate::state::menu::{MenuEvent, MenuState};

#[cfg(feature = "hydrate")]
use crate::state::menu::ListenerChange;
#[cfg(feature = "hydrate")]
use crate::util::dom::{EventBinding, document};
#[cfg(feature = "hydrate")]
use leptos::reactive::owner::LocalStorage;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Event, EventTarget, KeyboardEvent, Node};

/// Everything a menu event needs to reach.
#[derive(Clone, Copy)]
struct MenuHandles {
    menu: RwSignal<MenuState>,
    details: NodeRef<Details>,
    #[cfg(feature = "hydrate")]
    dismissal: StoredValue<Option<OutsideDismissal>, LocalStorage>,
}

/// Apply `event` and carry out the resulting side effects.
fn dispatch(handles: MenuHandles, event: &MenuEvent) {
    let mut state = handles.menu.get_untracked();
    let transition = state.apply(event);
    if state != handles.menu.get_untracked() {
        handles.menu.set(state);
    }

    #[cfg(feature = "hydrate")]
    {
        if transition.close_native {
            if let Some(el) = handles.details.get_untracked() {
                el.set_open(false);
            }
        }
        match transition.listeners {
            ListenerChange::Attach => handles.dismissal.set_value(OutsideDismissal::attach(handles)),
            ListenerChange::Detach => handles.dismissal.set_value(None),
            ListenerChange::Keep => {}
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = transition;
    }
}

/// Document-level listeners that close the open menu.
#[cfg(feature = "hydrate")]
struct OutsideDismissal {
    _bindings: Vec<EventBinding>,
}

#[cfg(feature = "hydrate")]
impl OutsideDismissal {
    fn attach(handles: MenuHandles) -> Option<Self> {
        let doc = document()?;
        let target: &EventTarget = doc.as_ref();

        let on_pointer = move |event: Event| {
            let inside = pointer_inside(handles.details, &event);
            dispatch(handles, &MenuEvent::PointerDown { inside });
        };
        let on_key = move |event: Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                dispatch(handles, &MenuEvent::KeyDown { key: event.key() });
            }
        };

        // Capture phase so handlers that stop propagation can't keep it open.
        let bindings = [
            EventBinding::listen(target, "pointerdown", true, on_pointer),
            EventBinding::listen(target, "touchstart", true, on_pointer),
            EventBinding::listen(target, "keydown", true, on_key),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

        log::debug!("menu open, {} dismissal listeners attached", bindings.len());
        Some(Self { _bindings: bindings })
    }
}

/// Whether a pointer event landed inside the menu. Events without a node
/// target, or with the menu gone, never count as outside.
#[cfg(feature = "hydrate")]
fn pointer_inside(details: NodeRef<Details>, event: &Event) -> bool {
    let Some(el) = details.get_untracked() else {
        return true;
    };
    let target = event.target();
    match target.as_ref().and_then(|t| t.dyn_ref::<Node>()) {
        Some(node) => el.contains(Some(node)),
        None => true,
    }
}

#[component]
pub fn MobileMenu() -> impl IntoView {
    let handles = MenuHandles {
        menu: RwSignal::new(MenuState::default()),
        details: NodeRef::<Details>::new(),
        #[cfg(feature = "hydrate")]
        dismissal: StoredValue::new_local(None),
    };
    let menu = handles.menu;

    #[cfg(feature = "hydrate")]
    {
        let toggle = StoredValue::new_local(None::<EventBinding>);
        Effect::new(move || {
            let Some(el) = handles.details.get() else {
                return;
            };
            let node = el.clone();
            toggle.set_value(EventBinding::listen(&el, "toggle", false, move |_event: Event| {
                dispatch(handles, &MenuEvent::Toggled { open: node.open() });
            }));
            // Pick up an open attribute restored before hydration.
            dispatch(handles, &MenuEvent::Toggled { open: el.open() });
        });
    }

    let close_on_activate = move |_: leptos::ev::MouseEvent| dispatch(handles, &MenuEvent::LinkActivated);

    view! {
        <details node_ref=handles.details class="mobile-menu">
            <summary
                class="btn btn--secondary btn--sm mobile-menu__toggle"
                aria-label=move || menu.get().summary_label()
                aria-expanded=move || menu.get().is_open.to_string()
            >
                <span class="sr-only">"Menu"</span>
                <Show when=move || menu.get().is_open fallback=|| view! { <Icon paths=MENU/> }>
                    <Icon paths=CLOSE/>
                </Show>
            </summary>
            <div class="mobile-menu__panel">
                <div class="mobile-menu__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a class="mobile-menu__link" href=link.href on:click=close_on_activate>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="mobile-menu__cta">
                        <a
                            class="btn btn--primary btn--block"
                            href=BOOKING_URL
                            target="_blank"
                            rel="noreferrer"
                            on:click=close_on_activate
                        >
                            {BOOKING_LABEL}
                            <span aria-hidden="true">" →"</span>
                        </a>
                    </div>
                </div>
            </div>
        </details>
    }
}
