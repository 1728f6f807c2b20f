//! # site
//!
//! Leptos landing page for Softwared. Server-rendered once into a static
//! `index.html`, then hydrated in the browser where three behaviors come
//! alive: the mobile menu disclosure, staggered scroll reveal, and pointer
//! tilt on cards.
//!
//! Browser glue is compiled only with the `hydrate` feature; the state
//! machines and math it drives live in plain modules tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod seo;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::{App, PageContext};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }

    let page = PageContext::from_document();
    log::debug!("hydrating with base path {:?}", page.base_path);
    leptos::mount::hydrate_body(move || view! { <App page/> });
}
