//! Inline stroke icons on a 24x24 grid.

use leptos::prelude::*;

pub const MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];
pub const CLOSE: &[&str] = &["M18 6 6 18", "M6 6l12 12"];
pub const CLOCK: &[&str] = &["M12 2a10 10 0 1 0 10 10", "M12 6v6l4 2"];

pub const LINES: &[&str] = &["M4 7h16M4 12h10M4 17h16"];
pub const CHAT: &[&str] = &["M4 5h16v11H7l-3 3V5z", "M7 9h10M7 12h7"];
pub const GEAR: &[&str] = &["M12 2v4M12 18v4M4.2 4.2l2.8 2.8M17 17l2.8 2.8M2 12h4M18 12h4", "M8 12a4 4 0 1 0 8 0"];
pub const PEOPLE: &[&str] = &["M16 11a4 4 0 1 0-8 0", "M4 22c1.6-4.2 5-6 8-6s6.4 1.8 8 6"];
pub const DOLLAR: &[&str] = &["M12 1v22", "M17 6H9a4 4 0 1 0 0 8h6a4 4 0 1 1 0 8H7"];
pub const DEVICE: &[&str] = &["M7 4h10v16H7z", "M10 19h4"];
pub const GROWTH: &[&str] = &["M4 18V6", "M4 18h18", "M7 14l4-4 3 3 6-7"];

/// Decorative SVG icon; hidden from assistive technology.
#[component]
pub fn Icon(paths: &'static [&'static str], #[prop(default = "icon")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
