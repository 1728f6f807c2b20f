//! Discovery-call booking link.

use leptos::prelude::*;

/// External scheduling page every booking call-to-action points at.
pub const BOOKING_URL: &str = "https://calendly.com/masipalh/30min";

pub const BOOKING_LABEL: &str = "Book a discovery call";

/// Booking button that opens the scheduler in a new tab.
#[component]
pub fn BookingLink(
    #[prop(default = "btn btn--primary")] class: &'static str,
    #[prop(default = BOOKING_LABEL)] label: &'static str,
    #[prop(default = true)] arrow: bool,
) -> impl IntoView {
    view! {
        <a class=class href=BOOKING_URL target="_blank" rel="noreferrer">
            {label}
            {arrow.then(|| view! { <span aria-hidden="true">" →"</span> })}
        </a>
    }
}
