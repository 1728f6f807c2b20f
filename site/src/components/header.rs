//! Sticky site header with logo, section navigation, and booking button.

use leptos::prelude::*;

use super::booking::BookingLink;
use super::mobile_menu::MobileMenu;
use crate::app::PageContext;

/// In-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Benefits", href: "#benefits" },
    NavLink { label: "Process", href: "#process" },
    NavLink { label: "FAQ", href: "#faq" },
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let page = expect_context::<PageContext>();
    let logo = page.asset("/softwared-logo.svg");

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <a href="#top" class="site-header__brand">
                    <img src=logo alt="Softwared" width="440" height="120" class="site-header__logo"/>
                </a>

                <nav class="site-header__nav" aria-label="Primary">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a class="site-header__link" href=link.href>{link.label}</a> })
                        .collect_view()}
                </nav>

                <div class="site-header__actions">
                    <div class="site-header__cta">
                        <BookingLink class="btn btn--primary btn--sm"/>
                    </div>
                    <MobileMenu/>
                </div>
            </div>
        </header>
    }
}
