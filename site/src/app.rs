//! Document shell and root component.
//!
//! The shell is rendered once at export time. Values that differ between the
//! build machine and the browser (base path, copyright year) are written to
//! `<html>` data attributes so hydration reads back exactly what the server
//! rendered.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;

use crate::config::{SiteConfig, with_base};
use crate::pages::home::HomePage;
use crate::seo::{FONTS_URL, PAGE_DESCRIPTION, PAGE_TITLE, SITE_NAME};

const BASE_PATH_ATTR: &str = "data-base-path";
const YEAR_ATTR: &str = "data-year";

/// Per-render values shared with every section through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub base_path: String,
    pub year: i32,
}

impl PageContext {
    /// Root-relative URL of a public asset.
    #[must_use]
    pub fn asset(&self, path: &str) -> String {
        with_base(&self.base_path, path)
    }

    /// Recover the server-rendered values from the `<html>` element.
    ///
    /// A missing or malformed year falls back to the browser's current year.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        let attr = |name: &str| root.as_ref().and_then(|el| el.get_attribute(name));
        let raw_year = attr(YEAR_ATTR);
        let year = parse_year(raw_year.as_deref()).unwrap_or_else(|| {
            let current = i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default();
            log::debug!("{YEAR_ATTR} is {raw_year:?}, using current year {current}");
            current
        });
        Self { base_path: attr(BASE_PATH_ATTR).unwrap_or_default(), year }
    }
}

/// Year written to `data-year`, if present and positive.
#[must_use]
pub fn parse_year(raw: Option<&str>) -> Option<i32> {
    match raw.map(|value| value.trim().parse::<i32>()) {
        Some(Ok(year)) if year > 0 => Some(year),
        _ => None,
    }
}

/// `<meta property=.. content=..>` for Open Graph tags.
fn property_meta(property: &'static str, content: String) -> impl IntoView {
    leptos::html::meta().attr("property", property).attr("content", content)
}

/// Full HTML document rendered for the static export.
///
/// `structured_data` is the serialized JSON-LD body, see
/// [`Organization::to_script`](crate::seo::Organization::to_script).
pub fn shell(options: LeptosOptions, config: SiteConfig, page: PageContext, structured_data: String) -> impl IntoView {
    let base = config.base_path().to_owned();
    let base_attr = base.clone();
    let year_attr = page.year.to_string();
    let home_url = config.absolute_url("/");
    let twitter_domain = config.host().to_owned();
    let stylesheet = with_base(&base, &format!("/{}/{}.css", options.site_pkg_dir, options.output_name));
    let icon = with_base(&base, "/softwared-logo.svg");

    view! {
        <!DOCTYPE html>
        <html lang="en" data-base-path=base_attr data-year=year_attr>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{PAGE_TITLE}</title>
                <meta name="description" content=PAGE_DESCRIPTION/>
                {property_meta("og:site_name", SITE_NAME.to_owned())}
                {property_meta("og:url", home_url.clone())}
                <meta name="twitter:domain" content=twitter_domain/>
                <link rel="canonical" href=home_url/>
                <link rel="icon" type="image/svg+xml" href=icon/>
                <link rel="preconnect" href="https://fonts.googleapis.com"/>
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin=""/>
                <link rel="stylesheet" href=FONTS_URL/>
                <link rel="stylesheet" href=stylesheet/>
                <script type="application/ld+json" inner_html=structured_data></script>
                <HydrationScripts options root=base/>
            </head>
            <body>
                <App page/>
            </body>
        </html>
    }
}

/// Root component: provides [`PageContext`] and renders the landing page.
#[component]
pub fn App(page: PageContext) -> impl IntoView {
    provide_context(page);

    view! { <HomePage/> }
}
