//! The landing page.
//!
//! Sections are static markup. Once the page is live in the browser the
//! scroll-reveal observer and tilt bindings are installed for the whole
//! document and held until the page is torn down.

use leptos::prelude::*;

use crate::components::benefits::Benefits;
use crate::components::closing::Closing;
use crate::components::faq::FaqSection;
use crate::components::header::SiteHeader;
use crate::components::hero::Hero;
use crate::components::process::Process;

#[cfg(feature = "hydrate")]
use crate::util::{motion::MotionPreferences, reveal_observer::RevealObserver, tilt_binding::TiltBindings};

/// Page-wide behaviors; dropping this releases every observer and listener.
#[cfg(feature = "hydrate")]
struct Behaviors {
    _reveal: Option<RevealObserver>,
    _tilt: Option<TiltBindings>,
}

#[cfg(feature = "hydrate")]
impl Behaviors {
    fn install() -> Self {
        let prefs = MotionPreferences::detect();
        let reveal = RevealObserver::install(prefs);
        let tilt = TiltBindings::install(prefs);
        log::debug!(
            "behaviors installed: {} reveals pending, {} tilt targets",
            reveal.as_ref().map_or(0, RevealObserver::pending),
            tilt.as_ref().map_or(0, TiltBindings::len),
        );
        Self { _reveal: reveal, _tilt: tilt }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let behaviors = StoredValue::new_local(None::<Behaviors>);
        Effect::new(move || behaviors.set_value(Some(Behaviors::install())));
    }

    view! {
        <div class="page">
            <a class="skip-link" href="#main">"Skip to content"</a>
            <SiteHeader/>
            <main id="main" class="section--anchor">
                <Hero/>
                <Benefits/>
                <Process/>
                <FaqSection/>
                <Closing/>
            </main>
        </div>
    }
}
