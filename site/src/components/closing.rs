//! Final call to action and page footer.

use leptos::prelude::*;

use super::booking::BookingLink;
use crate::app::PageContext;

#[component]
pub fn Closing() -> impl IntoView {
    let year = expect_context::<PageContext>().year;
    let copyright = format!("© {year} Softwared. Technology shaped for impact.");

    view! {
        <section class="section">
            <div class="container section__inner">
                <div class="surface closing reveal" data-reveal="">
                    <div class="grid">
                        <div class="closing__copy">
                            <h2 class="section__title">"Let’s automate what’s slowing you down."</h2>
                            <p class="section__lead">
                                "Book a discovery call and we’ll turn one messy workflow into a clean system you can \
                                 scale."
                            </p>
                        </div>
                        <div class="closing__action">
                            <BookingLink class="btn btn--primary btn--block"/>
                            <p class="closing__fine">
                                "No obligation. If we’re not a fit, you’ll still leave with clarity."
                            </p>
                        </div>
                    </div>
                </div>

                <footer class="site-footer">
                    <p class="site-footer__copy">{copyright}</p>
                    <div class="site-footer__links">
                        <a class="site-footer__link" href="#top">"Back to top"</a>
                        <BookingLink class="site-footer__link" label="Book a call" arrow=false/>
                    </div>
                </footer>
            </div>
        </section>
    }
}
