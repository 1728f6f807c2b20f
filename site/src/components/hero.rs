//! Hero section: pitch, calls to action, and the "what you get" panel.

use leptos::prelude::*;

use super::booking::BookingLink;

#[derive(Clone, Copy)]
struct Deliverable {
    title: &'static str,
    body: &'static str,
}

const DELIVERABLES: &[Deliverable] = &[
    Deliverable {
        title: "Workflow automation",
        body: "Replace spreadsheets and manual admin with a single system.",
    },
    Deliverable {
        title: "Dashboards & reporting",
        body: "Make decisions using current information, with less guesswork.",
    },
    Deliverable {
        title: "Mobile + web experience",
        body: "Built to work seamlessly across phone, tablet, and desktop.",
    },
];

const TRAITS: &[&str] = &["Fast to deliver", "Reliable & maintainable", "Built around your workflows"];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero section--anchor">
            <div class="hero__glow hero__glow--left" aria-hidden="true"></div>
            <div class="hero__glow hero__glow--right" aria-hidden="true"></div>

            <div class="container hero__inner" data-reveal-group="">
                <div class="grid">
                    <div class="hero__copy">
                        <div class="pill">
                            <span class="dot" aria-hidden="true"></span>
                            <span class="pill__text">"Custom software for operational leverage"</span>
                        </div>

                        <h1 class="hero__title reveal" data-reveal="">
                            "Custom software that runs your business for you."
                        </h1>
                        <p class="hero__lead reveal" data-reveal="">
                            "We design and develop tailored mobile and web applications that automate core business \
                             processes, help you serve more customers, and reduce operational costs without the \
                             overhead of a large development team."
                        </p>
                        <p class="hero__sub reveal" data-reveal="">
                            "From internal systems to customer apps, we help businesses simplify operations, grow \
                             efficiently, and focus on what matters most."
                        </p>
                        <p class="hero__fine reveal" data-reveal="">
                            "Ideal for service businesses, startups, and growing teams that have outgrown \
                             spreadsheets and manual work."
                        </p>

                        <div class="hero__actions reveal" data-reveal="">
                            <BookingLink/>
                            <a class="text-link" href="#benefits">"Explore benefits"</a>
                        </div>

                        <div class="hero__traits reveal" data-reveal="">
                            {TRAITS
                                .iter()
                                .map(|label| {
                                    view! {
                                        <span class="hero__trait">
                                            <span class="dot dot--soft" aria-hidden="true"></span>
                                            {*label}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="hero__aside">
                        <div class="premium-panel tilt float reveal" data-reveal="" data-tilt="">
                            <h2 class="premium-panel__title">"What you get in 2 to 6 weeks"</h2>
                            <p class="premium-panel__lead">
                                "A working first version that removes a real bottleneck and is ready to improve \
                                 with your team."
                            </p>

                            <ul class="premium-panel__list">
                                {DELIVERABLES
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li class="card checklist-item">
                                                <span class="checklist-item__mark" aria-hidden="true">"✓"</span>
                                                <div>
                                                    <p class="checklist-item__title">{item.title}</p>
                                                    <p class="checklist-item__body">{item.body}</p>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>

                            <div class="premium-panel__note">
                                <p>
                                    "Book a call so we can understand where work gets stuck and give you a clear \
                                     plan."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
