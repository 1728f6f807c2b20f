//! Benefits section with the tilt-enabled card grid.

use leptos::prelude::*;

use super::icons::{CHAT, CLOCK, DEVICE, DOLLAR, GEAR, GROWTH, Icon, LINES, PEOPLE};

#[derive(Clone, Copy)]
struct Benefit {
    title: &'static str,
    body: &'static str,
    icon: &'static [&'static str],
}

const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Custom-built around your business",
        body: "No generic software. Every application is designed to match your workflows, customers, and goals.",
        icon: LINES,
    },
    Benefit {
        title: "Clear communication",
        body: "You work directly with the developer building your product. There are no middlemen.",
        icon: CHAT,
    },
    Benefit {
        title: "Automate and simplify core operations",
        body: "Replace repetitive admin with software that works all day and night. This reduces errors and saves time.",
        icon: GEAR,
    },
    Benefit {
        title: "Serve more customers without hiring",
        body: "Handle more customers without hiring more staff.",
        icon: PEOPLE,
    },
    Benefit {
        title: "Affordable development",
        body: "We use modern tools to deliver faster at a lower cost than many traditional agencies.",
        icon: DOLLAR,
    },
    Benefit {
        title: "Mobile and web solutions",
        body: "Your software works seamlessly across phones, tablets, and desktops.",
        icon: DEVICE,
    },
    Benefit {
        title: "Built for growth",
        body: "Scalable foundations so your app grows as your business grows.",
        icon: GROWTH,
    },
];

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="section section--surface section--anchor">
            <div class="container section__inner">
                <div class="grid">
                    <div class="section__intro">
                        <h2 class="section__title reveal" data-reveal="">"Build leverage into your operations."</h2>
                        <p class="section__lead reveal" data-reveal="">
                            "Software is how you scale without adding headcount. We build systems that reduce admin, \
                             eliminate errors, and help you serve more customers."
                        </p>

                        <div class="highlight reveal" data-reveal="">
                            <div class="highlight__icon">
                                <Icon paths=CLOCK class="icon icon--accent"/>
                            </div>
                            <div>
                                <p class="highlight__title">"Fast delivery, modern tools"</p>
                                <p class="highlight__body">
                                    "Built with reliable, modern tools so you get a high quality system faster and at \
                                     a lower cost."
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="section__body">
                        <div class="card-grid" data-reveal-group="">
                            {BENEFITS
                                .iter()
                                .map(|benefit| {
                                    view! {
                                        <div class="card-grid__cell reveal" data-reveal="">
                                            <div class="card tilt benefit" data-tilt="">
                                                <div class="benefit__icon">
                                                    <Icon paths=benefit.icon/>
                                                </div>
                                                <div>
                                                    <h3 class="benefit__title">{benefit.title}</h3>
                                                    <p class="benefit__body">{benefit.body}</p>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
