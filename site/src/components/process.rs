//! Numbered delivery process.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Step {
    number: &'static str,
    title: &'static str,
    body: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Discovery and process mapping",
        body: "We identify where work slows down and define what success looks like.",
    },
    Step {
        number: "02",
        title: "Plan and confirm what’s included",
        body: "We confirm what the system will do, who will use it, and what information it needs.",
    },
    Step {
        number: "03",
        title: "Build the first version (2 to 6 weeks)",
        body: "We build and launch the core automation and a simple interface your team can use quickly.",
    },
    Step {
        number: "04",
        title: "Improve and grow",
        body: "We add features and integrations as you see results and your needs grow.",
    },
];

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="section section--anchor">
            <div class="container section__inner">
                <div class="grid">
                    <div class="section__intro">
                        <h2 class="section__title reveal" data-reveal="">
                            "A simple process that gets your system live."
                        </h2>
                        <p class="section__lead reveal" data-reveal="">
                            "First we get clarity, then we build the simplest solution that removes a real problem."
                        </p>
                    </div>
                    <div class="section__body">
                        <ol class="card-grid" data-reveal-group="">
                            {STEPS
                                .iter()
                                .map(|step| {
                                    view! {
                                        <li class="card-grid__cell">
                                            <div class="card step reveal" data-reveal="">
                                                <div class="step__head">
                                                    <p class="step__number">{step.number}</p>
                                                    <span class="step__badge" aria-hidden="true"></span>
                                                </div>
                                                <h3 class="step__title">{step.title}</h3>
                                                <p class="step__body">{step.body}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </div>
                </div>
            </div>
        </section>
    }
}
