//! Frequently asked questions as native disclosures.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: &[Faq] = &[
    Faq {
        question: "How soon can we launch?",
        answer: "Most projects start with a focused first version in 2 to 6 weeks. After that, we improve it based \
                 on real use.",
    },
    Faq {
        question: "Will it work on mobile and desktop?",
        answer: "Yes. It will work well on phone, tablet, and desktop.",
    },
    Faq {
        question: "Who will we communicate with?",
        answer: "You work directly with the developer building your product. You get clear updates and one point \
                 of contact.",
    },
    Faq {
        question: "Can we connect it to our existing tools?",
        answer: "Usually, yes. We can connect to common CRMs, payment providers, spreadsheets, and internal \
                 databases.",
    },
];

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="section section--surface section--anchor">
            <div class="container section__inner">
                <div class="grid">
                    <div class="section__intro">
                        <h2 class="section__title reveal" data-reveal="">"Questions, answered."</h2>
                        <p class="section__lead reveal" data-reveal="">
                            "No fluff. Just the questions business owners actually ask."
                        </p>
                    </div>
                    <div class="section__body">
                        <div class="faq-list" data-reveal-group="">
                            {FAQS
                                .iter()
                                .map(|faq| {
                                    view! {
                                        <details class="card faq reveal" data-reveal="">
                                            <summary class="faq__question">
                                                {faq.question}
                                                <span class="faq__marker" aria-hidden="true">"+"</span>
                                            </summary>
                                            <div class="faq__answer">{faq.answer}</div>
                                        </details>
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
