use leptos::prelude::*;

const STEPS: [(&str, &str); 3] = [
    ("Connect", "Link the drives, inboxes and wikis your team already uses."),
    ("Ask", "Type a question the way you would ask a colleague."),
    ("Act", "Get an answer with sources, a draft, or a finished deliverable."),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <h2>"How it works"</h2>
            <ol class="steps">
                {STEPS
                    .into_iter()
                    .enumerate()
                    .map(|(i, (title, body))| {
                        view! {
                            <li class="step">
                                <span class="step-number">{i + 1}</span>
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
