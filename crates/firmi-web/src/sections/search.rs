use leptos::prelude::*;

#[component]
pub fn SearchSection() -> impl IntoView {
    view! {
        <section class="search">
            <h2>"Search that understands the question"</h2>
            <p>
                "Ask for \"the pricing deck we sent Acme last spring\" and get the file, "
                "not a list of keyword matches."
            </p>
        </section>
    }
}
