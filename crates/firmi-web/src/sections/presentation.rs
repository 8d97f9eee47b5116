use leptos::prelude::*;

#[component]
pub fn PresentationSection() -> impl IntoView {
    view! {
        <section class="presentation">
            <h2>"From question to presentation"</h2>
            <p>"Turn any answer into a slide deck that follows your brand template."</p>
        </section>
    }
}
