use leptos::prelude::*;

#[component]
pub fn DelegateSection() -> impl IntoView {
    view! {
        <section class="delegate">
            <h2>"Delegate the busywork"</h2>
            <p>"Hand Firmi the follow-ups, status summaries and weekly digests."</p>
            <ul class="feature-list">
                <li>"Draft replies from the thread's full history"</li>
                <li>"Summarize meetings into action items"</li>
                <li>"Send recurring reports without being asked"</li>
            </ul>
        </section>
    }
}
