use leptos::prelude::*;

const INTEGRATIONS: [&str; 6] = ["Google Drive", "Gmail", "Slack", "Notion", "Outlook", "SharePoint"];

#[component]
pub fn WorkspaceSection() -> impl IntoView {
    view! {
        <section class="workspace">
            <h2>"Works where your team works"</h2>
            <ul class="integrations">
                {INTEGRATIONS.map(|name| view! { <li>{name}</li> }).collect_view()}
            </ul>
        </section>
    }
}
