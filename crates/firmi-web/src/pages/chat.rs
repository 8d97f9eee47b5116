//! Chat Page
//!
//! Access control for this route sits in front of the app; the page itself
//! only hosts the chat widget.

use leptos::prelude::*;

use crate::components::ChatInterface;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <ChatInterface />
        </div>
    }
}
