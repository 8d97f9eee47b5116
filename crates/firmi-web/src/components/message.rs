use leptos::prelude::*;

use crate::api::ChatMessage;

/// Message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let role = message.role.as_str();

    view! {
        <div class=format!("message message-{role}")>
            <span class="role">{role}</span>
            <p class="content">{message.content}</p>
        </div>
    }
}
