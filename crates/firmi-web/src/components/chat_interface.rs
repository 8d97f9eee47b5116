use leptos::prelude::*;

use super::MessageBubble;
use crate::api::{self, ChatMessage, ChatRole};

/// Conversation view with an input box
#[component]
pub fn ChatInterface() -> impl IntoView {
    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let push = move |role: ChatRole, content: String| {
        set_messages.update(|msgs| {
            let id = msgs.len();
            msgs.push(ChatMessage { id, role, content });
        });
    };

    let send = move |()| {
        let msg = input.get();
        if msg.trim().is_empty() || loading.get() {
            return;
        }

        push(ChatRole::User, msg.clone());
        set_input.set(String::new());
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            match api::send_chat(&msg).await {
                Ok(response) => push(ChatRole::Assistant, response),
                Err(e) => push(ChatRole::Error, e),
            }
            set_loading.set(false);
        });
    };

    view! {
        <section class="chat">
            <header class="chat-header">
                <h1>"Firmi"</h1>
                <p class="subtitle">"Ask anything about your workspace"</p>
            </header>

            <div class="messages">
                <For
                    each=move || messages.get()
                    key=|msg| msg.id
                    children=move |msg| view! { <MessageBubble message=msg /> }
                />
                <Show when=move || loading.get()>
                    <div class="message loading">"..."</div>
                </Show>
            </div>

            <div class="input-area">
                <textarea
                    placeholder="Ask Firmi..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send(());
                        }
                    }
                />
                <button class="btn btn-primary" on:click=move |_| send(()) disabled=move || loading.get()>
                    {move || if loading.get() { "..." } else { "Send" }}
                </button>
            </div>
        </section>
    }
}
