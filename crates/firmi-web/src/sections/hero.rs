use firmi_core::ButtonVariant;
use leptos::prelude::*;

use crate::components::Button;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Firmi"</h1>
            <p class="tagline">"The AI colleague that knows your company"</p>
            <div class="cta">
                <Button href="/secure/chat">"Start chatting"</Button>
                <Button href="#how-it-works" variant=ButtonVariant::Outline>"See how it works"</Button>
            </div>
        </header>
    }
}
