use chrono::{Datelike, Local};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Local::now().year();

    view! {
        <footer class="footer">
            <nav>
                <a href="/">"Home"</a>
                <a href="/secure/chat">"Chat"</a>
            </nav>
            <p>{format!("© {year} Firmi")}</p>
        </footer>
    }
}
