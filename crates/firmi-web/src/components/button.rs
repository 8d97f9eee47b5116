use firmi_core::ButtonVariant;
use leptos::{either::Either, prelude::*};

/// Button, or a link styled as one when `href` is set
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = format!("btn {}", variant.class());

    match href {
        Some(href) => Either::Left(view! { <a href=href class=class>{children()}</a> }),
        None => Either::Right(view! {
            <button
                type="button"
                class=class
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.run(());
                    }
                }
            >
                {children()}
            </button>
        }),
    }
}
