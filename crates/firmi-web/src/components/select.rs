use firmi_core::SelectOption;
use leptos::prelude::*;

/// Native select over a list of [`SelectOption`]s
#[component]
pub fn Select(
    options: Vec<SelectOption>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let name = options.first().map(|option| option.name.clone()).unwrap_or_default();

    view! {
        <label class="select">
            {label.map(|label| view! { <span class="select-label">{label}</span> })}
            <select
                name=name
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
