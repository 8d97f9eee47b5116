//! Date-time picker widget
//!
//! A trigger button showing the current selection, and an overlay with a
//! calendar and/or a time input depending on the mode. All decisions about
//! what to show and what to emit are made by [`PickerState`].

use chrono::{Local, NaiveDate, NaiveDateTime};
use firmi_core::{Mode, PickerState, Timestamp};
use leptos::prelude::*;

use super::{Calendar, class_list};

fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

#[component]
pub fn DateTimePicker(
    /// Receives the new timestamp, or `None` when the selection is cleared
    #[prop(into)]
    on_change: Callback<Option<Timestamp>>,
    /// External value in epoch milliseconds; defaults to now
    #[prop(optional, into)]
    value: MaybeProp<Timestamp>,
    /// Defaults to [`Mode::DateTime`]
    #[prop(optional, into)]
    date_type: MaybeProp<Mode>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// Shown verbatim beneath the control
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] input_class: MaybeProp<String>,
    #[prop(optional, into)] error_class: MaybeProp<String>,
    #[prop(optional, into)] popover_class: MaybeProp<String>,
    #[prop(optional, into)] calendar_class: MaybeProp<String>,
    #[prop(optional, into)] container_class: MaybeProp<String>,
) -> impl IntoView {
    let state = RwSignal::new(PickerState::new(
        Local,
        date_type.get_untracked().unwrap_or_default(),
        value.get_untracked(),
        now_local(),
    ));
    let (open, set_open) = signal(false);
    let mode = move || state.with(PickerState::mode);

    let emit = move |result: firmi_core::Result<Option<Timestamp>>| match result {
        Ok(change) => on_change.run(change),
        Err(err) => leptos::logging::warn!("date-time picker: {err}"),
    };

    // A new external value resets both fields; the caller already owns it,
    // so nothing is emitted back.
    Effect::new(move |previous: Option<Option<Timestamp>>| {
        let incoming = value.get();
        if previous != Some(incoming) {
            state.maybe_update(|s| s.set_value(incoming, now_local()));
        }
        incoming
    });

    Effect::new(move |_| {
        let mode = date_type.get().unwrap_or_default();
        state.maybe_update(|s| s.set_mode(mode, now_local()));
    });

    let on_select = Callback::new(move |date: Option<NaiveDate>| {
        if let Some(result) = state.try_update(|s| s.select_date(date, now_local())) {
            emit(result);
        }
    });

    let trigger_class = move || {
        let mut base = String::from("btn btn-outline picker-trigger");
        if state.with(PickerState::is_empty) {
            base.push_str(" text-muted");
        }
        class_list(&base, input_class.get())
    };

    view! {
        <div class=move || class_list("date-time-picker", container_class.get())>
            <button
                type="button"
                class=trigger_class
                disabled=move || disabled.get().unwrap_or(false)
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <span class="picker-text">
                    {move || state.with(|s| s.display_text(placeholder.get().as_deref()))}
                </span>
            </button>

            <Show when=move || open.get()>
                <div class=move || class_list("picker-popover", popover_class.get())>
                    <Show when=move || mode().shows_calendar()>
                        <Calendar
                            selected=Signal::derive(move || state.with(PickerState::selected_date))
                            on_select=on_select
                            class=calendar_class
                        />
                    </Show>
                    <Show when=move || mode().shows_time_input()>
                        <div class="picker-time">
                            <input
                                type="time"
                                class=move || class_list("picker-time-input", class.get())
                                prop:value=move || state.with(|s| s.time_string().unwrap_or_default())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    if let Some(result) = state.try_update(|s| s.input_time(&text, now_local())) {
                                        emit(result);
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
            </Show>

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p class=move || class_list("picker-error", error_class.get())>{message}</p>
                        }
                    })
            }}
        </div>
    }
}
