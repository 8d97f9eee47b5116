//! Month calendar used inside the date-time picker

use chrono::{Datelike, Local, NaiveDate};
use firmi_core::calendar::{CalendarDay, CalendarMonth, WEEKDAY_LABELS, toggle_selection};
use leptos::prelude::*;

use super::class_list;

/// Single-date calendar.
///
/// Reports `Some(date)` for a newly picked day and `None` when the
/// selected day is clicked again.
#[component]
pub fn Calendar(
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    #[prop(into)] on_select: Callback<Option<NaiveDate>>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let today = Local::now().date_naive();
    let initial = selected.get_untracked().unwrap_or(today);
    let (month, set_month) = signal(CalendarMonth::containing(initial));

    // Follow the selection when it moves to another month.
    Effect::new(move |_| {
        if let Some(date) = selected.get() {
            set_month.set(CalendarMonth::containing(date));
        }
    });

    let day_cell = move |day: CalendarDay| {
        let date = day.date;
        let cell_class = move || {
            let mut class = String::from("calendar-day");
            if !day.in_month {
                class.push_str(" outside");
            }
            if date == today {
                class.push_str(" today");
            }
            if selected.get() == Some(date) {
                class.push_str(" selected");
            }
            class
        };

        view! {
            <td>
                <button
                    type="button"
                    class=cell_class
                    on:click=move |_| on_select.run(toggle_selection(selected.get_untracked(), date))
                >
                    {date.day()}
                </button>
            </td>
        }
    };

    view! {
        <div class=move || class_list("calendar", class.get())>
            <div class="calendar-header">
                <button
                    type="button"
                    class="btn btn-ghost"
                    aria-label="Previous month"
                    on:click=move |_| set_month.update(|m| *m = m.previous())
                >
                    "‹"
                </button>
                <span class="calendar-title">{move || month.get().title()}</span>
                <button
                    type="button"
                    class="btn btn-ghost"
                    aria-label="Next month"
                    on:click=move |_| set_month.update(|m| *m = m.next())
                >
                    "›"
                </button>
            </div>
            <table class="calendar-grid">
                <thead>
                    <tr>
                        {WEEKDAY_LABELS.map(|label| view! { <th>{label}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        month
                            .get()
                            .weeks()
                            .into_iter()
                            .map(|week| view! { <tr>{week.map(day_cell).collect_view()}</tr> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
