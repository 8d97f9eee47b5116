//! Query section: a live form for scheduling a Firmi briefing.

use chrono::Local;
use firmi_core::{Mode, SelectOption, Timestamp, timestamp};
use leptos::prelude::*;

use crate::components::{DateTimePicker, Select};

fn cadence_options() -> Vec<SelectOption> {
    [("Just once", "once"), ("Every day", "daily"), ("Every week", "weekly")]
        .into_iter()
        .map(|(label, value)| SelectOption::new(label, value, "cadence"))
        .collect()
}

fn mode_options() -> Vec<SelectOption> {
    [("Date and time", Mode::DateTime), ("Date", Mode::Date), ("Time", Mode::Time)]
        .into_iter()
        .map(|(label, mode)| SelectOption::new(label, mode.as_str(), "date_type"))
        .collect()
}

/// One-line summary of a scheduled briefing.
fn describe_schedule(when: Option<Timestamp>, mode: Mode, cadence: &str) -> String {
    let Some(moment) = when.and_then(|ts| ts.to_local(&Local)) else {
        return "No time picked yet.".into();
    };
    let date = timestamp::format_date(moment.date());
    let time = timestamp::format_time(moment.time());

    match mode {
        Mode::Date => format!("Firmi will brief you on {date} ({cadence})."),
        Mode::Time => format!("Firmi will brief you at {time} ({cadence})."),
        Mode::DateTime => format!("Firmi will brief you on {date} at {time} ({cadence})."),
    }
}

#[component]
pub fn QuerySection() -> impl IntoView {
    let (cadence, set_cadence) = signal(String::from("once"));
    let (mode_name, set_mode_name) = signal(Mode::DateTime.to_string());
    let (scheduled, set_scheduled) = signal(None::<Timestamp>);

    let mode = Signal::derive(move || mode_name.get().parse::<Mode>().ok());
    let error = Signal::derive(move || {
        scheduled
            .get()
            .is_none()
            .then(|| "Pick when Firmi should run this query.".to_string())
    });

    view! {
        <section class="query">
            <h2>"Ask once, hear back on schedule"</h2>
            <p>"Queue a question and Firmi delivers the answer when you need it."</p>

            <form class="query-form" on:submit=|ev| ev.prevent_default()>
                <input type="text" placeholder="What changed in the Q3 pipeline?" />
                <Select
                    label="Repeat"
                    options=cadence_options()
                    value=cadence
                    on_change=Callback::new(move |value: String| set_cadence.set(value))
                />
                <Select
                    label="Pick"
                    options=mode_options()
                    value=mode_name
                    on_change=Callback::new(move |value: String| set_mode_name.set(value))
                />
                <DateTimePicker
                    value=scheduled
                    date_type=mode
                    on_change=Callback::new(move |ts: Option<Timestamp>| set_scheduled.set(ts))
                    error=error
                    placeholder="When should Firmi answer?"
                />
                <p class="query-summary">
                    {move || {
                        describe_schedule(
                            scheduled.get(),
                            mode.get().unwrap_or_default(),
                            &cadence.get(),
                        )
                    }}
                </p>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_options_parse_back() {
        for option in mode_options() {
            assert!(option.value.parse::<Mode>().is_ok(), "{}", option.value);
            assert_eq!(option.name, "date_type");
        }
    }

    #[test]
    fn test_summary_without_value() {
        assert_eq!(
            describe_schedule(None, Mode::DateTime, "once"),
            "No time picked yet."
        );
    }

    #[test]
    fn test_summary_date_only() {
        let summary = describe_schedule(Some(Timestamp::EPOCH), Mode::Date, "weekly");
        assert!(summary.starts_with("Firmi will brief you on 19"));
        assert!(summary.ends_with("(weekly)."));
    }
}
