//! UI Components

mod button;
mod calendar;
mod chat_interface;
mod date_time_picker;
mod message;
mod select;

pub use button::Button;
pub use calendar::Calendar;
pub use chat_interface::ChatInterface;
pub use date_time_picker::DateTimePicker;
pub use message::MessageBubble;
pub use select::Select;

/// Base class followed by an optional caller-supplied override.
pub(crate) fn class_list(base: &str, extra: Option<String>) -> String {
    match extra.filter(|extra| !extra.trim().is_empty()) {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list() {
        assert_eq!(class_list("picker", None), "picker");
        assert_eq!(class_list("picker", Some("  ".into())), "picker");
        assert_eq!(class_list("picker", Some("wide".into())), "picker wide");
    }
}
