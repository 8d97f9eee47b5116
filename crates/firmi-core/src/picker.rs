//! Date-Time Picker State
//!
//! Keeps the picker's date field, time field and the timestamp it reports
//! to its caller consistent under partial edits.
//!
//! The fields are stored as typed values and rendered to `YYYY-MM-DD` /
//! `HH:mm` on demand, so any string the picker shows parses back to the
//! same minute it emits.
//!
//! Every operation takes the caller's current local time as `now` instead
//! of reading a clock, which keeps the state machine deterministic.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::{
    error::{PickerError, Result},
    mode::Mode,
    timestamp::{self, Timestamp},
};

/// Re-derive both fields from an external value.
///
/// An absent value stands for `now`. A value chrono cannot represent also
/// falls back to `now`. Both fields are always derived, whatever the mode;
/// a field the mode does not solicit is still tracked as a default.
pub fn derive_fields<Z: TimeZone>(
    value: Option<Timestamp>,
    zone: &Z,
    now: NaiveDateTime,
) -> (Option<NaiveDate>, Option<NaiveTime>) {
    let moment = match value {
        Some(ts) => ts.to_local(zone).unwrap_or_else(|| {
            tracing::warn!(value = ts.as_millis(), "timestamp out of range, using current time");
            now
        }),
        None => now,
    };

    (Some(moment.date()), Some(timestamp::truncate_to_minute(moment.time())))
}

/// State behind one date-time picker
#[derive(Clone, Debug)]
pub struct PickerState<Z: TimeZone = Local> {
    zone: Z,
    mode: Mode,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

impl<Z: TimeZone> PickerState<Z> {
    /// State at mount: fields derived from `value`, gaps filled from `now`.
    pub fn new(zone: Z, mode: Mode, value: Option<Timestamp>, now: NaiveDateTime) -> Self {
        let (date, time) = derive_fields(value, &zone, now);
        let mut state = Self { zone, mode, date, time };
        state.fill_defaults(now);
        state
    }

    /// Restore a state exactly as given, without defaulting.
    pub fn from_parts(zone: Z, mode: Mode, date: Option<NaiveDate>, time: Option<NaiveTime>) -> Self {
        Self {
            zone,
            mode,
            date,
            time: time.map(timestamp::truncate_to_minute),
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub const fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// DateString (`YYYY-MM-DD`)
    pub fn date_string(&self) -> Option<String> {
        self.date.map(timestamp::format_date)
    }

    /// TimeString (`HH:mm`)
    pub fn time_string(&self) -> Option<String> {
        self.time.map(timestamp::format_time)
    }

    /// Date the calendar should highlight
    pub const fn selected_date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Neither field is set; the trigger renders as a placeholder.
    pub const fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }

    /// Text on the trigger button.
    ///
    /// A non-empty `placeholder` replaces the mode's default placeholder.
    pub fn display_text(&self, placeholder: Option<&str>) -> String {
        let placeholder = || {
            placeholder
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| self.mode.default_placeholder())
                .to_string()
        };

        match (self.mode, self.date_string(), self.time_string()) {
            (_, None, None) => placeholder(),
            (Mode::Date, Some(date), _) => date,
            (Mode::Time, _, Some(time)) => time,
            (Mode::DateTime, Some(date), Some(time)) => format!("{date} {time}"),
            _ => placeholder(),
        }
    }

    /// Reinitialize from a new external value.
    ///
    /// This is a full reset of both fields, not a merge. Nothing is
    /// emitted: an absent value only fills the fields with `now` for
    /// display, and the caller keeps its absent value. Returns whether
    /// either field changed.
    pub fn set_value(&mut self, value: Option<Timestamp>, now: NaiveDateTime) -> bool {
        let before = (self.date, self.time);
        let (date, time) = derive_fields(value, &self.zone, now);
        self.date = date;
        self.time = time;
        self.fill_defaults(now);
        before != (self.date, self.time)
    }

    /// Switch mode, keeping existing fields and filling only empty ones.
    pub fn set_mode(&mut self, mode: Mode, now: NaiveDateTime) -> bool {
        let switched = self.mode != mode;
        self.mode = mode;
        self.fill_defaults(now) || switched
    }

    /// Fill fields the mode requires but which are unset. Never emits.
    pub fn fill_defaults(&mut self, now: NaiveDateTime) -> bool {
        let mut changed = false;

        if self.mode.shows_calendar() && self.date.is_none() {
            self.date = Some(now.date());
            changed = true;
        }
        if self.mode.shows_time_input() && self.time.is_none() {
            self.time = Some(timestamp::truncate_to_minute(now.time()));
            changed = true;
        }

        changed
    }

    /// Calendar selection changed. Returns the value to emit.
    ///
    /// In date-and-time mode an existing time is kept on the new date.
    /// Clearing the selection keeps the date field as it was.
    pub fn select_date(
        &mut self,
        selected: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> Result<Option<Timestamp>> {
        let emitted = match (selected, self.mode, self.time) {
            (Some(date), Mode::DateTime, Some(time)) => Some(self.combine(date, time)?),
            (Some(date), _, _) => Some(self.combine(date, NaiveTime::MIN)?),
            (None, Mode::Time, Some(time)) => Some(self.combine(now.date(), time)?),
            (None, _, _) => None,
        };

        if let Some(date) = selected {
            self.date = Some(date);
        }
        self.fill_defaults(now);

        tracing::debug!(mode = %self.mode, ?selected, ?emitted, "date selected");
        Ok(emitted)
    }

    /// Time input changed to `text`. Returns the value to emit.
    ///
    /// Empty text clears the time field. Text that is not a clock time is
    /// rejected and leaves the state untouched.
    pub fn input_time(&mut self, text: &str, now: NaiveDateTime) -> Result<Option<Timestamp>> {
        let text = text.trim();
        let time = if text.is_empty() {
            None
        } else {
            Some(timestamp::parse_time(text)?)
        };

        let emitted = match (time, self.mode, self.date) {
            (Some(time), Mode::DateTime, Some(date)) => Some(self.combine(date, time)?),
            (Some(time), _, _) => Some(self.combine(now.date(), time)?),
            (None, Mode::Date, Some(date)) => Some(self.combine(date, NaiveTime::MIN)?),
            (None, _, _) => None,
        };

        self.time = time;
        self.fill_defaults(now);

        tracing::debug!(mode = %self.mode, text, ?emitted, "time entered");
        Ok(emitted)
    }

    fn combine(&self, date: NaiveDate, time: NaiveTime) -> Result<Timestamp> {
        Timestamp::from_local(date.and_time(time), &self.zone)
            .ok_or_else(|| PickerError::OutOfRange(format!("{date} {time}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Timelike, Utc};

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 5, 27)
            .unwrap()
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn utc_millis(date: NaiveDate, time: NaiveTime) -> Timestamp {
        Timestamp::from_millis(date.and_time(time).and_utc().timestamp_millis())
    }

    #[test]
    fn test_date_time_display_matches_value_to_the_minute() {
        let value = utc_millis(ymd(2024, 3, 5), NaiveTime::from_hms_opt(8, 7, 42).unwrap());
        let state = PickerState::new(Utc, Mode::DateTime, Some(value), now());

        assert_eq!(state.display_text(None), "2024-03-05 08:07");
        assert_eq!(state.time().unwrap().second(), 0);
    }

    #[test]
    fn test_absent_value_means_now() {
        let state = PickerState::new(Utc, Mode::DateTime, None, now());
        assert_eq!(state.display_text(None), "2026-10-19 14:05");
    }

    #[test]
    fn test_out_of_range_value_falls_back_to_now() {
        let state = PickerState::new(Utc, Mode::Date, Some(Timestamp::from_millis(i64::MIN)), now());
        assert_eq!(state.date(), Some(ymd(2026, 10, 19)));
    }

    #[test]
    fn test_selecting_date_keeps_existing_time() {
        let value = utc_millis(ymd(2024, 3, 5), hm(16, 45));
        let mut state = PickerState::new(Utc, Mode::DateTime, Some(value), now());

        let emitted = state.select_date(Some(ymd(2025, 1, 2)), now()).unwrap();

        assert_eq!(emitted, Some(utc_millis(ymd(2025, 1, 2), hm(16, 45))));
        assert_eq!(state.display_text(None), "2025-01-02 16:45");
    }

    #[test]
    fn test_selecting_date_in_date_mode_emits_midnight() {
        let mut state = PickerState::new(Utc, Mode::Date, Some(Timestamp::EPOCH), now());
        assert_eq!(state.display_text(None), "1970-01-01");

        let emitted = state.select_date(Some(ymd(2026, 10, 20)), now()).unwrap();

        assert_eq!(emitted, Some(utc_millis(ymd(2026, 10, 20), NaiveTime::MIN)));
        assert_eq!(state.date_string().as_deref(), Some("2026-10-20"));
    }

    #[test]
    fn test_epoch_date_follows_zone() {
        let zone = FixedOffset::west_opt(8 * 3600).unwrap();
        let mut state = PickerState::new(zone, Mode::Date, Some(Timestamp::EPOCH), now());
        assert_eq!(state.display_text(None), "1969-12-31");

        let emitted = state.select_date(Some(ymd(1970, 1, 1)), now()).unwrap();
        assert_eq!(emitted, Some(Timestamp::from_millis(8 * 3600 * 1000)));
    }

    #[test]
    fn test_clearing_calendar_emits_absent_outside_time_mode() {
        for mode in [Mode::Date, Mode::DateTime] {
            let mut state = PickerState::new(Utc, mode, Some(Timestamp::EPOCH), now());
            assert_eq!(state.select_date(None, now()).unwrap(), None);
            assert_eq!(state.date(), Some(ymd(1970, 1, 1)));
        }
    }

    #[test]
    fn test_clearing_calendar_in_time_mode_keeps_time() {
        let value = utc_millis(ymd(2024, 3, 5), hm(7, 30));
        let mut state = PickerState::new(Utc, Mode::Time, Some(value), now());

        let emitted = state.select_date(None, now()).unwrap();

        assert_eq!(emitted, Some(utc_millis(ymd(2026, 10, 19), hm(7, 30))));
    }

    #[test]
    fn test_time_input_combines_with_date() {
        let mut state = PickerState::new(Utc, Mode::DateTime, Some(Timestamp::EPOCH), now());

        let emitted = state.input_time("09:15", now()).unwrap();

        assert_eq!(emitted, Some(utc_millis(ymd(1970, 1, 1), hm(9, 15))));
        assert_eq!(state.display_text(None), "1970-01-01 09:15");
    }

    #[test]
    fn test_time_input_alone_lands_on_today() {
        let mut state = PickerState::new(Utc, Mode::Time, Some(Timestamp::EPOCH), now());

        let emitted = state.input_time("23:59", now()).unwrap();

        assert_eq!(emitted, Some(utc_millis(ymd(2026, 10, 19), hm(23, 59))));
        assert_eq!(state.display_text(None), "23:59");
    }

    #[test]
    fn test_clearing_time_in_date_mode_emits_date() {
        let mut state = PickerState::new(Utc, Mode::Date, Some(Timestamp::EPOCH), now());

        let emitted = state.input_time("", now()).unwrap();

        assert_eq!(emitted, Some(Timestamp::EPOCH));
        assert_eq!(state.time(), None);
        assert_eq!(state.display_text(None), "1970-01-01");
    }

    #[test]
    fn test_clearing_time_in_date_time_mode_emits_absent_then_defaults() {
        let mut state = PickerState::new(Utc, Mode::DateTime, Some(Timestamp::EPOCH), now());

        assert_eq!(state.input_time("", now()).unwrap(), None);
        assert_eq!(state.time_string().as_deref(), Some("14:05"));
    }

    #[test]
    fn test_invalid_time_leaves_state_untouched() {
        let mut state = PickerState::new(Utc, Mode::DateTime, Some(Timestamp::EPOCH), now());

        let err = state.input_time("25:99", now()).unwrap_err();

        assert_eq!(err, PickerError::InvalidTime("25:99".into()));
        assert_eq!(state.display_text(None), "1970-01-01 00:00");
    }

    /// Caller that stores every emission and feeds it back as the value.
    struct Controlled {
        state: PickerState<Utc>,
        value: Option<Timestamp>,
    }

    impl Controlled {
        fn new(mode: Mode, value: Option<Timestamp>) -> Self {
            Self {
                state: PickerState::new(Utc, mode, value, now()),
                value,
            }
        }

        fn receive(&mut self, emitted: Result<Option<Timestamp>>) {
            self.value = emitted.unwrap();
            self.state.set_value(self.value, now());
        }
    }

    #[test]
    fn test_same_value_twice_is_idempotent() {
        let value = utc_millis(ymd(2024, 3, 5), hm(16, 45));
        let mut state = PickerState::new(Utc, Mode::DateTime, None, now());

        assert!(state.set_value(Some(value), now()));
        let snapshot = (state.date_string(), state.time_string(), state.display_text(None));
        assert!(!state.set_value(Some(value), now()));

        assert_eq!(
            snapshot,
            (state.date_string(), state.time_string(), state.display_text(None))
        );
    }

    #[test]
    fn test_new_value_resets_edits() {
        let mut state = PickerState::new(Utc, Mode::DateTime, Some(Timestamp::EPOCH), now());
        state.input_time("18:00", now()).unwrap();

        state.set_value(Some(utc_millis(ymd(2000, 6, 1), hm(6, 0))), now());

        assert_eq!(state.display_text(None), "2000-06-01 06:00");
    }

    #[test]
    fn test_absent_value_fills_display_only() {
        let mut state = PickerState::new(Utc, Mode::Date, Some(Timestamp::EPOCH), now());

        state.set_value(None, now());

        assert_eq!(state.display_text(None), "2026-10-19");
    }

    #[test]
    fn test_cleared_calendar_stays_absent_for_controlled_caller() {
        let mut caller = Controlled::new(Mode::Date, Some(Timestamp::EPOCH));

        let emitted = caller.state.select_date(None, now());
        caller.receive(emitted);

        assert_eq!(caller.value, None);
    }

    #[test]
    fn test_cleared_time_stays_absent_for_controlled_caller() {
        let mut caller = Controlled::new(Mode::DateTime, Some(Timestamp::EPOCH));

        let emitted = caller.state.input_time("", now());
        caller.receive(emitted);

        assert_eq!(caller.value, None);
        assert_eq!(caller.state.time_string().as_deref(), Some("14:05"));
    }

    #[test]
    fn test_controlled_round_trip_keeps_time_mode_date() {
        let value = utc_millis(ymd(2024, 3, 5), hm(7, 30));
        let mut caller = Controlled::new(Mode::Time, Some(value));

        caller.receive(Ok(Some(value)));

        assert_eq!(caller.value, Some(value));
        assert_eq!(caller.state.date(), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn test_mode_round_trip_preserves_time() {
        let mut state = PickerState::new(Utc, Mode::DateTime, Some(Timestamp::EPOCH), now());
        state.input_time("10:20", now()).unwrap();

        state.set_mode(Mode::Date, now());
        assert_eq!(state.display_text(None), "1970-01-01");
        state.set_mode(Mode::DateTime, now());

        assert_eq!(state.display_text(None), "1970-01-01 10:20");
    }

    #[test]
    fn test_mode_switch_fills_only_missing_fields() {
        let mut state = PickerState::from_parts(Utc, Mode::Date, Some(ymd(2024, 3, 5)), None);

        assert!(state.set_mode(Mode::DateTime, now()));

        assert_eq!(state.date(), Some(ymd(2024, 3, 5)));
        assert_eq!(state.time(), Some(hm(14, 5)));
        assert!(!state.fill_defaults(now()));
    }

    #[test]
    fn test_display_table() {
        let date = Some(ymd(2024, 3, 5));
        let time = Some(hm(8, 0));
        let cases = [
            (Mode::Date, None, None, "Select Date"),
            (Mode::Time, None, None, "Select Time"),
            (Mode::DateTime, None, None, "Select Date and Time"),
            (Mode::Date, date, None, "2024-03-05"),
            (Mode::Date, None, time, "Select Date"),
            (Mode::Time, None, time, "08:00"),
            (Mode::Time, date, None, "Select Time"),
            (Mode::DateTime, date, None, "Select Date and Time"),
            (Mode::DateTime, None, time, "Select Date and Time"),
            (Mode::DateTime, date, time, "2024-03-05 08:00"),
        ];

        for (mode, date, time, expected) in cases {
            let state = PickerState::from_parts(Utc, mode, date, time);
            assert_eq!(state.display_text(None), expected, "{mode} {date:?} {time:?}");
        }
    }

    #[test]
    fn test_placeholder_override_wins() {
        let empty = PickerState::from_parts(Utc, Mode::Time, None, None);
        assert!(empty.is_empty());
        assert_eq!(empty.display_text(Some("Pick a slot")), "Pick a slot");
        assert_eq!(empty.display_text(Some("")), "Select Time");

        let partial = PickerState::from_parts(Utc, Mode::DateTime, Some(ymd(2024, 3, 5)), None);
        assert_eq!(partial.display_text(Some("Pick a slot")), "Pick a slot");
    }

    #[test]
    fn test_emitted_values_round_trip_through_display() {
        let mut state = PickerState::new(Utc, Mode::DateTime, None, now());
        let emitted = state.input_time("06:30", now()).unwrap().unwrap();

        let mut echo = PickerState::new(Utc, Mode::DateTime, None, now());
        echo.set_value(Some(emitted), now());

        assert_eq!(echo.display_text(None), state.display_text(None));
    }
}
