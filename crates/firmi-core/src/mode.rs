//! Picker Mode

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// Which parts of a moment the picker solicits from the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Calendar only
    Date,
    /// Time input only
    Time,
    /// Calendar and time input
    #[default]
    DateTime,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Date, Self::Time, Self::DateTime];

    /// Wire name (`date`, `time`, `date_time`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date_time",
        }
    }

    pub const fn shows_calendar(self) -> bool {
        !matches!(self, Self::Time)
    }

    pub const fn shows_time_input(self) -> bool {
        !matches!(self, Self::Date)
    }

    /// Placeholder used when no override is given
    pub const fn default_placeholder(self) -> &'static str {
        match self {
            Self::Date => "Select Date",
            Self::Time => "Select Time",
            Self::DateTime => "Select Date and Time",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| PickerError::UnknownMode(s.to_string()))
    }
}
