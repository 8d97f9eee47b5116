//! # firmi-core
//!
//! Framework-free state behind the Firmi site's form widgets.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       PickerState                            │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │  Timestamp   │──▶│ date / time  │──▶│  display text    │  │
//! │  │  (epoch ms)  │◀──│   fields     │   │  (per Mode)      │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The web crate owns rendering; everything that decides *what* the
//! picker shows or emits lives here so it can be tested without a browser.

pub mod calendar;
pub mod error;
pub mod mode;
pub mod options;
pub mod picker;
pub mod timestamp;

pub use calendar::{CalendarDay, CalendarMonth};
pub use error::{PickerError, Result};
pub use mode::Mode;
pub use options::{ButtonVariant, SelectOption};
pub use picker::{PickerState, derive_fields};
pub use timestamp::Timestamp;
