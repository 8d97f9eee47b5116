//! Shared form types
//!
//! Data shapes used by the site's buttons and select controls.

use serde::{Deserialize, Serialize};

/// Visual style of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Default,
    Ghost,
    Link,
    Destructive,
    Outline,
    Secondary,
}

impl ButtonVariant {
    /// CSS class applied alongside `btn`
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "btn-primary",
            Self::Ghost => "btn-ghost",
            Self::Link => "btn-link",
            Self::Destructive => "btn-destructive",
            Self::Outline => "btn-outline",
            Self::Secondary => "btn-secondary",
        }
    }
}

/// One entry of a select control
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Text shown to the user
    pub label: String,
    /// Submitted value
    pub value: String,
    /// Form field name
    pub name: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            name: name.into(),
        }
    }
}
