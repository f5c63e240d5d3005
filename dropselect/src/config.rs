//! Dropdown configuration.

use crate::types::Theme;

/// Per-dropdown configuration.
///
/// Everything here is presentation or policy. The options and the selection
/// are not configuration: the host passes them in on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownConfig {
    /// Text shown in the trigger when nothing is selected.
    pub placeholder: String,

    /// Close the popup after a row click in multiple mode.
    /// Single mode always closes.
    pub close_on_multi_select: bool,

    /// Maximum popup rows drawn at once (None = as many as fit).
    pub max_visible_rows: Option<u16>,

    /// Colors.
    pub theme: Theme,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select...".into(),
            close_on_multi_select: false,
            max_visible_rows: None,
            theme: Theme::default(),
        }
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Close the popup after each pick in multiple mode.
    pub fn close_on_multi_select(mut self, close: bool) -> Self {
        self.close_on_multi_select = close;
        self
    }

    /// Limit the popup height.
    pub fn max_visible_rows(mut self, rows: u16) -> Self {
        self.max_visible_rows = Some(rows.max(1));
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
