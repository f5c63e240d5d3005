use serde::{Deserialize, Serialize};

use super::{Color, Rgb};

/// Colors used to draw a dropdown.
///
/// Every field has a default, so a config file only needs to name the
/// colors it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub foreground: Color,
    pub background: Color,
    /// Trigger and popup fill
    pub surface: Color,
    /// Placeholder, divider and caret
    pub muted: Color,
    /// Fill of selected-option tags
    pub badge: Color,
    /// Row under the cursor
    pub highlight: Color,
    /// Rows that are part of the selection
    pub selected: Color,
    /// Trigger fill while focused
    pub focus: Color,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            foreground: Color::oklch(0.95, 0.0, 0.0),
            background: Color::oklch(0.0, 0.0, 0.0),
            surface: Color::oklch(0.22, 0.01, 250.0),
            muted: Color::oklch(0.6, 0.0, 0.0),
            badge: Color::oklch(0.35, 0.05, 250.0),
            highlight: Color::oklch(0.45, 0.12, 250.0),
            selected: Color::oklch(0.3, 0.08, 250.0),
            focus: Color::oklch(0.28, 0.04, 250.0),
        }
    }

    /// Resolve every color once for a render pass.
    pub fn palette(&self) -> Palette {
        Palette {
            foreground: self.foreground.to_rgb(),
            background: self.background.to_rgb(),
            surface: self.surface.to_rgb(),
            muted: self.muted.to_rgb(),
            badge: self.badge.to_rgb(),
            highlight: self.highlight.to_rgb(),
            selected: self.selected.to_rgb(),
            focus: self.focus.to_rgb(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`Theme`] converted to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
    pub muted: Rgb,
    pub badge: Rgb,
    pub highlight: Rgb,
    pub selected: Rgb,
    pub focus: Rgb,
}
