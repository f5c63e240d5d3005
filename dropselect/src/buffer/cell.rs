use crate::types::{Rgb, TextStyle};

/// One terminal cell: a character with its colors and attributes.
///
/// Cells are small and `Copy`. Renderers build a template cell per region
/// and stamp characters onto it with [`Cell::with_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a wide character drawn in the cell to its left.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
    }
}

impl Cell {
    /// Space in the given colors.
    pub const fn blank(fg: Rgb, bg: Rgb) -> Self {
        Self {
            char: ' ',
            fg,
            bg,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }

    pub fn with_char(self, char: char) -> Self {
        Self {
            char,
            wide_continuation: false,
            ..self
        }
    }

    pub fn with_fg(self, fg: Rgb) -> Self {
        Self { fg, ..self }
    }

    pub fn with_bg(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub fn with_style(self, style: TextStyle) -> Self {
        Self { style, ..self }
    }

    /// Filler for the columns a wide character spills into.
    pub(crate) fn continuation(self) -> Self {
        Self {
            char: ' ',
            wide_continuation: true,
            ..self
        }
    }
}
