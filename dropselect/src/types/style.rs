#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold() -> Self {
        Self {
            bold: true,
            ..Self::new()
        }
    }

    pub const fn dim() -> Self {
        Self {
            dim: true,
            ..Self::new()
        }
    }
}
