mod color;
mod style;
mod theme;

pub use color::*;
pub use style::*;
pub use theme::*;
