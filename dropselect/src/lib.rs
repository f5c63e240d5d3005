//! A controlled dropdown select widget for terminal user interfaces.
//!
//! The widget never owns the selection. The host passes the option list and
//! the current value in on every call through [`Props`], and the widget
//! reports changes through a callback. The selection mode is a type
//! parameter, so a single-choice dropdown cannot be handed a list value.
//!
//! ```ignore
//! let options = vec![SelectOption::new("First", 1), SelectOption::new("Second", 2)];
//! let mut value: Option<SelectOption> = None;
//! let mut dropdown = Dropdown::<Single>::new("fruit");
//!
//! let mut next = None;
//! dropdown.handle(&input, Props::new(&options, &value), |v| next = Some(v));
//! if let Some(v) = next {
//!     value = v;
//! }
//! ```

pub mod buffer;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod mode;
pub mod option;
pub mod render;
pub mod state;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use config::DropdownConfig;
pub use dropdown::{Dropdown, Props};
pub use error::Error;
pub use event::{EventResult, Input, Key, Modifiers, MouseButton, Part};
pub use focus::{FocusChange, FocusRing};
pub use hit::HitMap;
pub use layout::Rect;
pub use mode::{Multiple, SelectionMode, Single};
pub use option::{OptionValue, SelectOption};
pub use state::InteractionState;
pub use terminal::Terminal;
pub use types::*;
