use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Interactive region of a rendered dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The always-visible row showing the current selection.
    Trigger,
    /// The clear-all control on the trigger.
    Clear,
    /// Remove control on the selected tag at this index (multiple mode).
    RemoveTag(usize),
    /// Popup row for the option at this index.
    Row(usize),
}

/// Input delivered to a dropdown by its host.
///
/// Mouse input arrives already resolved to a [`Part`] through
/// [`Dropdown::hit`](crate::Dropdown::hit), so the widget never sees raw
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Key press while the dropdown has focus
    Key { key: Key, modifiers: Modifiers },
    /// Primary button click on a part
    Click(Part),
    /// Pointer moved over a part
    Hover(Part),
    /// Wheel scroll over the dropdown, negative is up
    Scroll { delta: i16 },
    /// Dropdown gained focus
    Focus,
    /// Dropdown lost focus
    Blur,
}

impl Input {
    /// Key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Convert a crossterm key event. Releases and repeats are dropped.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        Some(Self::Key {
            key: event.code.into(),
            modifiers: event.modifiers.into(),
        })
    }
}

/// Result of handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Input was ignored, the host may use it.
    Ignored,
    /// Input was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Keys a dropdown or its host reacts to. Everything else maps to
/// [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    /// Shift+Tab
    BackTab,
    Up,
    Down,
    Home,
    End,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Whether a host shortcut modifier (Ctrl or Alt) is held.
    pub fn is_shortcut(&self) -> bool {
        self.ctrl || self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        match button {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Right => MouseButton::Right,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}
