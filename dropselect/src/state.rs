//! Open/closed state and the highlighted-row cursor.

/// Interaction state owned by a single dropdown.
///
/// The cursor is only meaningful while the popup is open. Every transition
/// from closed to open resets it to the first row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    open: bool,
    highlighted: usize,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the popup is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the highlighted row.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open the popup. Returns true if it was closed.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.highlighted = 0;
        true
    }

    /// Close the popup. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Flip open/closed. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    /// Move the cursor by `delta` rows.
    ///
    /// A move that would leave `[0, len)` is rejected and the cursor stays
    /// put. Returns true if the cursor moved.
    pub fn move_by(&mut self, delta: isize, len: usize) -> bool {
        let Some(target) = self.highlighted.checked_add_signed(delta) else {
            return false;
        };
        self.set_highlighted(target, len)
    }

    /// Put the cursor on `index` if it is a valid row. Returns true if the
    /// cursor moved.
    pub fn set_highlighted(&mut self, index: usize, len: usize) -> bool {
        if index >= len || index == self.highlighted {
            return false;
        }
        self.highlighted = index;
        true
    }

    /// Pull the cursor back onto the last row when the option list has
    /// shrunk under an open popup. Returns true if the cursor moved.
    pub fn clamp(&mut self, len: usize) -> bool {
        match len.checked_sub(1) {
            Some(last) if self.open && self.highlighted > last => {
                self.highlighted = last;
                true
            }
            _ => false,
        }
    }

    /// Put the cursor on the first row.
    pub fn highlight_first(&mut self, len: usize) -> bool {
        self.set_highlighted(0, len)
    }

    /// Put the cursor on the last row.
    pub fn highlight_last(&mut self, len: usize) -> bool {
        match len.checked_sub(1) {
            Some(last) => self.set_highlighted(last, len),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_resets_cursor() {
        let mut state = InteractionState::new();
        state.open();
        state.move_by(3, 6);
        assert_eq!(state.highlighted(), 3);

        state.close();
        assert_eq!(state.highlighted(), 3);
        assert!(state.open());
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn open_twice_keeps_cursor() {
        let mut state = InteractionState::new();
        state.open();
        state.move_by(2, 6);
        assert!(!state.open());
        assert_eq!(state.highlighted(), 2);
    }

    #[test]
    fn moves_are_rejected_at_bounds() {
        let mut state = InteractionState::new();
        state.open();
        assert!(!state.move_by(-1, 3));
        assert_eq!(state.highlighted(), 0);

        assert!(state.move_by(1, 3));
        assert!(state.move_by(1, 3));
        assert!(!state.move_by(1, 3));
        assert_eq!(state.highlighted(), 2);
    }

    #[test]
    fn empty_list_never_moves() {
        let mut state = InteractionState::new();
        state.open();
        assert!(!state.move_by(1, 0));
        assert!(!state.highlight_last(0));
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn clamp_follows_shrinking_list() {
        let mut state = InteractionState::new();
        state.open();
        state.highlight_last(6);

        assert!(state.clamp(2));
        assert_eq!(state.highlighted(), 1);
        assert!(!state.clamp(2));
        // Empty list leaves the cursor alone
        assert!(!state.clamp(0));
        assert_eq!(state.highlighted(), 1);

        state.close();
        assert!(!state.clamp(1), "closed popup is not clamped");
    }

    #[test]
    fn toggle_flips() {
        let mut state = InteractionState::new();
        assert!(state.toggle());
        assert!(!state.toggle());
        assert!(!state.is_open());
    }
}
