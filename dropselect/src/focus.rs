/// Which widgets lost and gained focus in one transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusChange {
    pub blurred: Option<String>,
    pub focused: Option<String>,
}

impl FocusChange {
    pub fn is_empty(&self) -> bool {
        self.blurred.is_none() && self.focused.is_none()
    }
}

/// Tracks which widget is focused among an ordered set of focusable ids.
///
/// Every method returns the resulting [`FocusChange`] so the host can deliver
/// `Input::Blur` and `Input::Focus` to the widgets involved.
#[derive(Debug, Default)]
pub struct FocusRing {
    order: Vec<String>,
    focused: Option<String>,
}

impl FocusRing {
    pub fn new(order: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            order: order.into_iter().map(Into::into).collect(),
            focused: None,
        }
    }

    /// Get the currently focused id.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Focus `id`. Unknown ids and the already-focused id change nothing.
    pub fn focus(&mut self, id: &str) -> FocusChange {
        if self.is_focused(id) || !self.order.iter().any(|o| o == id) {
            return FocusChange::default();
        }
        FocusChange {
            blurred: self.focused.replace(id.to_string()),
            focused: Some(id.to_string()),
        }
    }

    /// Clear focus.
    pub fn blur(&mut self) -> FocusChange {
        FocusChange {
            blurred: self.focused.take(),
            focused: None,
        }
    }

    /// Focus the next id, wrapping around (Tab navigation).
    pub fn focus_next(&mut self) -> FocusChange {
        let next = match self.position() {
            Some(i) => (i + 1) % self.order.len().max(1),
            None => 0,
        };
        self.focus_index(next)
    }

    /// Focus the previous id, wrapping around (Shift+Tab navigation).
    pub fn focus_prev(&mut self) -> FocusChange {
        let prev = match self.position() {
            Some(0) | None => self.order.len().saturating_sub(1),
            Some(i) => i - 1,
        };
        self.focus_index(prev)
    }

    fn position(&self) -> Option<usize> {
        let current = self.focused.as_deref()?;
        self.order.iter().position(|id| id == current)
    }

    fn focus_index(&mut self, index: usize) -> FocusChange {
        match self.order.get(index).cloned() {
            Some(id) => self.focus(&id),
            None => FocusChange::default(),
        }
    }
}
