//! The dropdown widget.

use std::marker::PhantomData;

use log::{debug, trace};

use crate::buffer::Buffer;
use crate::config::DropdownConfig;
use crate::event::{EventResult, Input, Key, Modifiers, Part};
use crate::hit::HitMap;
use crate::layout::Rect;
use crate::mode::SelectionMode;
use crate::option::SelectOption;
use crate::render::{self, RenderContext};
use crate::state::InteractionState;

/// Host-owned data a dropdown reads on every call.
pub struct Props<'a, M: SelectionMode> {
    /// Options in display order.
    pub options: &'a [SelectOption],
    /// Current selection.
    pub value: &'a M::Value,
}

impl<'a, M: SelectionMode> Props<'a, M> {
    pub fn new(options: &'a [SelectOption], value: &'a M::Value) -> Self {
        Self { options, value }
    }

    /// Whether `option` is part of the selection.
    pub fn is_selected(&self, option: &SelectOption) -> bool {
        M::is_selected(self.value, option)
    }
}

impl<M: SelectionMode> Clone for Props<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: SelectionMode> Copy for Props<'_, M> {}

/// A dropdown select widget.
///
/// `Dropdown` owns only its interaction state: whether the popup is open and
/// which row is highlighted. The option list and the selection belong to the
/// host and come in through [`Props`]. Selection changes are reported through
/// the `on_change` callback of [`Dropdown::handle`]; the widget never applies
/// them itself.
///
/// # Example
///
/// ```ignore
/// let mut tags = Dropdown::<Multiple>::new("tags");
/// let mut next = None;
/// let result = tags.handle(
///     &Input::Click(Part::Row(2)),
///     Props::new(&options, &selected),
///     |value| next = Some(value),
/// );
/// if let Some(value) = next {
///     selected = value;
/// }
/// ```
#[derive(Debug)]
pub struct Dropdown<M: SelectionMode> {
    id: String,
    config: DropdownConfig,
    state: InteractionState,
    hits: HitMap,
    _mode: PhantomData<M>,
}

impl<M: SelectionMode> Dropdown<M> {
    /// Create a closed dropdown with the default config.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_config(id, DropdownConfig::default())
    }

    pub fn with_config(id: impl Into<String>, config: DropdownConfig) -> Self {
        Self {
            id: id.into(),
            config,
            state: InteractionState::new(),
            hits: HitMap::new(),
            _mode: PhantomData,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DropdownConfig) {
        self.config = config;
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Check if the popup is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Index of the highlighted row.
    pub fn highlighted(&self) -> usize {
        self.state.highlighted()
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle one input.
    ///
    /// `on_change` is called at most once, synchronously, with the complete
    /// new selection.
    pub fn handle(
        &mut self,
        input: &Input,
        props: Props<'_, M>,
        mut on_change: impl FnMut(M::Value),
    ) -> EventResult {
        self.follow_options(props.options.len());
        match input {
            Input::Key { key, modifiers } => self.on_key(*key, *modifiers, props, &mut on_change),
            Input::Click(part) => self.on_click(*part, props, &mut on_change),
            Input::Hover(Part::Row(index)) => {
                if self.state.is_open() && self.state.set_highlighted(*index, props.options.len()) {
                    trace!("Dropdown id={} hover row={}", self.id, index);
                }
                self.consumed_if_open()
            }
            Input::Hover(_) => EventResult::Ignored,
            Input::Scroll { delta } => {
                if !self.state.is_open() {
                    return EventResult::Ignored;
                }
                self.state
                    .move_by(isize::from(delta.signum()), props.options.len());
                EventResult::Consumed
            }
            Input::Focus => EventResult::Ignored,
            Input::Blur => {
                if self.state.close() {
                    debug!("Dropdown id={} closed on blur", self.id);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
        }
    }

    fn on_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        props: Props<'_, M>,
        on_change: &mut impl FnMut(M::Value),
    ) -> EventResult {
        // Ctrl/Alt combinations belong to the host
        if modifiers.is_shortcut() {
            return EventResult::Ignored;
        }

        let len = props.options.len();
        match key {
            Key::Enter | Key::Char(' ') => {
                if self.state.is_open() {
                    let highlighted = self.state.highlighted();
                    self.state.close();
                    debug!("Dropdown id={} closed, committing row {}", self.id, highlighted);
                    self.commit(highlighted, props, on_change);
                } else {
                    self.open();
                }
                EventResult::Consumed
            }
            Key::Up | Key::Down => {
                if !self.state.is_open() {
                    self.open();
                } else {
                    let delta = if key == Key::Down { 1 } else { -1 };
                    self.state.move_by(delta, len);
                }
                EventResult::Consumed
            }
            Key::Home if self.state.is_open() => {
                self.state.highlight_first(len);
                EventResult::Consumed
            }
            Key::End if self.state.is_open() => {
                self.state.highlight_last(len);
                EventResult::Consumed
            }
            Key::Escape if self.state.is_open() => {
                self.state.close();
                debug!("Dropdown id={} dismissed", self.id);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_click(
        &mut self,
        part: Part,
        props: Props<'_, M>,
        on_change: &mut impl FnMut(M::Value),
    ) -> EventResult {
        match part {
            Part::Trigger => {
                if self.state.toggle() {
                    debug!("Dropdown id={} opened by click", self.id);
                } else {
                    debug!("Dropdown id={} closed by click", self.id);
                }
            }
            Part::Clear => {
                debug!("Dropdown id={} cleared", self.id);
                on_change(M::cleared());
            }
            Part::RemoveTag(index) => {
                if let Some(next) = M::remove(props.value, index) {
                    debug!("Dropdown id={} removed tag {}", self.id, index);
                    on_change(next);
                }
            }
            Part::Row(index) => {
                if !self.state.is_open() {
                    return EventResult::Ignored;
                }
                self.commit(index, props, on_change);
                if M::closes_on_click(&self.config) {
                    self.state.close();
                }
            }
        }
        EventResult::Consumed
    }

    fn open(&mut self) {
        if self.state.open() {
            debug!("Dropdown id={} opened", self.id);
        }
    }

    /// Keep the cursor on a real row when the host shrinks the list.
    fn follow_options(&mut self, len: usize) {
        if self.state.clamp(len) {
            debug!(
                "Dropdown id={} options shrank to {}, cursor clamped",
                self.id, len
            );
        }
    }

    fn consumed_if_open(&self) -> EventResult {
        if self.state.is_open() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Activate the option at `index`. Out-of-range indices (including any
    /// index into an empty list) do nothing.
    fn commit(&self, index: usize, props: Props<'_, M>, on_change: &mut impl FnMut(M::Value)) {
        let Some(option) = props.options.get(index) else {
            trace!("Dropdown id={} commit of missing row {}", self.id, index);
            return;
        };
        if let Some(next) = M::activate(props.value, option) {
            debug!("Dropdown id={} change via '{}'", self.id, option.label);
            on_change(next);
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Draw the trigger on the first row of `area` and, when open, the popup
    /// below it. Records the hit regions used by [`Dropdown::hit`].
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, props: Props<'_, M>, focused: bool) {
        self.hits.clear();
        self.follow_options(props.options.len());
        let cx = RenderContext {
            props,
            state: self.state,
            config: &self.config,
            palette: self.config.theme.palette(),
            focused,
        };
        let trigger = Rect::new(area.x, area.y, area.width, 1);
        render::render_trigger(buf, trigger, &cx, &mut self.hits);
        if self.state.is_open() {
            render::render_popup(buf, trigger, &cx, &mut self.hits);
        }
    }

    /// Part of the widget under (x, y), as of the last render.
    pub fn hit(&self, x: u16, y: u16) -> Option<Part> {
        self.hits.hit(x, y)
    }

    /// Area covered by the widget in the last render.
    pub fn bounds(&self) -> Option<Rect> {
        self.hits.bounds()
    }

    /// Hit regions from the last render.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }
}
