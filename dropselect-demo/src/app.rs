//! The demo page: one single-select and one multi-select dropdown sharing an
//! option list. The page owns both selections and applies every change the
//! widgets request.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent, MouseEventKind};
use dropselect::{
    Buffer, Cell, Dropdown, EventResult, FocusChange, FocusRing, Input, Key, MouseButton,
    Multiple, Palette, Part, Props, Rect, SelectOption, Single, TextStyle, Terminal,
};
use log::{debug, info};

use crate::config::DemoConfig;
use crate::error::DemoError;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

const WIDGET_X: u16 = 2;
const MAX_WIDGET_WIDTH: u16 = 40;
const SINGLE_Y: u16 = 4;
const MULTI_Y: u16 = 8;

const HELP: &str = "Tab focus · ↑/↓ move · Enter/Space open/select · Esc close · q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Single,
    Multi,
}

impl Target {
    fn id(self) -> &'static str {
        match self {
            Target::Single => "single",
            Target::Multi => "multi",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        match id {
            "single" => Some(Target::Single),
            "multi" => Some(Target::Multi),
            _ => None,
        }
    }
}

pub struct App {
    options: Vec<SelectOption>,
    single_value: Option<SelectOption>,
    multi_value: Vec<SelectOption>,
    single: Dropdown<Single>,
    multi: Dropdown<Multiple>,
    focus: FocusRing,
    palette: Palette,
    quit: bool,
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        let dropdown_config = config.dropdown_config();
        let first = config.options.first().cloned();
        Self {
            single_value: first.clone(),
            multi_value: first.into_iter().collect(),
            single: Dropdown::with_config(Target::Single.id(), dropdown_config.clone()),
            multi: Dropdown::with_config(Target::Multi.id(), dropdown_config),
            focus: FocusRing::new([Target::Single.id(), Target::Multi.id()]),
            palette: config.theme.palette(),
            options: config.options,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run until the user quits.
    pub fn run(&mut self, terminal: &mut Terminal) -> Result<(), DemoError> {
        info!("Demo started with {} options", self.options.len());
        terminal.draw(|buf| self.render(buf))?;

        while !self.quit {
            let events = terminal.poll(POLL_TIMEOUT)?;
            if events.is_empty() {
                continue;
            }
            for event in &events {
                self.handle_event(event);
            }
            terminal.draw(|buf| self.render(buf))?;
        }

        info!("Demo finished");
        Ok(())
    }

    pub fn handle_event(&mut self, event: &CrosstermEvent) {
        match event {
            CrosstermEvent::Key(key) => self.on_key(key),
            CrosstermEvent::Mouse(mouse) => self.on_mouse(mouse),
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Input routing
    // -------------------------------------------------------------------------

    fn on_key(&mut self, event: &KeyEvent) {
        let Some(input) = Input::from_key_event(event) else {
            return;
        };
        let Input::Key { key, modifiers } = input else {
            return;
        };

        if modifiers.ctrl && key == Key::Char('c') {
            self.quit = true;
            return;
        }

        match key {
            Key::Tab => {
                let change = self.focus.focus_next();
                self.apply_focus(change);
                return;
            }
            Key::BackTab => {
                let change = self.focus.focus_prev();
                self.apply_focus(change);
                return;
            }
            _ => {}
        }

        let result = match self.focus.focused().and_then(Target::from_id) {
            Some(target) => self.dispatch(target, &input),
            None => EventResult::Ignored,
        };
        if result.is_handled() {
            return;
        }

        match key {
            Key::Char('q') if !self.single.is_open() && !self.multi.is_open() => {
                self.quit = true
            }
            Key::Escape => {
                let change = self.focus.blur();
                self.apply_focus(change);
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, event: &MouseEvent) {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(button) if MouseButton::from(button) == MouseButton::Left => {
                match self.hit(x, y) {
                    Some((target, part)) => {
                        let change = self.focus.focus(target.id());
                        self.apply_focus(change);
                        self.dispatch(target, &Input::Click(part));
                    }
                    None => {
                        let change = self.focus.blur();
                        self.apply_focus(change);
                    }
                }
            }
            MouseEventKind::Moved => {
                if let Some((target, part)) = self.hit(x, y) {
                    self.dispatch(target, &Input::Hover(part));
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let delta = if event.kind == MouseEventKind::ScrollDown { 1 } else { -1 };
                if let Some((target, _)) = self.hit(x, y) {
                    self.dispatch(target, &Input::Scroll { delta });
                }
            }
            _ => {}
        }
    }

    /// Topmost widget part under (x, y). Widgets drawn later win.
    fn hit(&self, x: u16, y: u16) -> Option<(Target, Part)> {
        self.layers().into_iter().rev().find_map(|target| {
            let part = match target {
                Target::Single => self.single.hit(x, y),
                Target::Multi => self.multi.hit(x, y),
            };
            part.map(|part| (target, part))
        })
    }

    /// Draw order. An open dropdown goes last so its popup covers the page.
    fn layers(&self) -> [Target; 2] {
        if self.single.is_open() {
            [Target::Multi, Target::Single]
        } else {
            [Target::Single, Target::Multi]
        }
    }

    fn apply_focus(&mut self, change: FocusChange) {
        if change.is_empty() {
            return;
        }
        debug!(
            "Focus change blurred={:?} focused={:?}",
            change.blurred, change.focused
        );
        if let Some(target) = change.blurred.as_deref().and_then(Target::from_id) {
            self.dispatch(target, &Input::Blur);
        }
        if let Some(target) = change.focused.as_deref().and_then(Target::from_id) {
            self.dispatch(target, &Input::Focus);
        }
    }

    /// Deliver `input` to one widget and apply the change it requests.
    fn dispatch(&mut self, target: Target, input: &Input) -> EventResult {
        match target {
            Target::Single => {
                let mut next = None;
                let result = self.single.handle(
                    input,
                    Props::new(&self.options, &self.single_value),
                    |value| next = Some(value),
                );
                if let Some(value) = next {
                    info!(
                        "Single selection: {}",
                        value.as_ref().map_or("(none)", |o| o.label.as_str())
                    );
                    self.single_value = value;
                }
                result
            }
            Target::Multi => {
                let mut next = None;
                let result = self.multi.handle(
                    input,
                    Props::new(&self.options, &self.multi_value),
                    |value| next = Some(value),
                );
                if let Some(value) = next {
                    info!("Multi selection: [{}]", join_labels(&value));
                    self.multi_value = value;
                }
                result
            }
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render(&mut self, buf: &mut Buffer) {
        let palette = self.palette;
        let base = Cell::blank(palette.foreground, palette.background);
        let width = buf.width();
        buf.fill(buf.area(), base);

        let heading = base.with_style(TextStyle::bold());
        let muted = base.with_fg(palette.muted);

        let col = buf.set_string(WIDGET_X, 1, "dropselect", width, heading);
        buf.set_string(col + 1, 1, "keyboard and mouse dropdowns", width, muted);
        buf.set_string(WIDGET_X, SINGLE_Y - 1, "Single", width, heading);
        buf.set_string(WIDGET_X, MULTI_Y - 1, "Multi", width, heading);

        let summary = format!(
            "single = {}   multi = [{}]",
            self.single_value.as_ref().map_or("(none)", |o| o.label.as_str()),
            join_labels(&self.multi_value)
        );
        let bottom = buf.height().saturating_sub(1);
        buf.set_string(WIDGET_X, bottom.saturating_sub(1), &summary, width, muted);
        buf.set_string(WIDGET_X, bottom, HELP, width, muted);

        let widget_width = width.saturating_sub(WIDGET_X * 2).min(MAX_WIDGET_WIDTH);
        for target in self.layers() {
            let focused = self.focus.is_focused(target.id());
            match target {
                Target::Single => self.single.render(
                    buf,
                    Rect::new(WIDGET_X, SINGLE_Y, widget_width, 1),
                    Props::new(&self.options, &self.single_value),
                    focused,
                ),
                Target::Multi => self.multi.render(
                    buf,
                    Rect::new(WIDGET_X, MULTI_Y, widget_width, 1),
                    Props::new(&self.options, &self.multi_value),
                    focused,
                ),
            }
        }
    }
}

fn join_labels(value: &[SelectOption]) -> String {
    value
        .iter()
        .map(|o| o.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
