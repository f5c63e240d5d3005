//! Crossterm backend: raw mode, alternate screen and diff-based frame output.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::debug;

use crate::buffer::{Buffer, Cell};
use crate::error::Error;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// The screen, owned for the lifetime of the value.
///
/// Frames are painted into a back buffer and only cells that differ from the
/// front buffer (what is on screen) are written. Dropping the terminal leaves
/// the alternate screen and restores cooked mode.
pub struct Terminal {
    out: io::Stdout,
    front: Buffer,
    back: Buffer,
}

impl Terminal {
    pub fn new() -> Result<Self, Error> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        debug!("Terminal opened at {}x{}", width, height);

        Ok(Self {
            out,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.front.width(), self.front.height())
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&self, timeout: Duration) -> Result<Vec<CrosstermEvent>, Error> {
        if !event::poll(timeout)? {
            return Ok(Vec::new());
        }
        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Paint a frame into a cleared buffer and write out what changed.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> Result<(), Error> {
        self.fit_to_screen()?;
        self.back.clear();
        paint(&mut self.back);
        self.flush()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }

    fn fit_to_screen(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) == self.size() {
            return Ok(());
        }
        debug!("Terminal resized to {}x{}", width, height);
        self.front = Buffer::new(width, height);
        self.back = Buffer::new(width, height);
        queue!(self.out, terminal::Clear(ClearType::All))
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut pen = Pen::default();
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        for (x, y, cell) in self.back.diff(&self.front) {
            // Covered by the wide char to its left
            if cell.wide_continuation {
                continue;
            }
            pen.draw(&mut self.out, x, y, cell)?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Cursor position and attributes last sent, so repeats are skipped.
#[derive(Default)]
struct Pen {
    next: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: TextStyle,
}

impl Pen {
    fn draw(&mut self, out: &mut impl Write, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.next != Some((x, y)) {
            queue!(out, cursor::MoveTo(x, y))?;
        }

        if cell.style != self.style {
            // Bold and dim share one intensity reset, so start from scratch.
            queue!(out, SetAttribute(Attribute::Reset))?;
            let attributes = [
                (cell.style.bold, Attribute::Bold),
                (cell.style.dim, Attribute::Dim),
                (cell.style.italic, Attribute::Italic),
                (cell.style.underline, Attribute::Underlined),
            ];
            for (_, attribute) in attributes.into_iter().filter(|(on, _)| *on) {
                queue!(out, SetAttribute(attribute))?;
            }
            self.style = cell.style;
            self.fg = None;
            self.bg = None;
        }

        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(to_crossterm(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(to_crossterm(cell.bg)))?;
            self.bg = Some(cell.bg);
        }

        queue!(out, Print(cell.char))?;
        let width = char_width(cell.char).max(1) as u16;
        self.next = Some((x.saturating_add(width), y));
        Ok(())
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
