//! Drawing the trigger row and the popup list into a [`Buffer`].

use crate::buffer::{Buffer, Cell};
use crate::config::DropdownConfig;
use crate::dropdown::Props;
use crate::event::Part;
use crate::hit::HitMap;
use crate::layout::Rect;
use crate::mode::SelectionMode;
use crate::option::SelectOption;
use crate::state::InteractionState;
use crate::text::{display_width, truncate_to_width};
use crate::types::{Palette, TextStyle};

/// Columns taken by the controls at the right edge: ` × │ ▼`.
const CONTROLS_WIDTH: u16 = 6;

/// Everything a render pass reads.
pub struct RenderContext<'a, M: SelectionMode> {
    pub props: Props<'a, M>,
    pub state: InteractionState,
    pub config: &'a DropdownConfig,
    pub palette: Palette,
    pub focused: bool,
}

/// Render the trigger row: current value (or tags), clear control, divider
/// and caret.
pub fn render_trigger<M: SelectionMode>(
    buf: &mut Buffer,
    area: Rect,
    cx: &RenderContext<'_, M>,
    hits: &mut HitMap,
) {
    let area = area.clamp_to(buf.area());
    if area.is_empty() {
        return;
    }

    let palette = &cx.palette;
    let fill = if cx.focused {
        palette.focus
    } else {
        palette.surface
    };
    let base = Cell::blank(palette.foreground, fill);
    buf.fill(area, base);
    hits.push(area, Part::Trigger);

    let right = area.right();
    let (content_end, clear_x) = if area.width > CONTROLS_WIDTH {
        (right - CONTROLS_WIDTH, Some(right - 5))
    } else {
        (right, None)
    };

    let muted = base.with_fg(palette.muted);
    let content_x = area.x + 1;
    let selected = M::selected(cx.props.value);

    if M::SHOWS_TAGS && !selected.is_empty() {
        render_tags(buf, content_x, area.y, content_end, selected, base, palette, hits);
    } else {
        let (text, cell) = match selected.first() {
            Some(option) => (option.label.as_str(), base),
            None => (cx.config.placeholder.as_str(), muted.with_style(TextStyle::dim())),
        };
        let max = content_end.saturating_sub(content_x) as usize;
        buf.set_string(content_x, area.y, &truncate_to_width(text, max), content_end, cell);
    }

    if let Some(clear_x) = clear_x {
        buf.set(clear_x, area.y, base.with_char('×'));
        buf.set(clear_x + 2, area.y, muted.with_char('│'));
        let caret = if cx.state.is_open() { '▲' } else { '▼' };
        buf.set(clear_x + 4, area.y, muted.with_char(caret));
        // Registered after the trigger so it shadows it.
        hits.push(Rect::new(clear_x, area.y, 1, 1), Part::Clear);
    }
}

/// Draw one `label ×` tag per selected option, stopping with `…` when the
/// row runs out.
#[allow(clippy::too_many_arguments)]
fn render_tags(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    end: u16,
    selected: &[SelectOption],
    base: Cell,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let tag = base.with_bg(palette.badge);
    let mut col = x;

    for (index, option) in selected.iter().enumerate() {
        // Label, space and `×`, measured in usize so huge labels cannot wrap
        let width = display_width(&option.label).saturating_add(2);
        if usize::from(col).saturating_add(width) > usize::from(end) {
            if col < end {
                buf.set(col, y, base.with_char('…'));
            }
            break;
        }
        col = buf.set_string(col, y, &option.label, end, tag);
        buf.set(col, y, tag.with_char(' '));
        buf.set(col + 1, y, tag.with_char('×'));
        hits.push(Rect::new(col + 1, y, 1, 1), Part::RemoveTag(index));
        col = col.saturating_add(3);
    }
}

/// Render the popup rows directly under `trigger`.
///
/// The popup is clipped to the buffer and to `max_visible_rows`; when the
/// highlighted row would fall below the visible window the window scrolls
/// so it stays in view.
pub fn render_popup<M: SelectionMode>(
    buf: &mut Buffer,
    trigger: Rect,
    cx: &RenderContext<'_, M>,
    hits: &mut HitMap,
) {
    let palette = &cx.palette;
    let options = cx.props.options;
    let top = trigger.bottom();
    let available = buf.height().saturating_sub(top);
    let wanted = u16::try_from(options.len().max(1)).unwrap_or(u16::MAX);
    let visible = wanted
        .min(available)
        .min(cx.config.max_visible_rows.unwrap_or(u16::MAX));
    if visible == 0 || trigger.width == 0 {
        return;
    }

    let surface = Cell::blank(palette.foreground, palette.surface);
    let right = trigger.right().min(buf.width());

    if options.is_empty() {
        let row = Rect::new(trigger.x, top, trigger.width, 1);
        buf.fill(row, surface);
        let empty = surface.with_fg(palette.muted).with_style(TextStyle::dim());
        buf.set_string(trigger.x + 1, top, "No options", right, empty);
        return;
    }

    let highlighted = cx.state.highlighted();
    let offset = (highlighted + 1).saturating_sub(visible as usize);

    for (row, (index, option)) in options
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible as usize)
        .enumerate()
    {
        let y = top + row as u16;
        let is_selected = cx.props.is_selected(option);
        let bg = if index == highlighted {
            palette.highlight
        } else if is_selected {
            palette.selected
        } else {
            palette.surface
        };
        let style = if is_selected {
            TextStyle::bold()
        } else {
            TextStyle::new()
        };
        let cell = surface.with_bg(bg).with_style(style);

        let rect = Rect::new(trigger.x, y, trigger.width, 1);
        buf.fill(rect, cell);
        let marker = if is_selected { '✓' } else { ' ' };
        buf.set(trigger.x + 1, y, cell.with_char(marker));
        let max = right.saturating_sub(trigger.x + 3) as usize;
        buf.set_string(trigger.x + 3, y, &truncate_to_width(&option.label, max), right, cell);
        hits.push(rect.clamp_to(buf.area()), Part::Row(index));
    }
}
