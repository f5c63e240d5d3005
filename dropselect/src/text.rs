//! Column widths of labels. Everything here counts terminal columns, not
//! bytes or chars.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Columns `ch` occupies. Control characters take none.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Shorten `text` to at most `max` columns, marking the cut with `…`.
///
/// A wide character that would straddle the limit is dropped whole, so a
/// shortened label can end one column short of `max`.
pub fn truncate_to_width(text: &str, max: usize) -> Cow<'_, str> {
    if display_width(text) <= max {
        return Cow::Borrowed(text);
    }
    let Some(budget) = max.checked_sub(1) else {
        return Cow::Borrowed("");
    };

    let mut used = 0;
    let end = text
        .char_indices()
        .find_map(|(index, ch)| {
            used += char_width(ch);
            (used > budget).then_some(index)
        })
        .unwrap_or(text.len());
    Cow::Owned(format!("{}…", &text[..end]))
}
