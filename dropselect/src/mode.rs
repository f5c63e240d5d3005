//! Selection modes.
//!
//! A dropdown is either [`Single`] or [`Multiple`], chosen by type parameter.
//! Each mode fixes the shape of the host-owned value and how activating an
//! option changes it.

use std::fmt;

use crate::config::DropdownConfig;
use crate::option::SelectOption;

/// Mode-specific selection logic.
///
/// Every method is pure: it reads the current value and returns the value the
/// host should store next, or `None` when nothing changes.
pub trait SelectionMode {
    /// Shape of the host-owned selection.
    type Value: Clone + fmt::Debug;

    /// Whether the trigger shows removable tags instead of a single label.
    const SHOWS_TAGS: bool;

    /// Whether `option` is part of `value`.
    fn is_selected(value: &Self::Value, option: &SelectOption) -> bool;

    /// Selection after the user activates `option`.
    fn activate(value: &Self::Value, option: &SelectOption) -> Option<Self::Value>;

    /// Selection after removing the tag at `index`.
    fn remove(value: &Self::Value, index: usize) -> Option<Self::Value>;

    /// The empty selection.
    fn cleared() -> Self::Value;

    /// Currently selected options, in selection order.
    fn selected(value: &Self::Value) -> &[SelectOption];

    /// Whether clicking a popup row closes the popup.
    fn closes_on_click(config: &DropdownConfig) -> bool;
}

/// At most one option selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Single;

/// Any number of options selected, kept in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiple;

impl SelectionMode for Single {
    type Value = Option<SelectOption>;

    const SHOWS_TAGS: bool = false;

    fn is_selected(value: &Self::Value, option: &SelectOption) -> bool {
        value.as_ref().is_some_and(|v| v.same_value(option))
    }

    fn activate(value: &Self::Value, option: &SelectOption) -> Option<Self::Value> {
        match value {
            Some(current) if current.same_value(option) => None,
            _ => Some(Some(option.clone())),
        }
    }

    fn remove(_value: &Self::Value, _index: usize) -> Option<Self::Value> {
        // Single mode renders no tags.
        None
    }

    fn cleared() -> Self::Value {
        None
    }

    fn selected(value: &Self::Value) -> &[SelectOption] {
        value.as_slice()
    }

    fn closes_on_click(_config: &DropdownConfig) -> bool {
        true
    }
}

impl SelectionMode for Multiple {
    type Value = Vec<SelectOption>;

    const SHOWS_TAGS: bool = true;

    fn is_selected(value: &Self::Value, option: &SelectOption) -> bool {
        value.iter().any(|v| v.same_value(option))
    }

    fn activate(value: &Self::Value, option: &SelectOption) -> Option<Self::Value> {
        let mut next = value.clone();
        match value.iter().position(|v| v.same_value(option)) {
            Some(index) => {
                next.remove(index);
            }
            None => next.push(option.clone()),
        }
        Some(next)
    }

    fn remove(value: &Self::Value, index: usize) -> Option<Self::Value> {
        if index >= value.len() {
            return None;
        }
        let mut next = value.clone();
        next.remove(index);
        Some(next)
    }

    fn cleared() -> Self::Value {
        Vec::new()
    }

    fn selected(value: &Self::Value) -> &[SelectOption] {
        value
    }

    fn closes_on_click(config: &DropdownConfig) -> bool {
        config.close_on_multi_select
    }
}
