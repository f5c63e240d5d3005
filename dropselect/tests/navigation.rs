use dropselect::{
    Buffer, Dropdown, EventResult, Input, Key, Modifiers, Multiple, Part, Props, Rect,
    SelectOption, Single,
};

fn options() -> Vec<SelectOption> {
    ["First", "Second", "Third", "Fourth", "Fifth", "Sixth"]
        .iter()
        .zip(1..)
        .map(|(label, value)| SelectOption::new(*label, value))
        .collect()
}

/// Feed one input to a single-mode dropdown, returning the emitted change.
fn send(
    dropdown: &mut Dropdown<Single>,
    input: Input,
    options: &[SelectOption],
    value: &Option<SelectOption>,
) -> (EventResult, Option<Option<SelectOption>>) {
    let mut change = None;
    let result = dropdown.handle(&input, Props::new(options, value), |v| change = Some(v));
    (result, change)
}

// ============================================================================
// Opening and closing
// ============================================================================

#[test]
fn test_arrow_down_opens_then_moves() {
    let options = options();
    let value = None;
    let mut dropdown = Dropdown::<Single>::new("single");

    let (result, change) = send(&mut dropdown, Input::key(Key::Down), &options, &value);
    assert_eq!(result, EventResult::Consumed);
    assert!(dropdown.is_open());
    assert_eq!(dropdown.highlighted(), 0, "opening does not move the cursor");
    assert_eq!(change, None);

    send(&mut dropdown, Input::key(Key::Down), &options, &value);
    assert_eq!(dropdown.highlighted(), 1);

    let (_, change) = send(&mut dropdown, Input::key(Key::Enter), &options, &value);
    assert!(!dropdown.is_open());
    assert_eq!(change, Some(Some(options[1].clone())));
}

#[test]
fn test_arrow_up_opens_when_closed() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::key(Key::Up), &options, &None);
    assert!(dropdown.is_open());
    assert_eq!(dropdown.highlighted(), 0);
}

#[test]
fn test_enter_and_space_open_when_closed() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    let (_, change) = send(&mut dropdown, Input::key(Key::Enter), &options, &None);
    assert!(dropdown.is_open());
    assert_eq!(change, None);

    send(&mut dropdown, Input::key(Key::Escape), &options, &None);
    let (_, change) = send(&mut dropdown, Input::key(Key::Char(' ')), &options, &None);
    assert!(dropdown.is_open());
    assert_eq!(change, None);
}

#[test]
fn test_space_commits_when_open() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    let (_, change) = send(&mut dropdown, Input::key(Key::Char(' ')), &options, &None);

    assert!(!dropdown.is_open());
    assert_eq!(change, Some(Some(options[2].clone())));
}

#[test]
fn test_escape_closes_without_change() {
    let options = options();
    let value = Some(options[0].clone());
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::Click(Part::Trigger), &options, &value);
    send(&mut dropdown, Input::key(Key::Down), &options, &value);
    let (result, change) = send(&mut dropdown, Input::key(Key::Escape), &options, &value);

    assert_eq!(result, EventResult::Consumed);
    assert!(!dropdown.is_open());
    assert_eq!(change, None);
}

#[test]
fn test_escape_ignored_when_closed() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    let (result, _) = send(&mut dropdown, Input::key(Key::Escape), &options, &None);
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_blur_closes_without_commit() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    let (_, change) = send(&mut dropdown, Input::Blur, &options, &None);

    assert!(!dropdown.is_open());
    assert_eq!(change, None);
}

#[test]
fn test_trigger_click_toggles() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    assert!(dropdown.is_open());
    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    assert!(!dropdown.is_open());
}

// ============================================================================
// Cursor bounds
// ============================================================================

#[test]
fn test_cursor_never_passes_last_row() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    for _ in 0..20 {
        send(&mut dropdown, Input::key(Key::Down), &options, &None);
        assert!(dropdown.highlighted() < options.len());
    }
    assert_eq!(dropdown.highlighted(), options.len() - 1);
}

#[test]
fn test_cursor_never_below_zero() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    for _ in 0..5 {
        send(&mut dropdown, Input::key(Key::Up), &options, &None);
    }
    assert_eq!(dropdown.highlighted(), 0);
}

#[test]
fn test_reopen_resets_cursor() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    send(&mut dropdown, Input::key(Key::End), &options, &None);
    assert_eq!(dropdown.highlighted(), 5);

    send(&mut dropdown, Input::Blur, &options, &None);
    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    assert_eq!(dropdown.highlighted(), 0);
}

#[test]
fn test_cursor_follows_shrinking_options() {
    let options = options();
    let fewer = &options[..2];
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    send(&mut dropdown, Input::key(Key::End), &options, &None);
    assert_eq!(dropdown.highlighted(), 5);

    // Pulled back to the last remaining row, then moved up from there
    let (result, _) = send(&mut dropdown, Input::key(Key::Up), fewer, &None);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(dropdown.highlighted(), 0);
    assert!(dropdown.state().is_open());
}

#[test]
fn test_commit_after_options_shrink() {
    let options = options();
    let fewer = &options[..2];
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    send(&mut dropdown, Input::key(Key::End), &options, &None);

    let (_, change) = send(&mut dropdown, Input::key(Key::Enter), fewer, &None);
    assert_eq!(change, Some(Some(options[1].clone())));
}

#[test]
fn test_render_clamps_cursor_to_shorter_list() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    send(&mut dropdown, Input::key(Key::End), &options, &None);

    let mut buf = Buffer::new(30, 10);
    dropdown.render(&mut buf, Rect::new(0, 0, 30, 1), Props::new(&options[..3], &None), true);
    assert_eq!(dropdown.state().highlighted(), 2);
}

#[test]
fn test_home_end_only_when_open() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    let (result, _) = send(&mut dropdown, Input::key(Key::End), &options, &None);
    assert_eq!(result, EventResult::Ignored);

    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    send(&mut dropdown, Input::key(Key::End), &options, &None);
    assert_eq!(dropdown.highlighted(), 5);
    send(&mut dropdown, Input::key(Key::Home), &options, &None);
    assert_eq!(dropdown.highlighted(), 0);
}

#[test]
fn test_hover_moves_cursor() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    let (result, _) = send(&mut dropdown, Input::Hover(Part::Row(3)), &options, &None);
    assert_eq!(result, EventResult::Ignored, "hover while closed is ignored");

    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    send(&mut dropdown, Input::Hover(Part::Row(3)), &options, &None);
    assert_eq!(dropdown.highlighted(), 3);

    // Keyboard continues from the hovered row
    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    assert_eq!(dropdown.highlighted(), 4);

    send(&mut dropdown, Input::Hover(Part::Row(42)), &options, &None);
    assert_eq!(dropdown.highlighted(), 4);
}

#[test]
fn test_scroll_moves_cursor_when_open() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    let (result, _) = send(&mut dropdown, Input::Scroll { delta: 1 }, &options, &None);
    assert_eq!(result, EventResult::Ignored);

    send(&mut dropdown, Input::Click(Part::Trigger), &options, &None);
    send(&mut dropdown, Input::Scroll { delta: 3 }, &options, &None);
    assert_eq!(dropdown.highlighted(), 1);
    send(&mut dropdown, Input::Scroll { delta: -1 }, &options, &None);
    assert_eq!(dropdown.highlighted(), 0);
}

#[test]
fn test_modified_keys_are_ignored() {
    let options = options();
    let mut dropdown = Dropdown::<Single>::new("single");

    let input = Input::Key {
        key: Key::Down,
        modifiers: Modifiers::ctrl(),
    };
    let (result, _) = send(&mut dropdown, input, &options, &None);
    assert_eq!(result, EventResult::Ignored);
    assert!(!dropdown.is_open());
}

// ============================================================================
// Empty option list
// ============================================================================

#[test]
fn test_enter_on_empty_list_is_noop() {
    let options: Vec<SelectOption> = Vec::new();
    let mut dropdown = Dropdown::<Single>::new("single");

    send(&mut dropdown, Input::key(Key::Enter), &options, &None);
    assert!(dropdown.is_open());
    send(&mut dropdown, Input::key(Key::Down), &options, &None);
    assert_eq!(dropdown.highlighted(), 0);

    let (result, change) = send(&mut dropdown, Input::key(Key::Enter), &options, &None);
    assert_eq!(result, EventResult::Consumed);
    assert!(!dropdown.is_open());
    assert_eq!(change, None);
}

#[test]
fn test_enter_on_empty_list_multiple_is_noop() {
    let options: Vec<SelectOption> = Vec::new();
    let value: Vec<SelectOption> = Vec::new();
    let mut dropdown = Dropdown::<Multiple>::new("multi");

    let mut changes = 0;
    dropdown.handle(&Input::key(Key::Enter), Props::new(&options, &value), |_| changes += 1);
    dropdown.handle(&Input::key(Key::Enter), Props::new(&options, &value), |_| changes += 1);
    assert_eq!(changes, 0);
}
