use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use todolist::logger::Logger;
use todolist::store::{StoreChange, TodoItem};
use todolist::ui::components::{DialogComponent, InputComponent, StatusBar, TodoListComponent};
use todolist::ui::core::{Action, Component, DialogType, Focus};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn items(texts: &[&str]) -> Vec<TodoItem> {
    texts.iter().map(|text| TodoItem::new(*text)).collect()
}

fn render_to_text<C: Component>(component: &mut C, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            component.render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

// ---- input ----

#[test]
fn test_input_typing_reports_each_edit() {
    let mut input = InputComponent::default();

    assert_eq!(input.handle_key_events(key(KeyCode::Char('h'))), Action::InputChanged("h".into()));
    assert_eq!(input.handle_key_events(key(KeyCode::Char('i'))), Action::InputChanged("hi".into()));
    assert_eq!(input.cursor_position, 2);
}

#[test]
fn test_input_editing_respects_cursor_and_multibyte_chars() {
    let mut input = InputComponent::default();
    input.set_value("café");
    input.cursor_position = 4;

    input.handle_key_events(key(KeyCode::Left));
    assert_eq!(input.handle_key_events(key(KeyCode::Backspace)), Action::InputChanged("caé".into()));
    assert_eq!(input.handle_key_events(key(KeyCode::Delete)), Action::InputChanged("ca".into()));

    input.handle_key_events(key(KeyCode::Home));
    assert_eq!(input.handle_key_events(key(KeyCode::Char('X'))), Action::InputChanged("Xca".into()));

    input.handle_key_events(key(KeyCode::End));
    assert_eq!(input.cursor_position, 3);
}

#[test]
fn test_input_backspace_at_start_does_nothing() {
    let mut input = InputComponent::default();
    input.set_value("abc");
    assert_eq!(input.handle_key_events(key(KeyCode::Backspace)), Action::None);
    assert_eq!(input.value, "abc");
}

#[test]
fn test_input_enter_submits_and_tab_leaves() {
    let mut input = InputComponent::default();
    assert_eq!(input.handle_key_events(key(KeyCode::Enter)), Action::SubmitInput);
    assert_eq!(input.handle_key_events(key(KeyCode::Tab)), Action::Focus(Focus::List));
    assert_eq!(input.handle_key_events(key(KeyCode::Esc)), Action::Focus(Focus::List));
}

#[test]
fn test_input_cursor_column_uses_display_width() {
    let mut input = InputComponent::default();
    input.set_value("日本go");
    input.cursor_position = 2;
    assert_eq!(input.cursor_column(), 4);

    input.handle_key_events(key(KeyCode::End));
    assert_eq!(input.cursor_column(), 6);

    input.handle_key_events(key(KeyCode::Home));
    assert_eq!(input.cursor_column(), 0);
}

#[test]
fn test_input_set_value_clamps_cursor() {
    let mut input = InputComponent::default();
    input.set_value("long text");
    input.cursor_position = 9;
    input.set_value("");
    assert_eq!(input.cursor_position, 0);
}

#[test]
fn test_input_renders_placeholder_when_empty() {
    let mut input = InputComponent::new("Add a new todo".to_string());
    let text = render_to_text(&mut input, 40, 3);
    assert!(text.contains("Add a new todo"));

    input.set_value("buy milk");
    let text = render_to_text(&mut input, 40, 3);
    assert!(text.contains("buy milk"));
    assert!(!text.contains("Add a new todo"));
}

// ---- todo list ----

#[test]
fn test_list_navigation_wraps() {
    let mut list = TodoListComponent::new();
    list.update_data(items(&["a", "b", "c"]));

    list.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(list.selected_index, 2);
    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.selected_index, 0);
    list.handle_key_events(key(KeyCode::End));
    assert_eq!(list.selected_index, 2);
    list.handle_key_events(key(KeyCode::Home));
    assert_eq!(list.selected_index, 0);
}

#[test]
fn test_list_toggle_and_remove_address_selected_id() {
    let mut list = TodoListComponent::new();
    let data = items(&["a", "b"]);
    let second = data[1].id;
    list.update_data(data);
    list.handle_key_events(key(KeyCode::Down));

    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleTodo(second));
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::RemoveTodo(second));
}

#[test]
fn test_list_remove_asks_for_confirmation_when_configured() {
    let mut list = TodoListComponent::new();
    list.confirm_remove = true;
    let data = items(&["walk dog"]);
    let id = data[0].id;
    list.update_data(data);

    assert_eq!(
        list.handle_key_events(key(KeyCode::Delete)),
        Action::ShowDialog(DialogType::RemoveConfirmation {
            id,
            text: "walk dog".to_string()
        })
    );
}

#[test]
fn test_list_without_completion_ignores_toggle() {
    let mut list = TodoListComponent::new();
    list.allow_completion = false;
    list.update_data(items(&["a"]));
    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::None);
}

#[test]
fn test_list_on_empty_data_emits_nothing() {
    let mut list = TodoListComponent::new();
    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);
    assert_eq!(list.list_state.selected(), None);
}

#[test]
fn test_list_selection_follows_item_after_removal_above() {
    let mut list = TodoListComponent::new();
    let data = items(&["a", "b", "c"]);
    let removed = data[0].id;
    list.update_data(data.clone());
    list.handle_key_events(key(KeyCode::End));

    list.apply_change(&StoreChange::Removed { id: removed, index: 0 });
    list.update_data(data[1..].to_vec());

    assert_eq!(list.selected_item().unwrap().text, "c");
}

#[test]
fn test_list_selection_clamps_when_last_item_removed() {
    let mut list = TodoListComponent::new();
    let data = items(&["a", "b"]);
    let last = data[1].id;
    list.update_data(data.clone());
    list.handle_key_events(key(KeyCode::End));

    list.apply_change(&StoreChange::Removed { id: last, index: 1 });
    list.update_data(data[..1].to_vec());

    assert_eq!(list.selected_index, 0);
    assert_eq!(list.list_state.selected(), Some(0));
}

#[test]
fn test_list_renders_status_icons() {
    let mut list = TodoListComponent::new();
    let mut data = items(&["buy milk", "walk dog"]);
    data[0].completed = true;
    list.update_data(data);

    let text = render_to_text(&mut list, 40, 6);
    assert!(text.contains("[X] buy milk"));
    assert!(text.contains("[ ] walk dog"));
    assert!(text.contains("Todos (2)"));
}

#[test]
fn test_list_renders_timestamps_when_enabled() {
    let mut list = TodoListComponent::new();
    let mut data = items(&["buy milk"]);
    data[0].created_at = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    list.update_data(data.clone());

    let text = render_to_text(&mut list, 50, 5);
    assert!(!text.contains("(2024)"));

    list.display_config.show_timestamps = true;
    list.display_config.timestamp_format = "(%Y)".to_string();
    let text = render_to_text(&mut list, 50, 5);
    assert!(text.contains("[ ] buy milk  (2024)"));
}

#[test]
fn test_list_esc_returns_focus_to_input() {
    let mut list = TodoListComponent::new();
    list.update_data(items(&["a"]));
    assert_eq!(list.handle_key_events(key(KeyCode::Esc)), Action::Focus(Focus::Input));
}

#[test]
fn test_list_renders_empty_message() {
    let mut list = TodoListComponent::new();
    let text = render_to_text(&mut list, 40, 5);
    assert!(text.contains("Nothing to do yet"));
}

// ---- dialogs ----

#[test]
fn test_dialog_show_and_hide_through_update() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None);
    assert!(dialog.is_visible());

    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
    assert_eq!(dialog.update(Action::HideDialog), Action::None);
    assert!(!dialog.is_visible());

    // Unrelated actions pass through
    assert_eq!(dialog.update(Action::SubmitInput), Action::SubmitInput);
}

#[test]
fn test_remove_confirmation_confirms_with_y() {
    let mut dialog = DialogComponent::new();
    let item = TodoItem::new("walk dog");
    dialog.show(DialogType::RemoveConfirmation {
        id: item.id,
        text: item.text.clone(),
    });

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::RemoveTodo(item.id));
    assert!(!dialog.is_visible());
}

#[test]
fn test_remove_confirmation_cancels_with_n() {
    let mut dialog = DialogComponent::new();
    let item = TodoItem::new("walk dog");
    dialog.show(DialogType::RemoveConfirmation {
        id: item.id,
        text: item.text,
    });
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::HideDialog);
}

#[test]
fn test_logs_dialog_renders_buffer() {
    let logger = Logger::new();
    logger.log("Added todo abc".to_string());
    let mut dialog = DialogComponent::new();
    dialog.set_logger(logger);
    dialog.show(DialogType::Logs);

    let text = render_to_text(&mut dialog, 80, 20);
    assert!(text.contains("Added todo abc"));
}

#[test]
fn test_help_scroll_is_clamped_on_render() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::Help);
    dialog.handle_key_events(key(KeyCode::End));

    render_to_text(&mut dialog, 60, 10);
    assert!(dialog.scroll_offset < usize::MAX);

    dialog.handle_key_events(key(KeyCode::Home));
    assert_eq!(dialog.scroll_offset, 0);
}

// ---- status bar ----

#[test]
fn test_status_text_reflects_counts_and_focus() {
    let text = StatusBar::status_text(3, 1, Focus::List, true);
    assert!(text.starts_with("3 items, 1 done"));
    assert!(text.contains("Space toggle"));

    let text = StatusBar::status_text(2, 0, Focus::Input, true);
    assert!(text.contains("Enter add"));

    let text = StatusBar::status_text(2, 0, Focus::List, false);
    assert!(text.starts_with("2 items |"));
    assert!(!text.contains("toggle"));
}
