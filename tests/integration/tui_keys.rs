//! Integration tests for the terminal front end.
//!
//! Feeds key events into `App` and checks both the resulting store state
//! and what `ui::draw` puts on a `TestBackend` buffer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use tasklist::app::{App, PanelFocus};
use tasklist::ui;
use tasklist_core::{CommitError, Effect};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Types `text` into the input and presses Enter.
fn add(app: &mut App, text: &str) -> Option<Effect> {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.handle_key_event(key(KeyCode::Enter))
}

/// Creates an app with `texts` committed and the task list focused.
fn app_with(texts: &[&str]) -> App {
    let mut app = App::new();
    for text in texts {
        assert!(add(&mut app, text).is_none());
    }
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, PanelFocus::Tasks);
    app
}

fn texts(app: &App) -> Vec<&str> {
    app.store().tasks().iter().map(|t| t.text.as_str()).collect()
}

/// Renders the app and returns the screen as one string per row.
fn render(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

fn screen_contains(app: &App, needle: &str) -> bool {
    render(app).iter().any(|row| row.contains(needle))
}

// ---------------------------------------------------------------------------
// Input panel
// ---------------------------------------------------------------------------

#[test]
fn typing_and_enter_adds_task() {
    let mut app = App::new();
    assert!(add(&mut app, "buy milk").is_none());
    assert_eq!(texts(&app), ["buy milk"]);
    assert_eq!(app.store().input(), "");
    assert_eq!(app.cursor_position, 0);
}

#[test]
fn cursor_editing_handles_multibyte_text() {
    let mut app = App::new();
    for c in "café".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.handle_key_event(key(KeyCode::Left));
    app.handle_key_event(key(KeyCode::Backspace));
    assert_eq!(app.store().input(), "caé");
    app.handle_key_event(key(KeyCode::Home));
    app.handle_key_event(key(KeyCode::Delete));
    assert_eq!(app.store().input(), "aé");
    app.handle_key_event(key(KeyCode::End));
    app.handle_key_event(key(KeyCode::Char('!')));
    assert_eq!(app.store().input(), "aé!");
}

#[test]
fn empty_enter_requests_error_clear() {
    let mut app = App::new();
    let effect = app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(
        effect,
        Some(Effect::ScheduleErrorClear(app.store().generation()))
    );
    assert_eq!(app.store().error(), Some(CommitError::Empty));
    assert!(screen_contains(&app, "Please enter a task."));
}

#[test]
fn duplicate_is_reported_on_screen() {
    let mut app = App::new();
    add(&mut app, "walk dog");
    assert!(add(&mut app, "walk dog").is_some());
    assert_eq!(texts(&app), ["walk dog"]);
    assert!(screen_contains(&app, "This task already exists."));
}

#[test]
fn control_and_alt_chords_do_not_type() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Char('a')));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
    assert_eq!(app.store().input(), "aB");
    assert_eq!(app.cursor_position, 2);
    assert!(!app.should_quit);
}

#[test]
fn esc_quits_when_not_editing() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_quits_from_tasks_panel() {
    let mut app = app_with(&["a"]);
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

// ---------------------------------------------------------------------------
// Task panel
// ---------------------------------------------------------------------------

#[test]
fn shift_j_and_k_move_selected_task() {
    let mut app = app_with(&["a", "b", "c"]);
    assert_eq!(app.selected, 0);

    app.handle_key_event(key(KeyCode::Char('J')));
    assert_eq!(texts(&app), ["b", "a", "c"]);
    assert_eq!(app.selected, 1);

    app.handle_key_event(key(KeyCode::Char('J')));
    app.handle_key_event(key(KeyCode::Char('J')));
    assert_eq!(texts(&app), ["b", "c", "a"]);
    assert_eq!(app.selected, 2);

    app.handle_key_event(key(KeyCode::Char('K')));
    assert_eq!(texts(&app), ["b", "a", "c"]);
    assert_eq!(app.selected, 1);
}

#[test]
fn toggles_render_as_checkbox_and_state() {
    let mut app = app_with(&["a", "b"]);
    app.handle_key_event(key(KeyCode::Char(' ')));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('x')));

    let tasks = app.store().tasks();
    assert!(tasks[0].is_checked && !tasks[0].is_done);
    assert!(tasks[1].is_done && !tasks[1].is_checked);

    let screen = render(&app);
    assert!(screen.iter().any(|row| row.contains("[x] a")));
    assert!(screen.iter().any(|row| row.contains("[ ] b")));
    assert!(screen.iter().any(|row| row.contains("2 tasks, 1 done, 1 checked")));
}

#[test]
fn edit_flow_replaces_task() {
    let mut app = app_with(&["a", "b"]);
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('e')));
    assert_eq!(app.focus, PanelFocus::Input);
    assert_eq!(app.store().input(), "b");
    assert_eq!(app.cursor_position, 1);
    assert!(screen_contains(&app, "Edit task 2"));
    assert!(screen_contains(&app, "(editing)"));

    add(&mut app, "ee");
    assert_eq!(texts(&app), ["a", "bee"]);
    assert!(!app.store().is_editing());
}

#[test]
fn esc_cancels_edit_without_quitting() {
    let mut app = app_with(&["a"]);
    app.handle_key_event(key(KeyCode::Char('e')));
    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.should_quit);
    assert!(!app.store().is_editing());
    assert_eq!(app.store().input(), "");
}

#[test]
fn delete_keeps_selection_in_bounds() {
    let mut app = app_with(&["a", "b"]);
    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Char('d')));
    assert_eq!(texts(&app), ["a"]);
    assert_eq!(app.selected, 0);

    app.handle_key_event(key(KeyCode::Char('d')));
    assert!(app.store().is_empty());
    app.handle_key_event(key(KeyCode::Char('d')));
    assert_eq!(app.selected, 0);
}

#[test]
fn bulk_clear_keys() {
    let mut app = app_with(&["a", "b", "c", "d"]);
    app.handle_key_event(key(KeyCode::Char('x')));
    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Char(' ')));

    app.handle_key_event(key(KeyCode::Char('D')));
    assert_eq!(texts(&app), ["b", "c", "d"]);
    assert_eq!(app.selected, 1);

    app.handle_key_event(key(KeyCode::Char('C')));
    assert_eq!(texts(&app), ["c", "d"]);

    app.handle_key_event(key(KeyCode::Char(' ')));
    app.handle_key_event(key(KeyCode::Char('C')));
    assert_eq!(texts(&app), ["c"]);
    assert_eq!(app.selected, 0);

    app.handle_key_event(key(KeyCode::Char('X')));
    assert!(app.store().is_empty());
    assert!(screen_contains(&app, "Tasks (0)"));
}
