//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_core::{Action, Effect, ErrorClearPolicy, Outcome, TaskList, reduce};

use crate::timer::TimerEvent;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Input box is focused (default).
    Input,
    /// Task list is focused.
    Tasks,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    store: TaskList,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected task index in the task list.
    pub selected: usize,
    /// Cursor position in the input (character index).
    pub cursor_position: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an application with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskList::new(),
            focus: PanelFocus::Input,
            selected: 0,
            cursor_position: 0,
            should_quit: false,
        }
    }

    /// Set the policy used when error timers expire.
    #[must_use]
    pub fn with_clear_policy(mut self, policy: ErrorClearPolicy) -> Self {
        self.store = self.store.with_clear_policy(policy);
        self
    }

    /// The task list being displayed.
    #[must_use]
    pub const fn store(&self) -> &TaskList {
        &self.store
    }

    /// Apply an action to the store and keep the view state consistent.
    ///
    /// Returns the effect the caller must run, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        self.apply(action).effect
    }

    fn apply(&mut self, action: Action) -> Outcome {
        tracing::trace!(?action, "dispatch");
        let outcome = reduce(&mut self.store, action);
        self.clamp();
        outcome
    }

    /// Apply an event posted by a timer.
    pub fn handle_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::ErrorExpired(generation) => {
                self.dispatch(Action::ErrorExpired(generation));
            }
        }
    }

    /// Handle a key event.
    ///
    /// Returns `Some(Effect)` when the action needs follow-up work from the
    /// event loop (scheduling an error dismissal).
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Effect> {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return None;
            }
            (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return None;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus_forward();
                return None;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => {
                self.handle_tasks_key(key);
                None
            }
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Enter => return self.dispatch(Action::Commit),
            KeyCode::Esc => {
                if self.store.is_editing() {
                    self.dispatch(Action::CancelEdit);
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.enter_char(c);
            }
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input_len(),
            _ => {}
        }
        None
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        let i = self.selected;
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('K') => {
                if self.apply(Action::MoveUp(i)).changed {
                    self.selected -= 1;
                }
            }
            KeyCode::Char('J') => {
                if self.apply(Action::MoveDown(i)).changed {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('x') => {
                self.dispatch(Action::ToggleDone(i));
            }
            KeyCode::Char(' ') => {
                self.dispatch(Action::ToggleChecked(i));
            }
            KeyCode::Char('e') => {
                if self.apply(Action::BeginEdit(i)).changed {
                    self.cursor_position = self.input_len();
                    self.focus = PanelFocus::Input;
                }
            }
            KeyCode::Char('d') => {
                self.dispatch(Action::Delete(i));
            }
            KeyCode::Char('D') => {
                self.dispatch(Action::ClearAllDone);
            }
            KeyCode::Char('C') => {
                self.dispatch(Action::ClearAllChecked);
            }
            KeyCode::Char('X') => {
                self.dispatch(Action::ClearAll);
            }
            _ => {}
        }
    }

    /// Cycle focus forward: Input -> Tasks -> Input.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Cycle focus backward. With two panels this mirrors forward cycling.
    const fn cycle_focus_backward(&mut self) {
        self.cycle_focus_forward();
    }

    fn input_len(&self) -> usize {
        self.store.input().chars().count()
    }

    /// Byte offset of the given character index in the input.
    fn byte_index(&self, char_index: usize) -> usize {
        self.store
            .input()
            .char_indices()
            .nth(char_index)
            .map_or(self.store.input().len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let mut text = self.store.input().to_string();
        text.insert(self.byte_index(self.cursor_position), c);
        self.dispatch(Action::SetInput(text));
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char_before(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        self.delete_char_at();
    }

    /// Delete the character under the cursor.
    fn delete_char_at(&mut self) {
        if self.cursor_position >= self.input_len() {
            return;
        }
        let mut text = self.store.input().to_string();
        text.remove(self.byte_index(self.cursor_position));
        self.dispatch(Action::SetInput(text));
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input_len() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the next task.
    fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    /// Keep the selection and cursor inside the current list and input.
    fn clamp(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
        self.cursor_position = self.cursor_position.min(self.input_len());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
