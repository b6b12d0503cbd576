//! Actions and the reducer that applies them to a [`TaskList`].
//!
//! The view never mutates the store directly; it turns user intents into
//! [`Action`] values and hands them to [`reduce`]. Side effects the store
//! cannot perform itself (scheduling the error auto-clear) come back as an
//! [`Effect`] for the caller to run.

use crate::store::{Generation, TaskList};

/// A user intent or timer event that changes the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the input line.
    SetInput(String),
    /// Commit the input as a new task or as the edited task.
    Commit,
    /// Delete the task at the index.
    Delete(usize),
    /// Move the task at the index one place up.
    MoveUp(usize),
    /// Move the task at the index one place down.
    MoveDown(usize),
    /// Start editing the task at the index.
    BeginEdit(usize),
    /// Abandon the edit in progress.
    CancelEdit,
    /// Flip the done flag of the task at the index.
    ToggleDone(usize),
    /// Flip the checkbox of the task at the index.
    ToggleChecked(usize),
    /// Delete every task.
    ClearAll,
    /// Delete every task marked done.
    ClearAllDone,
    /// Delete every checked task.
    ClearAllChecked,
    /// The auto-clear timer for this generation has fired.
    ErrorExpired(Generation),
}

/// Work the caller must perform after a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start a one-shot timer that dispatches
    /// [`Action::ErrorExpired`] with this generation when it fires.
    ScheduleErrorClear(Generation),
}

/// Result of applying one [`Action`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the state changed.
    pub changed: bool,
    /// Follow-up work, if any.
    pub effect: Option<Effect>,
}

impl Outcome {
    const fn changed(changed: bool) -> Self {
        Self {
            changed,
            effect: None,
        }
    }
}

/// Applies `action` to `state`.
pub fn reduce(state: &mut TaskList, action: Action) -> Outcome {
    match action {
        Action::SetInput(text) => {
            let changed = state.input() != text;
            state.set_input(text);
            Outcome::changed(changed)
        }
        Action::Commit => match state.commit_task() {
            Ok(_) => Outcome::changed(true),
            Err(_) => Outcome {
                changed: true,
                effect: Some(Effect::ScheduleErrorClear(state.generation())),
            },
        },
        Action::Delete(i) => Outcome::changed(state.delete_task(i)),
        Action::MoveUp(i) => Outcome::changed(state.move_up(i)),
        Action::MoveDown(i) => Outcome::changed(state.move_down(i)),
        Action::BeginEdit(i) => Outcome::changed(state.begin_edit(i)),
        Action::CancelEdit => Outcome::changed(state.cancel_edit()),
        Action::ToggleDone(i) => Outcome::changed(state.toggle_done(i)),
        Action::ToggleChecked(i) => Outcome::changed(state.toggle_checked(i)),
        Action::ClearAll => Outcome::changed(state.clear_all()),
        Action::ClearAllDone => Outcome::changed(state.clear_all_done()),
        Action::ClearAllChecked => Outcome::changed(state.clear_all_checked()),
        Action::ErrorExpired(generation) => Outcome::changed(state.clear_error(generation)),
    }
}
