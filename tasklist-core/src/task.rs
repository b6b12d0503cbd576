//! The task model.
//!
//! A [`Task`] is addressed by its position in the list for every user-facing
//! operation. The [`TaskId`] exists so the store can keep track of the task
//! under edit while the list is reordered around it.

use uuid::Uuid;

/// Stable identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier, kept across edits.
    pub id: TaskId,
    /// Display text. Non-empty after trimming, unique within a list.
    pub text: String,
    /// Whether the task has been marked done (rendered crossed out).
    pub is_done: bool,
    /// Whether the task's checkbox is ticked.
    pub is_checked: bool,
}

impl Task {
    /// Creates a fresh task that is neither done nor checked.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            is_done: false,
            is_checked: false,
        }
    }

    /// Builds the replacement for this task after an edit.
    ///
    /// The id and checkbox survive; the done flag is reset.
    #[must_use]
    pub fn edited(&self, text: impl Into<String>) -> Self {
        Self {
            id: self.id,
            text: text.into(),
            is_done: false,
            is_checked: self.is_checked,
        }
    }
}
