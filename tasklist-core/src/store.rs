//! The task list store.
//!
//! [`TaskList`] holds the ordered tasks together with the input line, the
//! task under edit and the current validation error. Every mutation is a
//! method returning whether anything changed; index-taking methods treat an
//! out-of-range index as a no-op so a stale index from the view can never
//! panic the store.

use crate::error::{CommitError, ErrorClearPolicy};
use crate::task::{Task, TaskId};

/// Identifies which failed commit an error message belongs to.
///
/// Bumped on every failed commit. A deferred clear carries the generation
/// it was scheduled for so the store can tell stale timers apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a successful commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    /// A new task was appended at this index.
    Added(usize),
    /// The task under edit at this index was replaced.
    Replaced(usize),
}

impl Committed {
    /// Index of the task that was added or replaced.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Added(i) | Self::Replaced(i) => i,
        }
    }
}

/// In-memory state of the to-do list.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    input: String,
    tasks: Vec<Task>,
    editing: Option<TaskId>,
    error: Option<CommitError>,
    generation: Generation,
    clear_policy: ErrorClearPolicy,
}

impl TaskList {
    /// Creates an empty list using the default [`ErrorClearPolicy`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy used by [`clear_error`](Self::clear_error).
    #[must_use]
    pub const fn with_clear_policy(mut self, policy: ErrorClearPolicy) -> Self {
        self.clear_policy = policy;
        self
    }

    // --- accessors ---

    /// All tasks, in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Current contents of the input line.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether a task is being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Current position of the task under edit.
    #[must_use]
    pub fn edit_index(&self) -> Option<usize> {
        let id = self.editing?;
        self.position(id)
    }

    /// The validation error currently shown, if any.
    #[must_use]
    pub const fn error(&self) -> Option<CommitError> {
        self.error
    }

    /// The error text to display, or an empty string when there is none.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// Generation of the most recent failed commit.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// The active [`ErrorClearPolicy`].
    #[must_use]
    pub const fn clear_policy(&self) -> ErrorClearPolicy {
        self.clear_policy
    }

    /// Number of tasks marked done.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_done).count()
    }

    /// Number of tasks with a ticked checkbox.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_checked).count()
    }

    // --- input and commit ---

    /// Replaces the input line. No validation happens here.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Turns the input into a new task, or into the replacement for the
    /// task under edit.
    ///
    /// On success the error is cleared and the input emptied. On failure the
    /// tasks, input and edit target are left alone, the error is set and the
    /// generation bumped; the caller is expected to schedule a
    /// [`clear_error`](Self::clear_error) for [`generation`](Self::generation).
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::Empty`] if the input is blank, or
    /// [`CommitError::Duplicate`] if a task other than the one under edit
    /// already has exactly this text.
    pub fn commit_task(&mut self) -> Result<Committed, CommitError> {
        if let Err(e) = self.validate() {
            self.error = Some(e);
            self.generation = self.generation.next();
            tracing::debug!(error = %e, generation = %self.generation, "commit rejected");
            return Err(e);
        }

        self.error = None;
        let text = std::mem::take(&mut self.input);

        let replaced = self.editing.take().and_then(|id| self.position(id));
        let committed = if let Some(index) = replaced {
            self.tasks[index] = self.tasks[index].edited(text);
            Committed::Replaced(index)
        } else {
            self.tasks.push(Task::new(text));
            Committed::Added(self.tasks.len() - 1)
        };

        tracing::debug!(?committed, len = self.tasks.len(), "task committed");
        Ok(committed)
    }

    fn validate(&self) -> Result<(), CommitError> {
        if self.input.trim().is_empty() {
            return Err(CommitError::Empty);
        }
        let duplicate = self
            .tasks
            .iter()
            .any(|t| t.text == self.input && Some(t.id) != self.editing);
        if duplicate {
            return Err(CommitError::Duplicate);
        }
        Ok(())
    }

    /// Clears the error message in response to an expired timer.
    ///
    /// Under [`ErrorClearPolicy::Latest`] only the timer scheduled for the
    /// current generation has an effect. Returns `true` if a message was
    /// cleared.
    pub fn clear_error(&mut self, generation: Generation) -> bool {
        if self.error.is_none() {
            return false;
        }
        if self.clear_policy == ErrorClearPolicy::Latest && generation != self.generation {
            tracing::debug!(
                stale = %generation,
                current = %self.generation,
                "ignoring stale error clear"
            );
            return false;
        }
        self.error = None;
        true
    }

    // --- editing ---

    /// Loads the task at `index` into the input and marks it as under edit.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        let Some(task) = self.tasks.get(index) else {
            return self.out_of_range("begin_edit", index);
        };
        self.input.clone_from(&task.text);
        self.editing = Some(task.id);
        true
    }

    /// Abandons the edit in progress and empties the input.
    pub fn cancel_edit(&mut self) -> bool {
        if self.editing.take().is_none() {
            return false;
        }
        self.input.clear();
        true
    }

    // --- per-task operations ---

    /// Removes the task at `index`.
    pub fn delete_task(&mut self, index: usize) -> bool {
        if index >= self.tasks.len() {
            return self.out_of_range("delete_task", index);
        }
        let removed = self.tasks.remove(index);
        tracing::debug!(index, text = %removed.text, "task deleted");
        self.drop_stale_edit();
        true
    }

    /// Swaps the task at `index` with the one above it.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index >= self.tasks.len() {
            return self.out_of_range("move_up", index);
        }
        if index == 0 {
            return false;
        }
        self.tasks.swap(index - 1, index);
        true
    }

    /// Swaps the task at `index` with the one below it.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index >= self.tasks.len() {
            return self.out_of_range("move_down", index);
        }
        if index == self.tasks.len() - 1 {
            return false;
        }
        self.tasks.swap(index, index + 1);
        true
    }

    /// Flips the done flag of the task at `index`.
    pub fn toggle_done(&mut self, index: usize) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            return self.out_of_range("toggle_done", index);
        };
        task.is_done = !task.is_done;
        true
    }

    /// Flips the checkbox of the task at `index`.
    pub fn toggle_checked(&mut self, index: usize) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            return self.out_of_range("toggle_checked", index);
        };
        task.is_checked = !task.is_checked;
        true
    }

    // --- bulk operations ---

    /// Removes every task.
    pub fn clear_all(&mut self) -> bool {
        if self.tasks.is_empty() {
            return false;
        }
        self.tasks.clear();
        self.drop_stale_edit();
        true
    }

    /// Removes every task marked done, keeping the order of the rest.
    pub fn clear_all_done(&mut self) -> bool {
        self.remove_where(|t| t.is_done)
    }

    /// Removes every task with a ticked checkbox, keeping the order of the rest.
    pub fn clear_all_checked(&mut self) -> bool {
        self.remove_where(|t| t.is_checked)
    }

    // --- helpers ---

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn remove_where(&mut self, pred: impl Fn(&Task) -> bool) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| !pred(t));
        let removed = before - self.tasks.len();
        if removed == 0 {
            return false;
        }
        tracing::debug!(removed, "bulk delete");
        self.drop_stale_edit();
        true
    }

    /// Forgets the edit target once its task has left the list. The input
    /// is kept, so the next commit appends it as a new task.
    fn drop_stale_edit(&mut self) {
        if let Some(id) = self.editing
            && self.position(id).is_none()
        {
            tracing::debug!(%id, "task under edit was removed");
            self.editing = None;
        }
    }

    fn out_of_range(&self, op: &str, index: usize) -> bool {
        tracing::debug!(op, index, len = self.tasks.len(), "index out of range");
        false
    }
}
