//! Core state for `tasklist`: the task model, the store and its reducer.
//!
//! Nothing in this crate knows about terminals; the UI crate renders a
//! [`TaskList`] and feeds [`Action`]s back through [`reduce`].

pub mod action;
pub mod error;
pub mod store;
pub mod task;

pub use action::{Action, Effect, Outcome, reduce};
pub use error::{CommitError, ErrorClearPolicy};
pub use store::{Committed, Generation, TaskList};
pub use task::{Task, TaskId};
