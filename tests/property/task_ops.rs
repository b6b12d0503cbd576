//! Property-based tests for the task list store.
//!
//! Uses proptest to verify, for arbitrary sequences of actions:
//! 1. Task texts stay unique and non-blank.
//! 2. Bulk deletions remove exactly the flagged tasks and keep order.
//! 3. `move_up(i)` followed by `move_down(i - 1)` restores the order.
//! 4. Moves past either end never change the list.

use proptest::prelude::*;
use tasklist_core::{Action, Generation, TaskList, reduce};

/// Strategy for task text: a small alphabet so duplicates and blanks occur.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[a-d]{1,2}",
        " ?[a-d] ?",
    ]
}

/// Strategy for indices: mostly small, sometimes far past any list.
fn arb_index() -> impl Strategy<Value = usize> {
    prop_oneof![8 => 0usize..8, 1 => Just(usize::MAX)]
}

/// Strategy for a single action. Indices deliberately run past the end.
fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => arb_text().prop_map(Action::SetInput),
        3 => Just(Action::Commit),
        1 => arb_index().prop_map(Action::Delete),
        1 => arb_index().prop_map(Action::MoveUp),
        1 => arb_index().prop_map(Action::MoveDown),
        1 => arb_index().prop_map(Action::BeginEdit),
        1 => Just(Action::CancelEdit),
        2 => arb_index().prop_map(Action::ToggleDone),
        2 => arb_index().prop_map(Action::ToggleChecked),
        1 => Just(Action::ClearAllDone),
        1 => Just(Action::ClearAllChecked),
        1 => Just(Action::ClearAll),
        1 => (0u64..6).prop_map(|g| Action::ErrorExpired(Generation::new(g))),
    ]
}

/// Builds a store by replaying `actions`.
fn build(actions: Vec<Action>) -> TaskList {
    let mut state = TaskList::new();
    for action in actions {
        reduce(&mut state, action);
    }
    state
}

fn texts(state: &TaskList) -> Vec<String> {
    state.tasks().iter().map(|t| t.text.clone()).collect()
}

proptest! {
    #[test]
    fn texts_stay_unique_and_non_blank(actions in prop::collection::vec(arb_action(), 0..64)) {
        let state = build(actions);
        let mut seen = std::collections::HashSet::new();
        for task in state.tasks() {
            prop_assert!(!task.text.trim().is_empty());
            prop_assert!(seen.insert(task.text.clone()), "duplicate {:?}", task.text);
        }
    }

    #[test]
    fn edit_index_is_always_valid(actions in prop::collection::vec(arb_action(), 0..64)) {
        let state = build(actions);
        if let Some(i) = state.edit_index() {
            prop_assert!(i < state.len());
        }
        prop_assert_eq!(state.is_editing(), state.edit_index().is_some());
    }

    #[test]
    fn clear_all_done_removes_exactly_done(actions in prop::collection::vec(arb_action(), 0..64)) {
        let mut state = build(actions);
        let expected: Vec<String> = state
            .tasks()
            .iter()
            .filter(|t| !t.is_done)
            .map(|t| t.text.clone())
            .collect();
        reduce(&mut state, Action::ClearAllDone);
        prop_assert!(state.tasks().iter().all(|t| !t.is_done));
        prop_assert_eq!(texts(&state), expected);
    }

    #[test]
    fn clear_all_checked_preserves_order(actions in prop::collection::vec(arb_action(), 0..64)) {
        let mut state = build(actions);
        let expected: Vec<String> = state
            .tasks()
            .iter()
            .filter(|t| !t.is_checked)
            .map(|t| t.text.clone())
            .collect();
        reduce(&mut state, Action::ClearAllChecked);
        prop_assert_eq!(texts(&state), expected);
    }

    #[test]
    fn move_up_then_down_is_identity(
        actions in prop::collection::vec(arb_action(), 0..64),
        seed in any::<usize>(),
    ) {
        let mut state = build(actions);
        if state.len() < 2 {
            return Ok(());
        }
        let index = 1 + seed % (state.len() - 1);
        let before = texts(&state);
        prop_assert!(state.move_up(index));
        prop_assert!(state.move_down(index - 1));
        prop_assert_eq!(texts(&state), before);
    }

    #[test]
    fn moves_past_the_ends_are_noops(actions in prop::collection::vec(arb_action(), 0..64)) {
        let mut state = build(actions);
        let before = texts(&state);
        prop_assert!(!state.move_up(0));
        prop_assert!(!state.move_down(state.len().saturating_sub(1)));
        prop_assert!(!state.move_down(usize::MAX));
        prop_assert!(!state.move_up(usize::MAX));
        prop_assert_eq!(texts(&state), before);
    }

    #[test]
    fn error_is_only_set_after_a_failed_commit(actions in prop::collection::vec(arb_action(), 0..64)) {
        let state = build(actions);
        if state.error().is_some() {
            prop_assert!(state.generation().get() > 0);
        }
    }

    #[test]
    fn expiring_current_generation_clears_error(actions in prop::collection::vec(arb_action(), 0..64)) {
        let mut state = build(actions);
        let generation = state.generation();
        reduce(&mut state, Action::ErrorExpired(generation));
        prop_assert_eq!(state.error(), None);
        prop_assert_eq!(state.error_message(), "");
    }
}
