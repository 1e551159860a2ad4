//! Render Projection
//!
//! Pure function from widget state to what the UI should display.
//! The Leptos components only apply the resulting `WidgetView`.

use std::collections::BTreeSet;

use crate::store::WidgetState;

pub const EMPTY_FILTERED_MESSAGE: &str = "No tasks found";
pub const EMPTY_LIST_MESSAGE: &str = "There are no tasks yet";

/// State class for the delete-all control
pub const IS_VISIBLE: &str = "is-visible";
/// State class for a row waiting to be removed
pub const IS_DISAPPEARING: &str = "is-disappearing";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    /// Always the unfiltered total
    pub total: usize,
    pub show_delete_all: bool,
    pub rows: Vec<TaskRow>,
    pub empty_message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: String,
    pub description: String,
    pub is_checked: bool,
    pub is_disappearing: bool,
}

impl TaskRow {
    pub fn class(&self) -> String {
        let mut c = String::from("todo__item todo-item");
        if self.is_disappearing {
            c.push(' ');
            c.push_str(IS_DISAPPEARING);
        }
        c
    }
}

impl WidgetView {
    pub fn delete_all_class(&self) -> String {
        let mut c = String::from("todo__delete-all-button");
        if self.show_delete_all {
            c.push(' ');
            c.push_str(IS_VISIBLE);
        }
        c
    }
}

pub fn project(state: &WidgetState, removing: &BTreeSet<String>) -> WidgetView {
    let rows = state
        .visible_items()
        .iter()
        .map(|task| TaskRow {
            id: task.id.clone(),
            description: task.description.clone(),
            is_checked: task.is_checked,
            is_disappearing: removing.contains(&task.id),
        })
        .collect();

    WidgetView {
        total: state.items.len(),
        show_delete_all: !state.items.is_empty() && !state.is_filtering(),
        rows,
        empty_message: empty_message(state),
    }
}

// Filtered-empty wins over unfiltered-empty
fn empty_message(state: &WidgetState) -> &'static str {
    match &state.filtered_items {
        Some(filtered) if filtered.is_empty() => EMPTY_FILTERED_MESSAGE,
        _ if state.items.is_empty() => EMPTY_LIST_MESSAGE,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SequentialIds;

    fn state_with(descriptions: &[&str]) -> WidgetState {
        let mut ids = SequentialIds(0);
        let mut state = WidgetState::default();
        for description in descriptions {
            state.add_item(description, &mut ids);
        }
        state
    }

    #[test]
    fn test_empty_list() {
        let view = project(&WidgetState::default(), &BTreeSet::new());
        assert_eq!(view.total, 0);
        assert!(!view.show_delete_all);
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_message, EMPTY_LIST_MESSAGE);
        assert_eq!(view.delete_all_class(), "todo__delete-all-button");
    }

    #[test]
    fn test_unfiltered_rows() {
        let view = project(&state_with(&["Buy milk", "Walk dog"]), &BTreeSet::new());
        assert_eq!(view.total, 2);
        assert!(view.show_delete_all);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.empty_message, "");
        assert_eq!(view.delete_all_class(), "todo__delete-all-button is-visible");
    }

    #[test]
    fn test_filter_keeps_unfiltered_total() {
        let mut state = state_with(&["Buy milk", "Walk dog"]);
        state.filter("walk");
        let view = project(&state, &BTreeSet::new());
        assert_eq!(view.total, 2);
        assert!(!view.show_delete_all);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].description, "Walk dog");
        assert_eq!(view.empty_message, "");
    }

    #[test]
    fn test_filtered_empty_message_wins() {
        let mut state = WidgetState::default();
        state.filter("anything");
        let view = project(&state, &BTreeSet::new());
        assert_eq!(view.empty_message, EMPTY_FILTERED_MESSAGE);

        let mut state = state_with(&["Buy milk"]);
        state.filter("eggs");
        assert_eq!(project(&state, &BTreeSet::new()).empty_message, EMPTY_FILTERED_MESSAGE);
    }

    #[test]
    fn test_disappearing_row_class() {
        let state = state_with(&["Buy milk", "Walk dog"]);
        let removing: BTreeSet<String> = ["task-2".to_string()].into();
        let view = project(&state, &removing);
        assert_eq!(view.rows[0].class(), "todo__item todo-item");
        assert!(view.rows[1].is_disappearing);
        assert_eq!(view.rows[1].class(), "todo__item todo-item is-disappearing");
    }
}
