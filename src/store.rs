//! Widget State Store
//!
//! Task list, optional filtered view and search query, with the pure
//! mutation operations. Persistence and rendering live elsewhere.

use crate::models::{IdSource, Task};

/// In-memory state of the widget
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    /// All tasks in insertion order
    pub items: Vec<Task>,
    /// `None` = no active filter; `Some` (possibly empty) = filtered view to render
    pub filtered_items: Option<Vec<Task>>,
    /// Lower-cased, trimmed query; empty when no filter is active
    pub search_query: String,
}

impl WidgetState {
    pub fn new(items: Vec<Task>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn is_filtering(&self) -> bool {
        self.filtered_items.is_some()
    }

    /// Rows to display: the filtered view when active, otherwise every task
    pub fn visible_items(&self) -> &[Task] {
        self.filtered_items.as_deref().unwrap_or(&self.items)
    }

    /// Append a task. Whitespace-only descriptions are rejected.
    pub fn add_item(&mut self, description: &str, ids: &mut impl IdSource) -> Option<&Task> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }

        let mut id = ids.next_id();
        while self.items.iter().any(|item| item.id == id) {
            id = ids.next_id();
        }

        self.items.push(Task::new(id, description.to_string()));
        self.refresh_filter();
        self.items.last()
    }

    /// Remove the task with `id`. Returns false when nothing matched.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.refresh_filter();
        }
        removed
    }

    /// Flip the checked flag of the task with `id`. Returns false when nothing matched.
    pub fn toggle_checked(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.is_checked = !item.is_checked;
        self.refresh_filter();
        true
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
        self.refresh_filter();
    }

    pub fn filter(&mut self, query: &str) {
        self.search_query = query.trim().to_lowercase();
        self.filtered_items = Some(self.matching_items());
    }

    pub fn reset_filter(&mut self) {
        self.filtered_items = None;
        self.search_query.clear();
    }

    fn matching_items(&self) -> Vec<Task> {
        self.items
            .iter()
            .filter(|item| item.matches(&self.search_query))
            .cloned()
            .collect()
    }

    // Keep the filtered view a subset of `items` after every mutation
    fn refresh_filter(&mut self) {
        if self.filtered_items.is_some() {
            self.filtered_items = Some(self.matching_items());
        }
    }
}
