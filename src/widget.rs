//! Todo Widget
//!
//! Owns the state together with its storage slot and id source. Every
//! mutation goes through here so the slot always mirrors `items`.

use std::collections::BTreeSet;

use crate::config::WidgetConfig;
use crate::models::IdSource;
use crate::storage::{self, StorageSlot};
use crate::store::WidgetState;
use crate::view::{self, WidgetView};

pub struct TodoWidget<S, G> {
    pub(crate) state: WidgetState,
    /// Rows marked as disappearing, waiting for their removal delay
    pub(crate) removing: BTreeSet<String>,
    pub(crate) slot: S,
    pub(crate) ids: G,
    pub(crate) config: WidgetConfig,
}

impl<S: StorageSlot, G: IdSource> TodoWidget<S, G> {
    /// Build the widget from whatever the slot currently holds
    pub fn load(config: WidgetConfig, slot: S, ids: G) -> Self {
        let items = storage::load_tasks(&slot);
        log::info!("Loaded {} todo items from '{}'", items.len(), config.storage_key);
        Self {
            state: WidgetState::new(items),
            removing: BTreeSet::new(),
            slot,
            ids,
            config,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    #[cfg(test)]
    pub fn is_removing(&self, id: &str) -> bool {
        self.removing.contains(id)
    }

    pub fn view(&self) -> WidgetView {
        view::project(&self.state, &self.removing)
    }

    pub fn add_item(&mut self, description: &str) -> bool {
        let added = self.state.add_item(description, &mut self.ids).map(|task| task.id.clone());
        match added {
            Some(id) => {
                log::debug!("Added todo {}", id);
                self.persist();
                true
            }
            None => false,
        }
    }

    pub fn delete_item(&mut self, id: &str) {
        self.removing.remove(id);
        if self.state.delete_item(id) {
            log::debug!("Deleted todo {}", id);
        }
        self.persist();
    }

    pub fn toggle_checked(&mut self, id: &str) {
        if self.state.toggle_checked(id) {
            log::debug!("Toggled todo {}", id);
        }
        self.persist();
    }

    pub fn clear_all(&mut self) {
        log::debug!("Clearing {} todos", self.state.items.len());
        self.state.clear_all();
        self.removing.clear();
        self.persist();
    }

    pub fn filter(&mut self, query: &str) {
        self.state.filter(query);
    }

    pub fn reset_filter(&mut self) {
        self.state.reset_filter();
    }

    // A failed write leaves the in-memory list authoritative
    fn persist(&mut self) {
        if let Err(e) = storage::save_tasks(&mut self.slot, &self.state.items) {
            log::error!("Failed to save todo items: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SequentialIds;
    use crate::storage::MemorySlot;

    fn widget(slot: &MemorySlot) -> TodoWidget<MemorySlot, SequentialIds> {
        TodoWidget::load(WidgetConfig::default(), slot.clone(), SequentialIds(0))
    }

    #[test]
    fn test_every_mutation_persists_items() {
        let slot = MemorySlot::default();
        let mut w = widget(&slot);
        w.add_item("Buy milk");
        w.add_item("Walk dog");
        assert_eq!(storage::load_tasks(&slot), w.state().items);

        w.filter("walk");
        w.toggle_checked("task-2");
        // Storage mirrors items, not the filtered view
        assert_eq!(storage::load_tasks(&slot).len(), 2);

        w.delete_item("task-1");
        assert_eq!(storage::load_tasks(&slot), w.state().items);
    }

    #[test]
    fn test_rejected_add_does_not_write() {
        let slot = MemorySlot::default();
        let mut w = widget(&slot);
        assert!(!w.add_item("  \t "));
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn test_toggle_survives_reload() {
        let slot = MemorySlot::default();
        let mut w = widget(&slot);
        w.add_item("Buy milk");
        w.toggle_checked("task-1");

        let reloaded = widget(&slot);
        assert_eq!(reloaded.state().items.len(), 1);
        assert!(reloaded.state().items[0].is_checked);
    }

    #[test]
    fn test_clear_all_writes_empty_list() {
        let slot = MemorySlot::default();
        let mut w = widget(&slot);
        w.add_item("Buy milk");
        w.clear_all();
        assert!(w.state().items.is_empty());
        assert_eq!(slot.value().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_from_corrupt_slot() {
        let slot = MemorySlot::with_value("not json at all");
        let w = widget(&slot);
        assert!(w.state().items.is_empty());
        assert_eq!(w.view().empty_message, crate::view::EMPTY_LIST_MESSAGE);
    }
}
