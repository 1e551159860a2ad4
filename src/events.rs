//! Event Router
//!
//! Maps user input to widget mutations. Anything that needs the browser
//! (clearing inputs, timers) comes back as a `UiAction` for the UI layer.

use std::time::Duration;

use crate::models::IdSource;
use crate::storage::StorageSlot;
use crate::widget::TodoWidget;

/// User input the widget reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// New-task form submitted with the raw input value
    NewTaskSubmitted(String),
    /// Search form submitted; search is live on input, so nothing happens
    SearchSubmitted,
    /// Search input changed to this raw value
    SearchInput(String),
    DeleteAllClicked,
    /// Delete control clicked on a row
    DeleteClicked(String),
    /// The removal delay for a row has elapsed
    RemovalElapsed(String),
    /// A pending removal was cancelled before it fired
    RemovalCancelled(String),
    CheckboxToggled(String),
}

/// Follow-up work for the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Empty the new-task input and focus it again
    ResetNewTaskInput,
    ClearSearchInput,
    /// Dispatch `RemovalElapsed(id)` after `delay`
    ScheduleRemoval { id: String, delay: Duration },
}

/// Blocking yes/no question to the user
pub trait ConfirmDialog {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmDialog for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

impl<S: StorageSlot, G: IdSource> TodoWidget<S, G> {
    pub fn handle(&mut self, event: WidgetEvent, dialog: &impl ConfirmDialog) -> Vec<UiAction> {
        match event {
            WidgetEvent::NewTaskSubmitted(value) => {
                if !self.add_item(&value) {
                    return Vec::new();
                }
                let had_filter = self.state.is_filtering();
                self.reset_filter();
                let mut actions = vec![UiAction::ResetNewTaskInput];
                if had_filter {
                    actions.push(UiAction::ClearSearchInput);
                }
                actions
            }
            WidgetEvent::SearchSubmitted => Vec::new(),
            WidgetEvent::SearchInput(value) => {
                let value = value.trim();
                if value.is_empty() {
                    self.reset_filter();
                } else {
                    self.filter(value);
                }
                Vec::new()
            }
            WidgetEvent::DeleteAllClicked => {
                if dialog.confirm(&self.config.confirm_message) {
                    self.clear_all();
                } else {
                    log::debug!("Delete all cancelled");
                }
                Vec::new()
            }
            WidgetEvent::DeleteClicked(id) => {
                let known = self.state.items.iter().any(|item| item.id == id);
                if !known || !self.removing.insert(id.clone()) {
                    return Vec::new();
                }
                let delay = Duration::from_millis(u64::from(self.config.removal_delay_ms));
                vec![UiAction::ScheduleRemoval { id, delay }]
            }
            WidgetEvent::RemovalElapsed(id) => {
                self.delete_item(&id);
                Vec::new()
            }
            WidgetEvent::RemovalCancelled(id) => {
                self.removing.remove(&id);
                Vec::new()
            }
            WidgetEvent::CheckboxToggled(id) => {
                self.toggle_checked(&id);
                Vec::new()
            }
        }
    }
}
