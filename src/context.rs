//! Widget Context
//!
//! Shared widget handle provided via Leptos Context API. Components send
//! `WidgetEvent`s through `dispatch` and read the projected `WidgetView`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::browser::{self, BrowserIds, LocalStorageSlot, WindowConfirm};
use crate::config::WidgetConfig;
use crate::events::{UiAction, WidgetEvent};
use crate::view::WidgetView;
use crate::widget::TodoWidget;

pub type BrowserWidget = TodoWidget<LocalStorageSlot, BrowserIds>;

#[derive(Clone, Copy)]
pub struct WidgetContext {
    widget: RwSignal<BrowserWidget>,
    /// Projection of the widget, recomputed after every event
    pub snapshot: Memo<WidgetView>,
    /// Raw text of the search box
    pub search_text: RwSignal<String>,
}

impl WidgetContext {
    pub fn new(config: WidgetConfig) -> Self {
        let slot = LocalStorageSlot::new(config.storage_key.clone());
        let widget = RwSignal::new(TodoWidget::load(config, slot, BrowserIds));
        let snapshot = Memo::new(move |_| widget.with(|w| w.view()));
        Self {
            widget,
            snapshot,
            search_text: RwSignal::new(String::new()),
        }
    }

    /// Route an event into the widget. Actions the context cannot apply
    /// itself are returned to the caller.
    pub fn dispatch(&self, event: WidgetEvent) -> Vec<UiAction> {
        let actions = self
            .widget
            .try_update(|w| w.handle(event, &WindowConfirm))
            .unwrap_or_default();

        let mut remaining = Vec::new();
        for action in actions {
            match action {
                UiAction::ScheduleRemoval { id, delay } => self.schedule_removal(id, delay),
                UiAction::ClearSearchInput => self.search_text.set(String::new()),
                other => remaining.push(other),
            }
        }
        remaining
    }

    fn schedule_removal(&self, id: String, delay: Duration) {
        let ctx = *self;
        let task_id = id.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            browser::with_pending_removals(|pending| pending.fired(&task_id));
            ctx.dispatch(WidgetEvent::RemovalElapsed(task_id));
        });
        browser::with_pending_removals(|pending| pending.schedule(id, timeout));
    }

    /// Teardown: stop every pending removal and unmark its row
    pub fn cancel_pending_removals(&self) {
        let cancelled = browser::with_pending_removals(|pending| pending.cancel_all());
        if cancelled.is_empty() {
            return;
        }
        log::debug!("Cancelled {} pending removals", cancelled.len());
        for id in cancelled {
            self.widget
                .try_update(|w| w.handle(WidgetEvent::RemovalCancelled(id), &WindowConfirm));
        }
    }
}

/// Get the widget context
pub fn use_widget() -> WidgetContext {
    expect_context::<WidgetContext>()
}
