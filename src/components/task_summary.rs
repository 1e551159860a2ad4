//! Task Summary Component
//!
//! Total count and the delete-all control.

use leptos::prelude::*;

use crate::context::use_widget;
use crate::events::WidgetEvent;

#[component]
pub fn TaskSummary() -> impl IntoView {
    let ctx = use_widget();
    let snapshot = ctx.snapshot;

    view! {
        <div class="todo__info">
            <div class="todo__total-tasks">
                "Total tasks: "
                <span data-js-todo-total-tasks="">{move || snapshot.with(|v| v.total)}</span>
            </div>
            <button
                class=move || snapshot.with(|v| v.delete_all_class())
                type="button"
                data-js-todo-delete-all-button=""
                on:click=move |_| {
                    ctx.dispatch(WidgetEvent::DeleteAllClicked);
                }
            >
                "Delete all"
            </button>
        </div>
    }
}
