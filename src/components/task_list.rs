//! Task List Component

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::use_widget;

/// Visible rows plus the empty-state message
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_widget();
    let snapshot = ctx.snapshot;

    view! {
        <ul class="todo__list" data-js-todo-list="">
            // Keyed by id only so a row keeps its element while it transitions out
            <For
                each=move || snapshot.with(|v| v.rows.clone())
                key=|row| row.id.clone()
                children=move |row| view! { <TaskItem id=row.id description=row.description /> }
            />
        </ul>
        <div class="todo__empty-message" data-js-todo-empty-message="">
            {move || snapshot.with(|v| v.empty_message)}
        </div>
    }
}
