//! Task Item Component
//!
//! One row: checkbox, label and delete control.

use leptos::prelude::*;

use crate::context::use_widget;
use crate::events::WidgetEvent;
use crate::view::TaskRow;

#[component]
pub fn TaskItem(id: String, description: String) -> impl IntoView {
    let ctx = use_widget();
    let snapshot = ctx.snapshot;

    let row_id = id.clone();
    let row = Memo::new(move |_| {
        snapshot.with(|v| v.rows.iter().find(|row| row.id == row_id).cloned())
    });

    let toggle_id = id.clone();
    let delete_id = id.clone();

    view! {
        <li
            class=move || row.with(|r| r.as_ref().map(TaskRow::class).unwrap_or_default())
            data-js-todo-item=""
        >
            <input
                class="todo-item__checkbox"
                id=id.clone()
                type="checkbox"
                prop:checked=move || row.with(|r| r.as_ref().is_some_and(|r| r.is_checked))
                on:change=move |_| {
                    ctx.dispatch(WidgetEvent::CheckboxToggled(toggle_id.clone()));
                }
                data-js-todo-item-checkbox=""
            />
            <label class="todo-item__label" for=id data-js-todo-item-label="">
                {description}
            </label>
            <button
                class="todo-item__delete-button"
                type="button"
                title="Delete"
                aria-label="Delete"
                on:click=move |_| {
                    ctx.dispatch(WidgetEvent::DeleteClicked(delete_id.clone()));
                }
                data-js-todo-item-delete-button=""
            >
                <svg
                    width="20"
                    height="20"
                    viewBox="0 0 20 20"
                    fill="none"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        d="M15 5L5 15M5 5L15 15"
                        stroke="#757575"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
            </button>
        </li>
    }
}
