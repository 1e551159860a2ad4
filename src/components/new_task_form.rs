//! New Task Form Component

use leptos::html;
use leptos::prelude::*;

use crate::context::use_widget;
use crate::events::{UiAction, WidgetEvent};

/// Form for adding a task to the end of the list
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_widget();
    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let actions = ctx.dispatch(WidgetEvent::NewTaskSubmitted(new_text.get_untracked()));
        if actions.contains(&UiAction::ResetNewTaskInput) {
            set_new_text.set(String::new());
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    };

    view! {
        <form class="todo__form" data-js-todo-new-task-form="" on:submit=add_task>
            <div class="todo__field field">
                <label class="field__label" for="new-task">"New task title"</label>
                <input
                    class="field__input"
                    id="new-task"
                    placeholder=" "
                    autocomplete="off"
                    node_ref=input_ref
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    data-js-todo-new-task-input=""
                />
            </div>
            <button class="button" type="submit">"Add"</button>
        </form>
    }
}
