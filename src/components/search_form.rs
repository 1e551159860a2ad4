//! Search Form Component

use leptos::prelude::*;

use crate::context::use_widget;
use crate::events::WidgetEvent;

/// Live search over task descriptions
#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_widget();

    view! {
        <form
            class="todo__form"
            data-js-todo-search-task-form=""
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                ctx.dispatch(WidgetEvent::SearchSubmitted);
            }
        >
            <div class="todo__field field">
                <label class="field__label" for="search-task">"Search task"</label>
                <input
                    class="field__input"
                    id="search-task"
                    placeholder=" "
                    autocomplete="off"
                    type="search"
                    prop:value=move || ctx.search_text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.search_text.set(value.clone());
                        ctx.dispatch(WidgetEvent::SearchInput(value));
                    }
                    data-js-todo-search-task-input=""
                />
            </div>
        </form>
    }
}
