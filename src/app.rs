//! Todo Widget App
//!
//! Root component: forms, summary and task list.

use leptos::prelude::*;

use crate::components::{NewTaskForm, SearchForm, TaskList, TaskSummary};
use crate::config::WidgetConfig;
use crate::context::WidgetContext;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let ctx = WidgetContext::new(config);
    provide_context(ctx);

    // Pending removals must not fire into a disposed widget
    on_cleanup(move || ctx.cancel_pending_removals());

    view! {
        <section class="todo">
            <h1 class="todo__title">"To Do List"</h1>

            <NewTaskForm />
            <SearchForm />
            <TaskSummary />
            <TaskList />
        </section>
    }
}
