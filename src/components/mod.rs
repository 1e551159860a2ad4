//! UI Components
//!
//! Leptos components of the widget. They only dispatch events and render
//! the projected view.

mod new_task_form;
mod search_form;
mod task_summary;
mod task_list;
mod task_item;

pub use new_task_form::NewTaskForm;
pub use search_form::SearchForm;
pub use task_summary::TaskSummary;
pub use task_list::TaskList;
pub use task_item::TaskItem;
