//! Todo List Component
//!
//! Every render replaces all rows with a fresh projection.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::config::TODO_LIST_ID;
use crate::context::use_controller;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctrl = use_controller();

    view! {
        <ul id=TODO_LIST_ID class="todo-list">
            {move || {
                ctrl.rows()
                    .into_iter()
                    .map(|item| view! { <TodoRow item=item /> })
                    .collect_view()
            }}
        </ul>
    }
}
