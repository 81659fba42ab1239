//! New Todo Form Component
//!
//! Input plus add button. Enter submits; Ctrl+Enter is handled by the
//! global shortcut listener.

use leptos::prelude::*;

use crate::config::NEW_TODO_INPUT_ID;
use crate::context::use_controller;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctrl = use_controller();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctrl.add_from_input();
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                id=NEW_TODO_INPUT_ID
                placeholder="What needs to be done?"
                node_ref=ctrl.input_ref
                prop:value=move || ctrl.draft.get()
                on:input=move |ev| ctrl.draft.set(event_target_value(&ev))
            />
            <button type="submit" id="add-btn">"Add"</button>
        </form>
    }
}
