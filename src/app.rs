//! Colorful Todo App
//!
//! Root component: add form, filter bar, list, and the document-level
//! keyboard shortcuts.

use leptos::prelude::*;
use leptos_keynav::{active_element_id, bind_global_keydown, RowNav};

use crate::components::{FilterBar, NewTodoForm, TodoList};
use crate::config::{NEW_TODO_INPUT_ID, TODO_LIST_ID, TODO_ROW_FOCUS_SELECTOR, TODO_ROW_SELECTOR};
use crate::context::TodoController;
use crate::shortcuts::{self, Shortcut};

const ROW_NAV: RowNav = RowNav {
    list_id: TODO_LIST_ID,
    row_selector: TODO_ROW_SELECTOR,
    focus_selector: TODO_ROW_FOCUS_SELECTOR,
};

#[component]
pub fn App() -> impl IntoView {
    // Single long-lived controller: loads the snapshot, renders `all`
    let ctrl = TodoController::new();
    provide_context(ctrl);
    bind_shortcuts(ctrl);

    view! {
        <main class="app">
            <h1>"Colorful Todo"</h1>
            <NewTodoForm />
            <FilterBar />
            <TodoList />
            <p class="shortcut-hint">
                "Ctrl+Enter: add · Ctrl+Backspace: clear completed · ↑/↓: move between todos"
            </p>
        </main>
    }
}

fn bind_shortcuts(ctrl: TodoController) {
    bind_global_keydown(move |ev: web_sys::KeyboardEvent| {
        match shortcuts::classify(&ev.key(), ev.ctrl_key()) {
            Some(Shortcut::AddFromInput) => {
                if active_element_id().as_deref() == Some(NEW_TODO_INPUT_ID) {
                    ev.prevent_default();
                    ctrl.add_from_input();
                }
            }
            Some(Shortcut::ClearCompleted) => {
                ev.prevent_default();
                ctrl.clear_completed();
            }
            Some(Shortcut::MoveFocus(direction)) => {
                if ROW_NAV.move_focus(direction) {
                    ev.prevent_default();
                }
            }
            None => {}
        }
    });
}
