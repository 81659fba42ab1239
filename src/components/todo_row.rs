//! Todo Row Component
//!
//! One rendered todo: toggle, label (or inline editor), edit and delete.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_controller;
use crate::edit::RowEdit;
use crate::models::TodoItem;

/// A single item row in the list
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctrl = use_controller();

    let completed = item.completed;
    let row_id = item.id.clone();
    let id = StoredValue::new(item.id);
    let label = RwSignal::new(item.text);
    let edit = RwSignal::new(RowEdit::default());
    let edit_ref = NodeRef::<Input>::new();

    // Focus and select the editor once it is mounted
    Effect::new(move |_| {
        if let Some(input) = edit_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let start_edit = move |_| {
        edit.update(|e| {
            e.begin(&label.get_untracked());
        });
    };

    // Blur and Enter both end here
    let commit = move |ev: web_sys::FocusEvent| {
        let raw = event_target_value(&ev);
        let shown = edit
            .try_update(|e| e.commit(|| id.with_value(|id| ctrl.commit_edit(id, &raw))))
            .flatten();
        if let Some(text) = shown {
            label.set(text);
        }
    };

    let on_edit_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            if let Some(input) = edit_ref.get_untracked() {
                let _ = input.blur();
            }
        }
        "Escape" => {
            if let Some(text) = edit.try_update(RowEdit::cancel).flatten() {
                label.set(text);
            }
        }
        _ => {}
    };

    view! {
        <li
            class=if completed { "todo-item completed" } else { "todo-item" }
            data-id=row_id
        >
            <input
                type="checkbox"
                class="toggle"
                checked=completed
                on:change=move |_| id.with_value(|id| ctrl.toggle(id))
            />

            {move || if edit.with(RowEdit::is_editing) {
                let initial = id
                    .with_value(|id| ctrl.text_of(id))
                    .unwrap_or_else(|| label.get_untracked());
                view! {
                    <input
                        type="text"
                        class="edit-input"
                        node_ref=edit_ref
                        prop:value=initial
                        on:blur=commit
                        on:keydown=on_edit_keydown
                    />
                }.into_any()
            } else {
                view! { <span class="text">{move || label.get()}</span> }.into_any()
            }}

            <button class="edit-btn" title="Edit" on:click=start_edit>"✏️"</button>
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |_| id.with_value(|id| ctrl.delete(id))
            >
                "🗑️"
            </button>
        </li>
    }
}
