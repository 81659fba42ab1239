//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! rendered projection only; the authoritative list lives in the session.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, TodoItem};

/// What is currently on screen
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Rows of the last render, in store order
    pub rows: Vec<TodoItem>,
    /// Filter the rows were rendered with
    pub filter: Filter,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole visible list
pub fn store_set_rows(store: &ViewStore, rows: Vec<TodoItem>) {
    store.rows().set(rows);
}

pub fn store_set_filter(store: &ViewStore, filter: Filter) {
    store.filter().set(filter);
}

/// Tracked read of the visible rows
pub fn store_rows(store: &ViewStore) -> Vec<TodoItem> {
    store.rows().get()
}

/// Tracked read of the active filter
pub fn store_filter(store: &ViewStore) -> Filter {
    store.filter().get()
}
