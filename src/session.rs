//! Todo Session
//!
//! Controller logic behind the UI: the store plus the current filter.
//! Each flow saves only when it changed something and reports whether
//! the list needs a redraw.

use leptos::logging::log;

use crate::models::{Filter, TodoItem};
use crate::store::{StorageSlot, TodoStore};

pub struct TodoSession<S: StorageSlot> {
    store: TodoStore<S>,
    current_filter: Filter,
}

impl<S: StorageSlot> TodoSession<S> {
    /// Load the snapshot and start with the `all` filter
    pub fn start(slot: S) -> Self {
        let mut store = TodoStore::new(slot);
        store.load();
        Self {
            store,
            current_filter: Filter::All,
        }
    }

    pub fn current_filter(&self) -> Filter {
        self.current_filter
    }

    /// Visible rows under the current filter
    pub fn rows(&self) -> Vec<TodoItem> {
        self.current_filter.apply(self.store.items())
    }

    /// Live stored text of an item
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.store.get(id).map(|item| item.text.clone())
    }

    /// View-only: never touches the store
    pub fn set_filter(&mut self, filter: Filter) {
        self.current_filter = filter;
    }

    pub fn add_from_input(&mut self, raw: &str) -> bool {
        let Some(item) = self.store.add(raw) else {
            return false;
        };
        log!("[TODO] Added {}", item.id);
        self.store.save();
        true
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.store.toggle(id) {
            return false;
        }
        self.store.save();
        true
    }

    pub fn delete(&mut self, id: &str) -> bool {
        if !self.store.delete(id) {
            return false;
        }
        log!("[TODO] Deleted {}", id);
        self.store.save();
        true
    }

    /// Apply an inline edit. Returns the item's final text, `None` for
    /// an unknown id. The list itself is not redrawn.
    pub fn commit_edit(&mut self, id: &str, raw: &str) -> Option<String> {
        if self.store.edit_text(id, raw) {
            self.store.save();
        }
        self.text_of(id)
    }

    pub fn clear_completed(&mut self) -> bool {
        if !self.store.clear_completed() {
            return false;
        }
        log!("[TODO] Cleared completed, {} left", self.store.len());
        self.store.save();
        true
    }
}
