//! Todo Store
//!
//! Authoritative ordered list of todo items plus its durable snapshot.
//! Mutations never save on their own; callers save after a change.

mod error;
mod id;
mod slot;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use leptos::logging::{error, log, warn};

use crate::models::TodoItem;

pub use error::{StoreError, StoreResult};
pub use id::generate_id;
pub use slot::{LocalStorageSlot, StorageSlot};
#[cfg(test)]
pub use slot::MemorySlot;

/// Ordered todo list bound to one persistence slot
pub struct TodoStore<S: StorageSlot> {
    slot: S,
    items: Vec<TodoItem>,
}

impl<S: StorageSlot> TodoStore<S> {
    /// Create an empty store; call `load` to read the snapshot
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            items: Vec::new(),
        }
    }

    /// Replace the in-memory list with the persisted snapshot.
    ///
    /// Absent or malformed data leaves the list empty.
    pub fn load(&mut self) {
        self.items = match self.read_snapshot() {
            Ok(items) => items,
            Err(e) => {
                error!("[STORE] Failed to load todos: {}", e);
                Vec::new()
            }
        };
        log!("[STORE] Loaded {} todos", self.items.len());
    }

    fn read_snapshot(&self) -> StoreResult<Vec<TodoItem>> {
        let Some(raw) = self.slot.read()? else {
            return Ok(Vec::new());
        };
        let parsed: Vec<TodoItem> = serde_json::from_str(&raw)?;

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(parsed.len());
        for item in parsed {
            if seen.insert(item.id.clone()) {
                items.push(item);
            } else {
                warn!("[STORE] Dropping todo with duplicate id {}", item.id);
            }
        }
        Ok(items)
    }

    /// Write the current list to the slot, overwriting the prior value.
    ///
    /// Best effort: failures are logged only.
    pub fn save(&self) {
        let result = serde_json::to_string(&self.items)
            .map_err(StoreError::from)
            .and_then(|raw| self.slot.write(&raw));
        if let Err(e) = result {
            error!("[STORE] Failed to save todos: {}", e);
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new active item. Returns `None` for blank text.
    pub fn add(&mut self, text: &str) -> Option<&TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let mut id = generate_id();
        while self.get(&id).is_some() {
            id = generate_id();
        }
        self.items.push(TodoItem::new(id, text.to_string()));
        self.items.last()
    }

    /// Flip completion. Returns `false` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching item. Returns `false` for an unknown id.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Replace the text when the trimmed value is non-empty and differs.
    ///
    /// Returns whether the item changed.
    pub fn edit_text(&mut self, id: &str, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.text != new_text => {
                item.text = new_text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Remove every completed item. Returns whether anything was removed.
    pub fn clear_completed(&mut self) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        self.items.len() != before
    }
}
