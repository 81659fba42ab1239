//! Persistence Slots
//!
//! A slot is one durable string value. The browser implementation uses
//! `window.localStorage` under a fixed key.

use super::error::{StoreError, StoreResult};

/// One durable key-value location holding the serialized list
pub trait StorageSlot {
    /// Raw stored value, `None` when nothing was ever written
    fn read(&self) -> StoreResult<Option<String>>;

    /// Overwrite the stored value
    fn write(&self, raw: &str) -> StoreResult<()>;
}

/// `window.localStorage` entry under a fixed key
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageSlot {
    key: &'static str,
}

impl LocalStorageSlot {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> StoreResult<web_sys::Storage> {
        let win = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        win.local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl StorageSlot for LocalStorageSlot {
    fn read(&self) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(self.key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn write(&self, raw: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(self.key, raw)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// In-memory slot shared between clones, counting writes
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    value: std::rc::Rc<std::cell::RefCell<Option<String>>>,
    writes: std::rc::Rc<std::cell::Cell<usize>>,
}

#[cfg(test)]
impl MemorySlot {
    pub fn with_value(raw: &str) -> Self {
        let slot = Self::default();
        *slot.value.borrow_mut() = Some(raw.to_string());
        slot
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl StorageSlot for MemorySlot {
    fn read(&self) -> StoreResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, raw: &str) -> StoreResult<()> {
        *self.value.borrow_mut() = Some(raw.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
