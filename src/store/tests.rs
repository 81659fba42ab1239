//! Store Integration Tests
//!
//! Tests for TodoStore against an in-memory slot.

#[cfg(test)]
mod tests {
    use crate::models::TodoItem;
    use crate::store::{MemorySlot, StorageSlot, StoreError, StoreResult, TodoStore};

    fn setup_store() -> (TodoStore<MemorySlot>, MemorySlot) {
        let slot = MemorySlot::default();
        let mut store = TodoStore::new(slot.clone());
        store.load();
        (store, slot)
    }

    fn texts(store: &TodoStore<MemorySlot>) -> Vec<&str> {
        store.items().iter().map(|item| item.text.as_str()).collect()
    }

    /// Slot whose storage is gone
    struct BrokenSlot;

    impl StorageSlot for BrokenSlot {
        fn read(&self) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("test".to_string()))
        }

        fn write(&self, _raw: &str) -> StoreResult<()> {
            Err(StoreError::Write("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let (store, slot) = setup_store();
        assert!(store.is_empty());
        assert_eq!(slot.writes(), 0);
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"id\":\"x\"}", "[{\"text\":\"no id\"}]", "42", ""] {
            let mut store = TodoStore::new(MemorySlot::with_value(raw));
            store.load();
            assert!(store.is_empty(), "snapshot {:?} should load as empty", raw);
        }
    }

    #[test]
    fn test_load_replaces_in_memory_list() {
        let slot = MemorySlot::with_value("not json");
        let mut store = TodoStore::new(slot);
        store.add("Stale");
        store.load();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_unavailable_storage_is_empty() {
        let mut store = TodoStore::new(BrokenSlot);
        store.load();
        assert!(store.is_empty());
        // Failed write is swallowed
        store.add("Still works");
        store.save();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_missing_completed_defaults_false() {
        let mut store = TodoStore::new(MemorySlot::with_value(r#"[{"id":"a","text":"Old"}]"#));
        store.load();
        assert_eq!(store.items(), &[TodoItem::new("a".to_string(), "Old".to_string())]);
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let raw = r#"[
            {"id":"a","text":"First","completed":false},
            {"id":"a","text":"Copy","completed":true},
            {"id":"b","text":"Second","completed":true}
        ]"#;
        let mut store = TodoStore::new(MemorySlot::with_value(raw));
        store.load();
        assert_eq!(texts(&store), vec!["First", "Second"]);
    }

    #[test]
    fn test_save_load_round_trip() {
        let (mut store, slot) = setup_store();
        store.add("One");
        store.add("Two");
        store.add("Three");
        let second = store.items()[1].id.clone();
        store.toggle(&second);
        store.save();

        let mut reloaded = TodoStore::new(slot);
        reloaded.load();
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn test_add_trims_and_appends() {
        let (mut store, _) = setup_store();
        let added = store.add("  Buy milk \n").cloned().expect("add failed");
        assert_eq!(added.text, "Buy milk");
        assert!(!added.completed);
        store.add("Walk dog");
        assert_eq!(texts(&store), vec!["Buy milk", "Walk dog"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let (mut store, _) = setup_store();
        store.add("A");
        assert!(store.add("").is_none());
        assert!(store.add("   \t ").is_none());
        assert_eq!(texts(&store), vec!["A"]);
    }

    #[test]
    fn test_ids_unique() {
        let (mut store, _) = setup_store();
        for i in 0..50 {
            store.add(&format!("Task {}", i));
        }
        let mut ids: Vec<_> = store.items().iter().map(|item| item.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_toggle() {
        let (mut store, _) = setup_store();
        let id = store.add("A").map(|item| item.id.clone()).unwrap();
        assert!(store.toggle(&id));
        assert!(store.get(&id).unwrap().completed);
        assert!(store.toggle(&id));
        assert!(!store.get(&id).unwrap().completed);
        assert!(!store.toggle("missing"));
    }

    #[test]
    fn test_delete_preserves_order() {
        let (mut store, _) = setup_store();
        store.add("A");
        let b = store.add("B").map(|item| item.id.clone()).unwrap();
        store.add("C");
        assert!(store.delete(&b));
        assert_eq!(texts(&store), vec!["A", "C"]);
        assert!(!store.delete(&b));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_edit_text() {
        let (mut store, _) = setup_store();
        let a = store.add("A").map(|item| item.id.clone()).unwrap();
        store.add("B");

        assert!(!store.edit_text(&a, ""));
        assert!(!store.edit_text(&a, "   "));
        assert!(!store.edit_text(&a, " A "));
        assert_eq!(texts(&store), vec!["A", "B"]);

        assert!(store.edit_text(&a, "  Apples "));
        assert_eq!(texts(&store), vec!["Apples", "B"]);
        assert!(!store.edit_text("missing", "Anything"));
    }

    #[test]
    fn test_clear_completed() {
        let (mut store, _) = setup_store();
        for text in ["A", "B", "C", "D"] {
            store.add(text);
        }
        let ids: Vec<_> = store.items().iter().map(|item| item.id.clone()).collect();
        store.toggle(&ids[0]);
        store.toggle(&ids[2]);

        assert!(store.clear_completed());
        assert_eq!(texts(&store), vec!["B", "D"]);
        assert!(store.items().iter().all(|item| !item.completed));

        assert!(!store.clear_completed());
        assert_eq!(texts(&store), vec!["B", "D"]);
    }

    #[test]
    fn test_mutations_do_not_save() {
        let (mut store, slot) = setup_store();
        let id = store.add("A").map(|item| item.id.clone()).unwrap();
        store.toggle(&id);
        store.edit_text(&id, "B");
        store.delete(&id);
        assert_eq!(slot.writes(), 0);

        store.save();
        assert_eq!(slot.writes(), 1);
        assert_eq!(slot.value().as_deref(), Some("[]"));
    }
}
