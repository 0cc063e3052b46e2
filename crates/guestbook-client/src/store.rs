//! Entry Store
//!
//! The last list fetched from the server, keyed by id. Replaced wholesale on
//! every successful fetch; never patched locally.

use std::collections::HashMap;

use crate::models::Entry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    /// Entries in server order
    entries: Vec<Entry>,
    /// id -> index into `entries`
    index: HashMap<u32, usize>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store with a freshly fetched list. Later duplicates of an id win.
    pub fn replace(&mut self, entries: Vec<Entry>) {
        self.index = entries.iter().enumerate().map(|(i, e)| (e.id, i)).collect();
        self.entries = entries;
    }

    pub fn get(&self, id: u32) -> Option<&Entry> {
        self.index.get(&id).and_then(|&i| self.entries.get(i))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(id: u32, title: &str) -> Entry {
        Entry {
            id,
            title: title.to_string(),
            author: "Bob".to_string(),
            body: "Hello".to_string(),
            created: String::new(),
        }
    }

    #[test]
    fn test_lookup_by_id_keeps_order() {
        let mut store = EntryStore::new();
        store.replace(vec![make_entry(5, "five"), make_entry(2, "two")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).unwrap().title, "two");
        assert_eq!(store.entries()[0].id, 5);
        assert!(store.get(9).is_none());
    }

    #[test]
    fn test_replace_drops_old_entries() {
        let mut store = EntryStore::new();
        store.replace(vec![make_entry(1, "one")]);
        store.replace(vec![make_entry(3, "three")]);

        assert!(store.get(1).is_none());
        assert_eq!(store.get(3).unwrap().title, "three");
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let mut store = EntryStore::new();
        store.replace(vec![make_entry(1, "first"), make_entry(1, "second")]);
        assert_eq!(store.get(1).unwrap().title, "second");
    }
}
