//! The favourites store.
//!
//! A [`Favourites`] value is the single source of truth for the user's
//! selected properties: one instance is constructed at startup and every
//! consumer reads and mutates that instance, so no consumer ever holds a
//! private copy that can drift.
//!
//! Entries are full property snapshots (cloned at favourite time), kept in
//! insertion order and keyed by their unique `id`. Every effective mutation
//! is persisted wholesale to the backend, then republished to subscribers.
//!
//! The public surface never fails: a missing or corrupt slot degrades to an
//! empty set on open, and a failed persistence write is logged and swallowed
//! while the in-memory mutation stands. The internal [`LoadOutcome`] records
//! why an open came up empty so tests can assert on the reason without the
//! contract changing.

use crate::model::Property;
use crate::store::StorageBackend;

/// Why the store holds what it holds after `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Entries were read from the persisted slot.
    Loaded,
    /// The slot has never been written.
    Missing,
    /// The slot existed but could not be read or parsed; started empty.
    Corrupt,
}

/// Handle returned by [`Favourites::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&[Property])>;

pub struct Favourites<B: StorageBackend> {
    backend: B,
    entries: Vec<Property>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
    load_outcome: LoadOutcome,
}

impl<B: StorageBackend> Favourites<B> {
    /// Open the store, reading the persisted slot. Never fails: any problem
    /// with the slot yields an empty set.
    pub fn open(backend: B) -> Self {
        let (entries, load_outcome) = match backend.read_slot() {
            Ok(None) => (Vec::new(), LoadOutcome::Missing),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Property>>(&raw) {
                Ok(entries) => (entries, LoadOutcome::Loaded),
                Err(e) => {
                    log::warn!("discarding unreadable favourites slot: {}", e);
                    (Vec::new(), LoadOutcome::Corrupt)
                }
            },
            Err(e) => {
                log::warn!("failed to read favourites slot: {}", e);
                (Vec::new(), LoadOutcome::Corrupt)
            }
        };

        Self {
            backend,
            entries,
            subscribers: Vec::new(),
            next_subscriber: 0,
            load_outcome,
        }
    }

    /// Insert a snapshot of `property`. Idempotent: a record that is already
    /// present, or has no identifier, leaves the set untouched.
    pub fn add(&mut self, property: &Property) {
        if !property.has_id() || self.contains(&property.id) {
            return;
        }
        self.entries.push(property.clone());
        self.persist();
        self.notify();
    }

    /// Remove the entry with `id`, if any.
    pub fn remove(&mut self, id: &str) {
        if id.is_empty() {
            return;
        }
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        if self.entries.len() != before {
            self.persist();
            self.notify();
        }
    }

    /// Add `property` if absent, remove it if present.
    pub fn toggle(&mut self, property: &Property) {
        if self.contains(&property.id) {
            self.remove(&property.id);
        } else {
            self.add(property);
        }
    }

    /// Empty the set unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
        self.notify();
    }

    /// Membership query. Always false for an empty identifier.
    pub fn contains(&self, id: &str) -> bool {
        !id.is_empty() && self.entries.iter().any(|p| p.id == id)
    }

    /// Current snapshot in insertion order.
    pub fn list(&self) -> &[Property] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// Register an observer invoked with the current snapshot after every
    /// effective mutation.
    pub fn subscribe<F: FnMut(&[Property]) + 'static>(&mut self, subscriber: F) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Drop an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Best-effort write of the full set. Failure leaves the in-memory state
    /// authoritative for the rest of the session.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.entries) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("failed to serialize favourites: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.write_slot(&payload) {
            log::warn!("failed to persist favourites: {}", e);
        }
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn property(id: &str) -> Property {
        serde_json::from_value(json!({
            "id": id,
            "type": "House",
            "price": 500000,
            "bedrooms": 3
        }))
        .unwrap()
    }

    fn open_store() -> Favourites<MemBackend> {
        Favourites::open(MemBackend::new())
    }

    #[test]
    fn opens_empty_on_missing_slot() {
        let store = open_store();
        assert!(store.is_empty());
        assert_eq!(store.load_outcome(), LoadOutcome::Missing);
    }

    #[test]
    fn opens_with_persisted_entries() {
        let backend = MemBackend::new();
        backend.seed(r#"[{"id":"p1"},{"id":"p2"}]"#);

        let store = Favourites::open(backend);
        assert_eq!(store.len(), 2);
        assert_eq!(store.load_outcome(), LoadOutcome::Loaded);
        assert_eq!(store.list()[0].id, "p1");
    }

    #[test]
    fn corrupt_slot_degrades_to_empty() {
        let backend = MemBackend::new();
        backend.seed("{not json");

        let store = Favourites::open(backend);
        assert!(store.is_empty());
        assert_eq!(store.load_outcome(), LoadOutcome::Corrupt);
    }

    #[test]
    fn non_array_slot_degrades_to_empty() {
        let backend = MemBackend::new();
        backend.seed(r#"{"id":"p1"}"#);

        let store = Favourites::open(backend);
        assert!(store.is_empty());
        assert_eq!(store.load_outcome(), LoadOutcome::Corrupt);
    }

    #[test]
    fn add_is_idempotent() {
        let mut store = open_store();
        let p = property("p1");

        store.add(&p);
        store.add(&p);

        assert_eq!(store.len(), 1);
        assert!(store.contains("p1"));
    }

    #[test]
    fn add_without_id_is_a_noop() {
        let mut store = open_store();
        store.add(&Property::default());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_deletes_only_the_named_entry() {
        let mut store = open_store();
        store.add(&property("p1"));
        store.add(&property("p2"));

        store.remove("p1");

        assert!(!store.contains("p1"));
        assert!(store.contains("p2"));
    }

    #[test]
    fn remove_of_absent_or_empty_id_is_a_noop() {
        let mut store = open_store();
        store.add(&property("p1"));

        store.remove("p9");
        store.remove("");

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = open_store();
        let p = property("p1");

        store.toggle(&p);
        assert!(store.contains("p1"));

        store.toggle(&p);
        assert!(!store.contains("p1"));
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut store = open_store();
        store.add(&property("p1"));
        store.add(&property("p2"));

        store.clear();

        assert!(store.is_empty());
    }

    #[test]
    fn contains_is_false_for_empty_id() {
        let store = open_store();
        assert!(!store.contains(""));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = open_store();
        store.add(&property("p2"));
        store.add(&property("p1"));
        store.add(&property("p3"));

        let ids: Vec<&str> = store.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn every_mutation_persists_the_full_set() {
        let mut store = open_store();
        store.add(&property("p1"));

        let slot = store.backend.slot().unwrap();
        let persisted: Vec<Property> = serde_json::from_str(&slot).unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, "p1");

        store.remove("p1");
        assert_eq!(store.backend.slot().unwrap(), "[]");
    }

    #[test]
    fn noop_mutations_do_not_rewrite_the_slot() {
        let mut store = open_store();
        store.add(&property("p1"));
        store.backend.seed("sentinel");

        store.add(&property("p1"));
        store.remove("p9");

        assert_eq!(store.backend.slot().unwrap(), "sentinel");
    }

    #[test]
    fn write_failure_is_swallowed_and_memory_stays_authoritative() {
        let mut store = open_store();
        store.backend.set_simulate_write_error(true);

        store.add(&property("p1"));

        assert!(store.contains("p1"));
        assert_eq!(store.backend.slot(), None);
    }

    #[test]
    fn subscribers_observe_every_effective_mutation() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = open_store();
        store.subscribe(move |entries| sink.borrow_mut().push(entries.len()));

        store.add(&property("p1"));
        store.add(&property("p1")); // no-op, no notification
        store.add(&property("p2"));
        store.remove("p1");
        store.clear();

        assert_eq!(*seen.borrow(), vec![1, 2, 1, 0]);
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = open_store();
        let id = store.subscribe(move |entries| sink.borrow_mut().push(entries.len()));

        store.add(&property("p1"));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add(&property("p2"));

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn snapshot_is_frozen_at_favourite_time() {
        let mut store = open_store();
        let mut p = property("p1");
        store.add(&p);

        // Mutating the caller's record does not touch the stored snapshot.
        p.price = Some(json!(1));
        assert_eq!(store.list()[0].price, Some(json!(500000)));
    }
}
