//! Sled-backed entry store: one named slot holding the JSON-serialized entry
//! list. The in-memory list is the source of truth for the session; sled
//! writes are fire-and-forget.
//!
//! The store exclusively owns the list. Consumers get snapshot clones and go
//! through `add_entry`/`update_entry` for mutation; append order is
//! chronological order and nothing is ever reordered.

use crate::entry::JournalEntry;
use crate::error::StoreError;
use std::path::Path;
use std::sync::RwLock;

/// Slot name doubles as the schema revision marker (v2 == current shape).
const ENTRIES_KEY: &str = "journal_entries_v2";

pub struct EntryStore {
    db: sled::Db,
    entries: RwLock<Vec<JournalEntry>>,
}

impl EntryStore {
    /// Opens or creates the store at the given path and restores the entry
    /// list. A missing or unparseable payload is treated as an empty history,
    /// never surfaced.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let entries = Self::restore(&db);
        Ok(Self {
            db,
            entries: RwLock::new(entries),
        })
    }

    fn restore(db: &sled::Db) -> Vec<JournalEntry> {
        match db.get(ENTRIES_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        target: "kai::store",
                        "stored entry list failed to parse, starting empty: {e}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    target: "kai::store",
                    "could not read stored entry list, starting empty: {e}"
                );
                Vec::new()
            }
        }
    }

    /// Snapshot clone of the full list, in append order.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Appends one entry and persists. No dedup by id; callers own id
    /// uniqueness (constructors assign uuids).
    pub fn add_entry(&self, entry: JournalEntry) {
        self.add_entries(vec![entry]);
    }

    /// Appends entries in the given order, then persists the full list.
    pub fn add_entries(&self, new_entries: Vec<JournalEntry>) {
        let mut entries = self.write();
        entries.extend(new_entries);
        self.persist(&entries);
    }

    /// Replaces the first entry whose id matches. No match leaves the list
    /// unchanged. Persists afterward either way.
    pub fn update_entry(&self, updated: JournalEntry) {
        let mut entries = self.write();
        if let Some(slot) = entries.iter_mut().find(|e| e.id == updated.id) {
            *slot = updated;
        }
        self.persist(&entries);
    }

    /// Best-effort write of the whole list into the slot. A failure is logged
    /// and swallowed; the in-memory list carries the session.
    fn persist(&self, entries: &[JournalEntry]) {
        let bytes = match serde_json::to_vec(entries) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(target: "kai::store", "entry list failed to serialize: {e}");
                return;
            }
        };
        if let Err(e) = self.db.insert(ENTRIES_KEY, bytes) {
            tracing::warn!(target: "kai::store", "entry list write failed: {e}");
            return;
        }
        if let Err(e) = self.db.flush() {
            tracing::warn!(target: "kai::store", "entry list flush failed: {e}");
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<JournalEntry>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<JournalEntry>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
