//! # API Facade
//!
//! [`HabitTracker`] is the single entry point for a UI. It owns the
//! [`HabitStore`], the storage backend and the current [`FilterMode`], and
//! wires every user action through the same pipeline:
//!
//! ```text
//! action → command (store mutation) → persist → filter → stats → CmdResult
//! ```
//!
//! ## Persistence Contract
//!
//! The full collection is written after every mutation, before the call
//! returns. A failed write does not undo the mutation: the returned
//! [`CmdResult`] has `save_failed` set and carries a warning message, and the
//! in-memory state runs ahead of storage until the next successful write.
//!
//! Reads never fail. A missing, unreadable or corrupt blob opens as an empty
//! collection (see [`HabitStore::load`]).
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `HabitTracker<FileStorage>`
//! - Testing: `HabitTracker<MemoryStorage>` (or `&MemoryStorage`, to keep a
//!   handle on the storage)

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FilterMode};
use crate::model::{Category, Habit, HabitId};
use crate::stats::{self, Stats};
use crate::storage::KeyValueStore;
use crate::store::HabitStore;

pub struct HabitTracker<S: KeyValueStore> {
    storage: S,
    key: String,
    store: HabitStore,
    filter: FilterMode,
}

impl<S: KeyValueStore> HabitTracker<S> {
    /// Opens the collection stored under `key`.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let store = read_store(&storage, &key);
        log::info!(
            "event=tracker_open module=api key={} habits={}",
            key,
            store.len()
        );
        Self {
            storage,
            key,
            store,
            filter: FilterMode::default(),
        }
    }

    pub fn with_filter(mut self, mode: FilterMode) -> Self {
        self.filter = mode;
        self
    }

    pub fn add(&mut self, name: &str, category: impl Into<Category>) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, name, category.into())?;
        Ok(self.finish(result))
    }

    pub fn toggle(&mut self, id: HabitId) -> Result<CmdResult> {
        let result = commands::toggle::run(&mut self.store, id)?;
        Ok(self.finish(result))
    }

    pub fn delete(&mut self, id: HabitId) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        Ok(self.finish(result))
    }

    pub fn set_filter(&mut self, mode: FilterMode) -> Result<CmdResult> {
        self.filter = mode;
        self.list()
    }

    /// Current visible habits and stats.
    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, self.filter)
    }

    /// Discards in-memory state and re-reads storage.
    pub fn reload(&mut self) -> Result<CmdResult> {
        self.store = read_store(&self.storage, &self.key);
        self.list()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn habits(&self) -> &[Habit] {
        self.store.habits()
    }

    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.store.get(id)
    }

    pub fn stats(&self) -> Stats {
        stats::compute(self.store.habits())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persists if the command changed anything, then attaches the
    /// recomputed listing and stats.
    fn finish(&mut self, mut result: CmdResult) -> CmdResult {
        if result.is_mutation() {
            if let Err(err) = self.persist() {
                log::warn!(
                    "event=habits_save module=api status=error key={} error=\"{}\"",
                    self.key,
                    err
                );
                result.save_failed = true;
                result.add_message(CmdMessage::warning(format!(
                    "Changes could not be saved: {}",
                    err
                )));
            }
        }

        result.listed_habits = filter::apply(self.store.habits(), self.filter)
            .into_iter()
            .cloned()
            .collect();
        result.stats = stats::compute(self.store.habits());
        result
    }

    fn persist(&self) -> Result<()> {
        let raw = self.store.serialize()?;
        self.storage.set(&self.key, &raw)
    }
}

fn read_store<S: KeyValueStore>(storage: &S, key: &str) -> HabitStore {
    match storage.get(key) {
        Ok(raw) => HabitStore::load(raw.as_deref()),
        Err(err) => {
            log::warn!(
                "event=habits_read module=api status=reset key={} error=\"{}\"",
                key,
                err
            );
            HabitStore::new()
        }
    }
}
