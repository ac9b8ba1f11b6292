//! # Habit Store
//!
//! [`HabitStore`] owns the ordered habit collection and is the only thing that
//! mutates it. Every change goes through one of three operations:
//!
//! - [`HabitStore::add`]: validates the name and appends a new habit
//! - [`HabitStore::toggle`]: flips completion state of one habit
//! - [`HabitStore::delete`]: removes one habit, no tombstone
//!
//! Unknown ids make `toggle` and `delete` no-ops.
//!
//! ## Ordering
//!
//! Habits stay in insertion order. New habits are appended, nothing is ever
//! reordered.
//!
//! ## Id Allocation
//!
//! Ids come from `next_id`, a counter that only moves forward. It is persisted
//! alongside the habits (see [`codec`]), so an id freed by `delete` is not
//! handed out again.
//!
//! ## Persistence
//!
//! The store itself does no I/O. [`HabitStore::load`] and
//! [`HabitStore::serialize`] convert to and from the string blob that a
//! [`crate::storage::KeyValueStore`] holds.

use crate::error::ValidationError;
use crate::model::{Category, Habit, HabitId};
use crate::validation::validate_name;
use chrono::Utc;

pub mod codec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStore {
    habits: Vec<Habit>,
    next_id: u64,
}

impl Default for HabitStore {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            next_id: 1,
        }
    }
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-decoded parts.
    ///
    /// `next_id` is raised past every existing id if needed.
    pub(crate) fn from_parts(habits: Vec<Habit>, next_id: u64) -> Self {
        let floor = habits
            .iter()
            .map(|h| h.id.0.saturating_add(1))
            .max()
            .unwrap_or(1);
        Self {
            habits,
            next_id: next_id.max(floor),
        }
    }

    /// Decodes a persisted blob.
    ///
    /// Absent input gives an empty store. Malformed input also gives an empty
    /// store: a corrupt blob is dropped rather than surfaced, and the next
    /// write overwrites it. See [`codec::decode`].
    pub fn load(raw: Option<&str>) -> Self {
        match raw {
            None => Self::new(),
            Some(raw) => codec::decode(raw).unwrap_or_else(|err| {
                log::warn!(
                    "event=habits_load module=store status=reset reason=\"{}\"",
                    err
                );
                Self::new()
            }),
        }
    }

    /// Encodes the whole collection for storage.
    pub fn serialize(&self) -> crate::error::Result<String> {
        codec::encode(self)
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Validates `name` and appends a new habit.
    ///
    /// On error nothing changes.
    pub fn add(
        &mut self,
        name: &str,
        category: impl Into<Category>,
    ) -> Result<&Habit, ValidationError> {
        let name = validate_name(name)?;
        let id = self.allocate_id();
        self.habits.push(Habit::new(id, name, category.into()));
        log::debug!("event=habit_add module=store id={}", id);
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Flips the completion state of `id`. Returns the updated habit, or
    /// `None` if there is no such habit.
    pub fn toggle(&mut self, id: HabitId) -> Option<&Habit> {
        let habit = self.habits.iter_mut().find(|h| h.id == id)?;
        habit.toggle(Utc::now());
        log::debug!(
            "event=habit_toggle module=store id={} completed={} streak={}",
            id,
            habit.completed,
            habit.streak
        );
        Some(&*habit)
    }

    /// Removes `id`. Returns the removed habit, or `None` if there was none.
    pub fn delete(&mut self, id: HabitId) -> Option<Habit> {
        let pos = self.habits.iter().position(|h| h.id == id)?;
        let removed = self.habits.remove(pos);
        log::debug!("event=habit_delete module=store id={}", id);
        Some(removed)
    }

    // Loaded counters are capped at `codec::MAX_ID + 1`, so this cannot
    // reach `u64::MAX` within any real number of adds.
    fn allocate_id(&mut self) -> HabitId {
        let id = HabitId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: HabitStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: HabitStore::new(),
            }
        }

        pub fn with_habits(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Test Habit {}", i + 1);
                self.store.add(&name, Category::Health).unwrap();
            }
            self
        }

        pub fn with_active_habit(mut self, name: &str, category: Category) -> Self {
            self.store.add(name, category).unwrap();
            self
        }

        pub fn with_completed_habit(mut self, name: &str, category: Category) -> Self {
            let id = self.store.add(name, category).unwrap().id;
            self.store.toggle(id);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn add_appends_fresh_habit() {
        let mut store = StoreFixture::new().with_habits(2).store;

        let added = store.add("  Drink Water ", "health").unwrap().clone();
        assert_eq!(store.len(), 3);

        let last = store.habits().last().unwrap();
        assert_eq!(last, &added);
        assert_eq!(last.name, "Drink Water");
        assert_eq!(last.category, Category::Health);
        assert!(!last.completed);
        assert_eq!(last.streak, 0);
        assert_eq!(last.completed_at, None);
    }

    #[test]
    fn add_rejects_invalid_names_without_side_effects() {
        let mut store = StoreFixture::new().with_habits(1).store;
        let before = store.clone();

        assert_eq!(store.add("", "health"), Err(ValidationError::EmptyName));
        assert_eq!(store.add("a", "health"), Err(ValidationError::TooShort));
        assert_eq!(store.add("ab", "health"), Err(ValidationError::TooShort));
        assert_eq!(
            store.add(&"z".repeat(51), "health"),
            Err(ValidationError::TooLong)
        );

        assert_eq!(store, before);
    }

    #[test]
    fn add_keeps_unknown_category() {
        let mut store = HabitStore::new();
        let habit = store.add("Juggle", "circus").unwrap();
        assert_eq!(habit.category, Category::Other("circus".into()));
    }

    #[test]
    fn ids_are_unique_and_not_reused() {
        let mut store = HabitStore::new();
        let a = store.add("First", "health").unwrap().id;
        let b = store.add("Second", "health").unwrap().id;
        assert_ne!(a, b);

        store.delete(b);
        let c = store.add("Third", "health").unwrap().id;
        assert_ne!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn toggle_twice_increments_streak_once() {
        let mut store = StoreFixture::new().with_habits(1).store;
        let id = store.habits()[0].id;

        store.toggle(id);
        store.toggle(id);

        let habit = store.get(id).unwrap();
        assert!(!habit.completed);
        assert_eq!(habit.completed_at, None);
        assert_eq!(habit.streak, 1);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = StoreFixture::new().with_habits(2).store;
        let before = store.clone();
        assert!(store.toggle(HabitId(999)).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_in_place_preserving_order() {
        let mut store = StoreFixture::new().with_habits(3).store;
        let middle = store.habits()[1].id;

        let removed = store.delete(middle).unwrap();
        assert_eq!(removed.id, middle);

        let names: Vec<_> = store.habits().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Test Habit 1", "Test Habit 3"]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut store = StoreFixture::new().with_habits(2).store;
        let before = store.clone();
        assert!(store.delete(HabitId(42)).is_none());
        assert_eq!(store.habits(), before.habits());
    }

    #[test]
    fn from_parts_raises_next_id_past_existing() {
        let habit = Habit::new(HabitId(10), "Walk".into(), Category::Health);
        let store = HabitStore::from_parts(vec![habit], 3);
        assert_eq!(store.next_id(), 11);
    }

    #[test]
    fn load_absent_gives_empty() {
        assert!(HabitStore::load(None).is_empty());
    }

    #[test]
    fn load_out_of_range_counter_gives_usable_empty_store() {
        let raw = format!(r#"{{"version":1,"nextId":{},"habits":[]}}"#, u64::MAX);
        let mut store = HabitStore::load(Some(raw.as_str()));
        assert!(store.is_empty());

        let a = store.add("First", "health").unwrap().id;
        let b = store.add("Second", "health").unwrap().id;
        assert_eq!(a, HabitId(1));
        assert_eq!(b, HabitId(2));
    }

    #[test]
    fn load_malformed_gives_empty() {
        assert!(HabitStore::load(Some("{not json")).is_empty());
        assert!(HabitStore::load(Some("")).is_empty());
        assert!(HabitStore::load(Some("42")).is_empty());
    }
}
