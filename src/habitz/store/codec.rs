//! Persisted form of a [`HabitStore`].
//!
//! Writers emit a versioned envelope:
//!
//! ```text
//! {"version":1,"nextId":4,"habits":[{"id":1,"name":"Drink Water", ...}, ...]}
//! ```
//!
//! Readers also accept the legacy layout, a bare array of habits with no
//! version and no counter. For those, `nextId` is derived from the largest id.
//!
//! Decoding fails on anything else: bad JSON, an unknown version, or habits
//! that break the collection invariants (duplicate ids, `completed` out of
//! step with `completedAt`, an id or `nextId` above [`MAX_ID`]).

use super::HabitStore;
use crate::error::{HabitzError, Result};
use crate::model::Habit;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const FORMAT_VERSION: u32 = 1;

/// Largest id a stored collection may hold, the largest integer a JSON
/// number keeps exactly. Legacy timestamp ids sit far below it.
pub const MAX_ID: u64 = (1 << 53) - 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    version: u32,
    next_id: u64,
    habits: &'a [Habit],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    version: u32,
    #[serde(default)]
    next_id: u64,
    habits: Vec<Habit>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Persisted {
    Versioned(Envelope),
    Legacy(Vec<Habit>),
}

pub fn encode(store: &HabitStore) -> Result<String> {
    let envelope = EnvelopeRef {
        version: FORMAT_VERSION,
        next_id: store.next_id,
        habits: &store.habits,
    };
    serde_json::to_string(&envelope).map_err(HabitzError::Serialization)
}

pub fn decode(raw: &str) -> Result<HabitStore> {
    let persisted: Persisted = serde_json::from_str(raw).map_err(HabitzError::Serialization)?;

    let (habits, next_id) = match persisted {
        Persisted::Versioned(envelope) => {
            if envelope.version != FORMAT_VERSION {
                return Err(HabitzError::Storage(format!(
                    "Unsupported habits format version {}",
                    envelope.version
                )));
            }
            (envelope.habits, envelope.next_id)
        }
        Persisted::Legacy(habits) => (habits, 0),
    };

    if next_id > MAX_ID + 1 {
        return Err(HabitzError::Storage(format!(
            "Habit id counter {} is out of range",
            next_id
        )));
    }
    check_invariants(&habits)?;
    Ok(HabitStore::from_parts(habits, next_id))
}

fn check_invariants(habits: &[Habit]) -> Result<()> {
    let mut seen = HashSet::with_capacity(habits.len());
    for habit in habits {
        if habit.id.0 > MAX_ID {
            return Err(HabitzError::Storage(format!(
                "Habit id {} is out of range",
                habit.id
            )));
        }
        if !seen.insert(habit.id) {
            return Err(HabitzError::Storage(format!(
                "Duplicate habit id {}",
                habit.id
            )));
        }
        if !habit.is_consistent() {
            return Err(HabitzError::Storage(format!(
                "Habit {} has completed={} but completedAt={:?}",
                habit.id, habit.completed, habit.completed_at
            )));
        }
    }
    Ok(())
}
