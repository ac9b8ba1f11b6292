use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a habit, unique within its collection.
///
/// Ids are handed out by [`crate::store::HabitStore`] from a monotonic counter.
/// The numeric form also reads the timestamp ids of older data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub u64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HabitId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(HabitId)
    }
}

/// Habit category.
///
/// Stored as a lowercase string. Values outside the known set are kept
/// verbatim in [`Category::Other`] and have no label or icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Health,
    Productivity,
    Mindfulness,
    Learning,
    Creative,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 5] = [
        Category::Health,
        Category::Productivity,
        Category::Mindfulness,
        Category::Learning,
        Category::Creative,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Health => "health",
            Category::Productivity => "productivity",
            Category::Mindfulness => "mindfulness",
            Category::Learning => "learning",
            Category::Creative => "creative",
            Category::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Category::Health => Some("Health"),
            Category::Productivity => Some("Productivity"),
            Category::Mindfulness => Some("Mindfulness"),
            Category::Learning => Some("Learning"),
            Category::Creative => Some("Creative"),
            Category::Other(_) => None,
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Category::Health => Some("💪"),
            Category::Productivity => Some("⚡"),
            Category::Mindfulness => Some("🧘"),
            Category::Learning => Some("📚"),
            Category::Creative => Some("🎨"),
            Category::Other(_) => None,
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "health" => Category::Health,
            "productivity" => Category::Productivity,
            "mindfulness" => Category::Mindfulness,
            "learning" => Category::Learning,
            "creative" => Category::Creative,
            _ => Category::Other(raw),
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::from(raw.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub category: Category,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub streak: u32,
}

impl Habit {
    /// A fresh, incomplete habit. `name` must already be validated.
    pub fn new(id: HabitId, name: String, category: Category) -> Self {
        Self {
            id,
            name,
            category,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
            streak: 0,
        }
    }

    /// Flips completion state.
    ///
    /// Completing stamps `completed_at` and bumps the streak. Un-completing
    /// clears the stamp but never lowers the streak.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        if self.completed {
            self.completed = false;
            self.completed_at = None;
        } else {
            self.completed = true;
            self.completed_at = Some(now);
            self.streak = self.streak.saturating_add(1);
        }
    }

    /// `completed` and `completed_at` agree.
    pub fn is_consistent(&self) -> bool {
        self.completed == self.completed_at.is_some()
    }
}
