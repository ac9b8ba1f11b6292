use crate::model::Habit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which habits a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub fn matches(self, habit: &Habit) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !habit.completed,
            FilterMode::Completed => habit.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            other => Err(format!("Unknown filter mode: {}", other)),
        }
    }
}

/// The habits visible under `mode`, in collection order.
pub fn apply(habits: &[Habit], mode: FilterMode) -> Vec<&Habit> {
    habits.iter().filter(|h| mode.matches(h)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, HabitId};
    use crate::store::fixtures::StoreFixture;
    use std::collections::HashSet;

    fn mixed() -> Vec<Habit> {
        StoreFixture::new()
            .with_active_habit("Drink Water", Category::Health)
            .with_completed_habit("Deep Work", Category::Productivity)
            .with_active_habit("Meditate", Category::Mindfulness)
            .with_completed_habit("Read", Category::Learning)
            .store
            .habits()
            .to_vec()
    }

    fn names(habits: &[&Habit]) -> Vec<String> {
        habits.iter().map(|h| h.name.clone()).collect()
    }

    #[test]
    fn all_is_identity() {
        let habits = mixed();
        let visible = apply(&habits, FilterMode::All);
        assert_eq!(visible.len(), habits.len());
        assert!(visible.iter().zip(&habits).all(|(a, b)| *a == b));
    }

    #[test]
    fn active_and_completed_keep_order() {
        let habits = mixed();
        assert_eq!(
            names(&apply(&habits, FilterMode::Active)),
            vec!["Drink Water", "Meditate"]
        );
        assert_eq!(
            names(&apply(&habits, FilterMode::Completed)),
            vec!["Deep Work", "Read"]
        );
    }

    #[test]
    fn active_and_completed_partition_the_collection() {
        let habits = mixed();
        let active: HashSet<HabitId> = apply(&habits, FilterMode::Active)
            .iter()
            .map(|h| h.id)
            .collect();
        let completed: HashSet<HabitId> = apply(&habits, FilterMode::Completed)
            .iter()
            .map(|h| h.id)
            .collect();
        let all: HashSet<HabitId> = habits.iter().map(|h| h.id).collect();

        assert!(active.is_disjoint(&completed));
        assert_eq!(&active | &completed, all);
    }

    #[test]
    fn empty_collection() {
        for mode in [FilterMode::All, FilterMode::Active, FilterMode::Completed] {
            assert!(apply(&[], mode).is_empty());
        }
    }

    #[test]
    fn parses_and_prints() {
        for mode in [FilterMode::All, FilterMode::Active, FilterMode::Completed] {
            assert_eq!(mode.to_string().parse::<FilterMode>().unwrap(), mode);
        }
        assert_eq!(" Active ".parse::<FilterMode>().unwrap(), FilterMode::Active);
        assert!("done".parse::<FilterMode>().is_err());
    }
}
