use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{self, FilterMode};
use crate::stats;
use crate::store::HabitStore;

/// Visible habits under `mode`, plus stats over the whole collection.
pub fn run(store: &HabitStore, mode: FilterMode) -> Result<CmdResult> {
    let listed = filter::apply(store.habits(), mode)
        .into_iter()
        .cloned()
        .collect();

    Ok(CmdResult::default()
        .with_listed_habits(listed)
        .with_stats(stats::compute(store.habits())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn stats_ignore_the_filter() {
        let store = StoreFixture::new()
            .with_completed_habit("Read", Category::Learning)
            .with_active_habit("Walk", Category::Health)
            .with_active_habit("Paint", Category::Creative)
            .store;

        let completed = run(&store, FilterMode::Completed).unwrap();
        assert_eq!(completed.listed_habits.len(), 1);
        assert_eq!(completed.listed_habits[0].name, "Read");
        assert_eq!(completed.stats.total, 3);
        assert_eq!(completed.stats.completed_count, 1);

        let active = run(&store, FilterMode::Active).unwrap();
        assert_eq!(active.listed_habits.len(), 2);
        assert_eq!(active.stats, completed.stats);
    }

    #[test]
    fn listing_is_not_a_mutation() {
        let store = StoreFixture::new().with_habits(2).store;
        let result = run(&store, FilterMode::All).unwrap();
        assert!(!result.is_mutation());
        assert!(result.messages.is_empty());
    }
}
