use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::HabitId;
use crate::store::HabitStore;

/// Flips completion of `id`. An unknown id is reported but is not an error.
pub fn run(store: &mut HabitStore, id: HabitId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.toggle(id) {
        Some(habit) => {
            let habit = habit.clone();
            if habit.completed {
                result.add_message(CmdMessage::success(format!(
                    "Completed: {} (streak {})",
                    habit.name, habit.streak
                )));
            } else {
                result.add_message(CmdMessage::info(format!(
                    "Marked incomplete: {}",
                    habit.name
                )));
            }
            result.affected_habits.push(habit);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No habit with id {}", id)));
        }
    }

    Ok(result)
}
