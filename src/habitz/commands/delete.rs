use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::HabitId;
use crate::store::HabitStore;

/// Removes `id` for good. Asking the user to confirm is up to the UI.
pub fn run(store: &mut HabitStore, id: HabitId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.delete(id) {
        Some(habit) => {
            result.add_message(CmdMessage::success(format!(
                "Habit deleted: {}",
                habit.name
            )));
            result.affected_habits.push(habit);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No habit with id {}", id)));
        }
    }

    Ok(result)
}
