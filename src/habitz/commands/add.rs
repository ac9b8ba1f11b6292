use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Category;
use crate::store::HabitStore;

pub fn run(store: &mut HabitStore, name: &str, category: Category) -> Result<CmdResult> {
    let habit = store.add(name, category)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Habit added: {}",
        habit.name
    )));
    result.affected_habits.push(habit);
    Ok(result)
}
