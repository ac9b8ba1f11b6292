use crate::model::Habit;
use crate::stats::Stats;

pub mod add;
pub mod delete;
pub mod list;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Habits created, changed or removed by the command.
    pub affected_habits: Vec<Habit>,
    /// Habits visible under the current filter, in collection order.
    pub listed_habits: Vec<Habit>,
    pub stats: Stats,
    pub messages: Vec<CmdMessage>,
    /// The in-memory change stands but could not be written to storage.
    pub save_failed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_habits(mut self, habits: Vec<Habit>) -> Self {
        self.listed_habits = habits;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Whether the command changed the collection.
    pub fn is_mutation(&self) -> bool {
        !self.affected_habits.is_empty()
    }
}
