use crate::model::Habit;
use serde::Serialize;

/// Aggregates over the whole collection, independent of the filter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub completed_count: usize,
    pub max_streak: u32,
    /// Share of completed habits, 0..=100, rounded half away from zero.
    pub percentage: u32,
}

pub fn compute(habits: &[Habit]) -> Stats {
    let total = habits.len();
    let completed_count = habits.iter().filter(|h| h.completed).count();
    let max_streak = habits.iter().map(|h| h.streak).max().unwrap_or(0);

    Stats {
        total,
        completed_count,
        max_streak,
        percentage: percentage(completed_count, total),
    }
}

/// `round(part / whole * 100)` in integer arithmetic.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part as u128, whole as u128);
    ((part * 200 + whole) / (whole * 2)) as u32
}
