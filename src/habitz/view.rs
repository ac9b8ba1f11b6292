//! Display projection.
//!
//! Turns the output of a tracker call into plain display data: one row per
//! visible habit plus a stats summary. Nothing here renders; a UI maps the
//! [`View`] onto whatever surface it has. All text is computed against an
//! explicit `now` so projections are reproducible.

use crate::commands::CmdResult;
use crate::filter::FilterMode;
use crate::model::{Habit, HabitId};
use crate::stats::Stats;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitRow {
    pub id: HabitId,
    pub name: String,
    /// Raw category value as stored.
    pub category: String,
    /// Display label; `None` for categories outside the known set.
    pub category_label: Option<&'static str>,
    pub category_icon: Option<&'static str>,
    pub completed: bool,
    pub streak: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub filter: FilterMode,
    pub rows: Vec<HabitRow>,
    pub stats: Stats,
    pub summary: String,
    /// Shown instead of rows when nothing is visible.
    pub empty_message: Option<&'static str>,
}

pub fn project(visible: &[Habit], stats: Stats, filter: FilterMode, now: DateTime<Utc>) -> View {
    let rows: Vec<HabitRow> = visible.iter().map(|h| row(h, now)).collect();
    let empty_message = if rows.is_empty() {
        Some(empty_message(filter))
    } else {
        None
    };

    View {
        filter,
        rows,
        stats,
        summary: summary(&stats),
        empty_message,
    }
}

/// Projects the listing carried by a tracker result.
pub fn from_result(result: &CmdResult, filter: FilterMode, now: DateTime<Utc>) -> View {
    project(&result.listed_habits, result.stats, filter, now)
}

fn row(habit: &Habit, now: DateTime<Utc>) -> HabitRow {
    HabitRow {
        id: habit.id,
        name: habit.name.clone(),
        category: habit.category.as_str().to_string(),
        category_label: habit.category.label(),
        category_icon: habit.category.icon(),
        completed: habit.completed,
        streak: habit.streak,
        status: status(habit, now),
    }
}

fn status(habit: &Habit, now: DateTime<Utc>) -> String {
    match habit.completed_at {
        Some(at) if habit.completed => format!("Completed {}", time_ago(at, now)),
        _ => "Not completed".to_string(),
    }
}

fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

fn summary(stats: &Stats) -> String {
    format!(
        "{} of {} completed ({}%), best streak {}",
        stats.completed_count, stats.total, stats.percentage, stats.max_streak
    )
}

fn empty_message(filter: FilterMode) -> &'static str {
    match filter {
        FilterMode::All => "No habits yet. Add one to get started!",
        FilterMode::Active => "No active habits. Everything is done!",
        FilterMode::Completed => "No completed habits yet.",
    }
}
