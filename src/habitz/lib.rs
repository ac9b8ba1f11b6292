//! # Habitz Architecture
//!
//! Habitz is a **UI-agnostic habit tracking library**. It owns an ordered list
//! of habits, the operations that change it, and the pure projections a UI
//! needs (filtered list, stats, display rows). It never draws anything.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (view.rs)                                       │
//! │  - Pure projection into display rows + summary text         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - HabitTracker: one entry point per user action            │
//! │  - Persists after every mutation, recomputes filter + stats │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / toggle / delete / list                             │
//! │  - Returns CmdResult with affected habits and messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, filter.rs, stats.rs, validation.rs)          │
//! │  - HabitStore owns the collection and its invariants        │
//! │  - Filter and stats are pure functions over &[Habit]        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                                   │
//! │  - KeyValueStore trait: get / set / delete strings          │
//! │  - FileStorage (production), MemoryStorage (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything below the API layer takes Rust values and returns Rust values.
//! The only I/O is the `KeyValueStore` the tracker was opened with, and the
//! only side channel is the `log` facade.
//!
//! ## Failure Policy
//!
//! - Invalid names are rejected with a [`error::ValidationError`]; nothing
//!   changes and nothing is written.
//! - Unreadable or corrupt stored data opens as an empty collection.
//! - A failed write is reported on the result (`save_failed`), the in-memory
//!   change is kept.
//!
//! ## Module Overview
//!
//! - [`api`]: `HabitTracker`, the entry point for all operations
//! - [`commands`]: One module per user action
//! - [`store`]: The habit collection and its persisted form
//! - [`storage`]: Key-value persistence backends
//! - [`model`]: Core data types (`Habit`, `HabitId`, `Category`)
//! - [`validation`]: Habit name rules
//! - [`filter`]: Filter modes
//! - [`stats`]: Aggregate statistics
//! - [`view`]: Display projection
//! - [`config`]: Configuration management
//! - [`init`]: File-backed setup
//! - [`logging`]: Optional file logging bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod logging;
pub mod model;
pub mod stats;
pub mod storage;
pub mod store;
pub mod validation;
pub mod view;

pub use api::HabitTracker;
pub use error::{HabitzError, Result, ValidationError};
pub use filter::FilterMode;
pub use model::{Category, Habit, HabitId};
pub use stats::Stats;
