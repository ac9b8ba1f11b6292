use thiserror::Error;

/// Why a habit name was rejected.
///
/// The `Display` text is the user-facing message; callers decide whether and
/// how to show it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a habit name")]
    EmptyName,

    #[error("Habit name must be at least 3 characters")]
    TooShort,

    #[error("Habit name must be at most 50 characters")]
    TooLong,
}

#[derive(Error, Debug)]
pub enum HabitzError {
    #[error("Invalid habit: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HabitzError>;
