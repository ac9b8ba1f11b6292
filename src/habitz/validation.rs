//! Habit name validation.
//!
//! A valid name, after trimming surrounding whitespace:
//! - is not empty
//! - is at least [`NAME_MIN_LEN`] long
//! - is at most [`NAME_MAX_LEN`] long
//!
//! Length is counted in UTF-16 code units, which is how the names were
//! measured by the browser widget that first wrote this data.

use crate::error::ValidationError;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;

/// Validates a habit name and returns its trimmed form.
///
/// # Examples
/// ```
/// use habitz::error::ValidationError;
/// use habitz::validation::validate_name;
///
/// assert_eq!(validate_name("  Drink Water "), Ok("Drink Water".to_string()));
/// assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
/// assert_eq!(validate_name("ab"), Err(ValidationError::TooShort));
/// assert_eq!(validate_name(&"x".repeat(51)), Err(ValidationError::TooLong));
/// ```
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    let len = name_len(trimmed);

    if len == 0 {
        return Err(ValidationError::EmptyName);
    }
    if len < NAME_MIN_LEN {
        return Err(ValidationError::TooShort);
    }
    if len > NAME_MAX_LEN {
        return Err(ValidationError::TooLong);
    }

    Ok(trimmed.to_string())
}

/// Length of a name in UTF-16 code units.
pub fn name_len(name: &str) -> usize {
    name.encode_utf16().count()
}
