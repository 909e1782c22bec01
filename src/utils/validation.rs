//! Centralized validation and helper functions.

use crate::core::spacer::SPACER_COUNT;

/// Maximum number of entries allowed in a spoligotype database (DOS protection)
pub const MAX_DATABASE_ENTRIES: usize = 1_000_000;

/// Maximum length of a sample name used as a report file name prefix
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Validation error types for spacer counts and binary codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Expected {expected} spacers, found {found}")]
    WrongSpacerCount { expected: usize, found: usize },

    #[error("Unknown spacer name: '{0}'")]
    UnknownSpacer(String),

    #[error("Duplicate spacer name: '{0}'")]
    DuplicateSpacer(String),

    #[error("Binary code must be {expected} characters long, found {found}")]
    WrongCodeLength { expected: usize, found: usize },

    #[error("Binary code contains invalid character '{0}' (expected '0' or '1')")]
    InvalidCodeCharacter(char),

    #[error("Filename cannot be empty")]
    EmptyFilename,

    #[error("Filename exceeds maximum length of {MAX_FILENAME_LENGTH} characters")]
    FilenameTooLong,

    #[error("Invalid filename '{0}': path separators, '..' and control characters are not allowed")]
    InvalidFilename(String),
}

/// Validate that a string is a well-formed 43-bit spoligotype binary code.
///
/// # Examples
///
/// ```
/// use spoligotyper::utils::validation::is_valid_binary_code;
///
/// assert!(is_valid_binary_code(&"1".repeat(43)));
/// assert!(!is_valid_binary_code(&"1".repeat(42)));
/// assert!(!is_valid_binary_code(&"2".repeat(43)));
/// ```
#[must_use]
pub fn is_valid_binary_code(s: &str) -> bool {
    check_binary_code(s).is_ok()
}

/// Check a candidate binary code, reporting the first problem found.
///
/// Length is checked before content, so a short string of garbage reports
/// `WrongCodeLength`.
///
/// # Errors
///
/// Returns `ValidationError::WrongCodeLength` if the string is not 43 characters,
/// or `ValidationError::InvalidCodeCharacter` for anything other than '0' and '1'.
pub fn check_binary_code(s: &str) -> Result<(), ValidationError> {
    let found = s.chars().count();
    if found != SPACER_COUNT {
        return Err(ValidationError::WrongCodeLength {
            expected: SPACER_COUNT,
            found,
        });
    }

    match s.chars().find(|c| *c != '0' && *c != '1') {
        Some(c) => Err(ValidationError::InvalidCodeCharacter(c)),
        None => Ok(()),
    }
}

/// Check if adding another database entry would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new entry.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_entry_limit(count: usize) -> Option<String> {
    if count >= MAX_DATABASE_ENTRIES {
        Some(format!(
            "Too many database entries: adding another would exceed maximum of {MAX_DATABASE_ENTRIES}"
        ))
    } else {
        None
    }
}

/// Check that a sample name can be used as a file name inside the output
/// directory.
///
/// Rejects names that could escape the directory (`..`, `/`, `\`) and names
/// with NUL or other control characters.
///
/// # Errors
///
/// Returns `ValidationError::EmptyFilename` if the name is blank,
/// `ValidationError::FilenameTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidFilename` if it contains forbidden characters.
pub fn validate_filename(filename: &str) -> Result<(), ValidationError> {
    if filename.trim().is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    if filename.len() > MAX_FILENAME_LENGTH {
        return Err(ValidationError::FilenameTooLong);
    }

    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(ValidationError::InvalidFilename(filename.to_string()));
    }

    if filename.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFilename(filename.to_string()));
    }

    Ok(())
}
