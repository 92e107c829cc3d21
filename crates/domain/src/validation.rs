//! Input validators for names and email addresses

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DomainError, DomainResult};

#[allow(clippy::expect_used)]
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_-]{0,254}$").expect("name pattern is valid")
});

// Coarse sanity check only, not RFC 5322.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+\..+$").expect("email pattern is valid"));

/// Returns true if `input` is a valid collection, key or application name.
///
/// Valid names are 1 to 255 characters long, start with a letter or an
/// underscore, and continue with letters, digits, underscores or hyphens.
///
/// ```
/// use docbase_domain::validate_name;
///
/// assert!(validate_name("abc-1"));
/// assert!(!validate_name("1abc"));
/// ```
#[must_use]
pub fn validate_name(input: &str) -> bool {
    NAME_PATTERN.is_match(input)
}

/// Returns true if `input` looks like `something@something.something`.
#[must_use]
pub fn validate_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

/// Like [`validate_name`], but returns an error naming the rejected input.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is rejected.
pub fn ensure_name(input: &str) -> DomainResult<()> {
    if validate_name(input) {
        Ok(())
    } else {
        Err(DomainError::InvalidName(input.to_string()))
    }
}

/// Like [`validate_email`], but returns an error naming the rejected input.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is rejected.
pub fn ensure_email(input: &str) -> DomainResult<()> {
    if validate_email(input) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("abc-1"));
        assert!(validate_name("_private"));
        assert!(validate_name("a"));
        assert!(!validate_name("1abc"));
        assert!(!validate_name(""));
        assert!(!validate_name("-abc"));
        assert!(!validate_name("has space"));
        assert!(!validate_name("dot.name"));
    }

    #[test]
    fn test_validate_name_length_limit() {
        let longest = format!("a{}", "b".repeat(254));
        assert!(validate_name(&longest));

        let too_long = format!("a{}", "b".repeat(255));
        assert!(!validate_name(&too_long));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.c"));
        assert!(validate_email("first.last@example.co.uk"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@b.c"));
        assert!(!validate_email("plain"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_ensure_helpers() {
        assert!(ensure_name("docs").is_ok());
        assert_eq!(
            ensure_name("9lives"),
            Err(DomainError::InvalidName("9lives".to_string()))
        );
        assert_eq!(
            ensure_email("nobody"),
            Err(DomainError::InvalidEmail("nobody".to_string()))
        );
    }
}
