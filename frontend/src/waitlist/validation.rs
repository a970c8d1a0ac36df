use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::MAX_EMAIL_LENGTH;

// Local part may not start with a dot and must end in `[A-Za-z0-9_+-]`.
// `..` is rejected separately since `regex` has no lookaround.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9_'+\-][A-Za-z0-9_'+\-.]*)?[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Why a waitlist address was refused. `Display` is the message shown
/// next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    Empty,
    #[error("Enter a valid email address")]
    Format,
    #[error("Email must be under 255 characters")]
    Length,
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Empty => "empty",
            ValidationError::Format => "format",
            ValidationError::Length => "length",
        }
    }
}

fn is_well_formed(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    if local.contains("..") {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}

/// Checks a raw input value and returns the trimmed address when it is
/// acceptable. Checks run as empty, then format, then length, and the first
/// failure wins.
pub fn validate_email(candidate: &str) -> Result<String, ValidationError> {
    let trimmed = candidate.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !is_well_formed(trimmed) {
        return Err(ValidationError::Format);
    }
    if trimmed.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::Length);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_address(total: usize) -> String {
        let domain = "@example.com";
        format!("{}{}", "a".repeat(total - domain.len()), domain)
    }

    #[test]
    fn blank_input_is_required_error() {
        for input in ["", " ", "\t", "   \n  "] {
            assert_eq!(validate_email(input), Err(ValidationError::Empty), "input {:?}", input);
        }
    }

    #[test]
    fn malformed_addresses_are_format_errors() {
        for input in [
            "not-an-email",
            "user@",
            "@example.com",
            "user@localhost",
            "user@example",
            "user@@example.com",
            "user name@example.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example.c",
            "user'@example.com",
            "'@example.com",
        ] {
            assert_eq!(validate_email(input), Err(ValidationError::Format), "input {:?}", input);
        }
    }

    #[test]
    fn accepts_common_addresses() {
        for input in [
            "user@example.com",
            "first.last@sub.example.co.uk",
            "dev+waitlist@lade-stack.dev",
            "o'brien@example.ie",
            "USER_1@EXAMPLE.ORG",
            "a@example.com",
            "a'b@example.com",
        ] {
            assert_eq!(validate_email(input), Ok(input.to_string()));
        }
    }

    #[test]
    fn returns_trimmed_value() {
        assert_eq!(
            validate_email("  user@example.com \n"),
            Ok("user@example.com".to_string())
        );
    }

    #[test]
    fn length_limit_is_inclusive() {
        let at_limit = long_address(MAX_EMAIL_LENGTH);
        assert_eq!(validate_email(&at_limit), Ok(at_limit.clone()));

        let over = long_address(MAX_EMAIL_LENGTH + 1);
        assert_eq!(validate_email(&over), Err(ValidationError::Length));
    }

    #[test]
    fn surrounding_whitespace_does_not_count_towards_length() {
        let at_limit = long_address(MAX_EMAIL_LENGTH);
        let padded = format!("   {}   ", at_limit);
        assert_eq!(validate_email(&padded), Ok(at_limit));
    }

    #[test]
    fn format_is_checked_before_length() {
        let long_garbage = "x".repeat(MAX_EMAIL_LENGTH + 10);
        assert_eq!(validate_email(&long_garbage), Err(ValidationError::Format));
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(ValidationError::Empty.to_string(), "Email is required");
        assert_eq!(ValidationError::Format.to_string(), "Enter a valid email address");
        assert_eq!(ValidationError::Length.to_string(), "Email must be under 255 characters");
    }
}
