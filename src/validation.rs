//! Field classifiers for the email sign-up form.
//!
//! Each classifier is pure and returns an advisory message for the field
//! plus whether the value is acceptable. Empty input never shows a message.

use std::sync::LazyLock;

use regex::Regex;

/// Message shown under a form field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Advisory {
    #[default]
    None,
    /// Confirmation, rendered in a neutral color.
    Neutral(String),
    /// Problem with the input, rendered in red.
    Error(String),
}

impl Advisory {
    pub fn text(&self) -> &str {
        match self {
            Advisory::None => "",
            Advisory::Neutral(text) | Advisory::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Advisory::Error(_))
    }
}

/// Outcome of classifying one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    pub message: Advisory,
    pub is_valid: bool,
}

impl Validation {
    fn empty() -> Self {
        Self::default()
    }

    fn valid(message: &str) -> Self {
        Self {
            message: Advisory::Neutral(message.to_string()),
            is_valid: true,
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            message: Advisory::Error(message.to_string()),
            is_valid: false,
        }
    }
}

pub const EMAIL_INVALID: &str = "Please check the email format.";
pub const EMAIL_VALID: &str = "Valid email address.";
pub const NICKNAME_TOO_SHORT: &str = "Nickname must be at least 2 characters.";
pub const NICKNAME_INVALID: &str = "Use 2 to 8 letters, digits or Hangul.";
pub const NICKNAME_VALID: &str = "Available nickname.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const PASSWORD_VALID: &str = "Valid password.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const PASSWORD_MATCH: &str = "Passwords match.";

const PASSWORD_MIN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,64}$").expect("invalid email pattern")
});

static NICKNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[가-힣A-Za-z0-9]{2,8}$").expect("invalid nickname pattern"));

pub fn email(input: &str) -> Validation {
    if input.is_empty() {
        Validation::empty()
    } else if EMAIL_PATTERN.is_match(input) {
        Validation::valid(EMAIL_VALID)
    } else {
        Validation::invalid(EMAIL_INVALID)
    }
}

pub fn nickname(input: &str) -> Validation {
    let len = input.chars().count();
    if len == 0 {
        Validation::empty()
    } else if len == 1 {
        Validation::invalid(NICKNAME_TOO_SHORT)
    } else if NICKNAME_PATTERN.is_match(input) {
        Validation::valid(NICKNAME_VALID)
    } else {
        Validation::invalid(NICKNAME_INVALID)
    }
}

pub fn password(input: &str) -> Validation {
    let len = input.chars().count();
    if len == 0 {
        Validation::empty()
    } else if len < PASSWORD_MIN {
        Validation::invalid(PASSWORD_TOO_SHORT)
    } else {
        Validation::valid(PASSWORD_VALID)
    }
}

/// Confirmation must equal the password entered so far.
pub fn password_check(input: &str, password: &str) -> Validation {
    if input.is_empty() {
        Validation::empty()
    } else if input != password {
        Validation::invalid(PASSWORD_MISMATCH)
    } else {
        Validation::valid(PASSWORD_MATCH)
    }
}
