//! PhoneNumber value object.

use super::errors::{RequiredField, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());

/// Strip every non-digit character from a phone string.
///
/// The result is only ever used for comparisons, never displayed.
///
/// ```
/// use contact_book::domain::normalize_phone;
///
/// assert_eq!(normalize_phone("+1 (555) 123-4567"), "15551234567");
/// assert_eq!(normalize_phone("555-0100"), normalize_phone("5550100"));
/// ```
pub fn normalize_phone(phone: &str) -> String {
    NON_DIGIT_RE.replace_all(phone, "").into_owned()
}

/// A phone number as the user typed it.
///
/// Formatting is preserved for display; equality between contacts is decided
/// by [`PhoneNumber::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRequiredField` if the phone is blank.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField(RequiredField::Phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn normalized(&self) -> String {
        normalize_phone(&self.0)
    }

    /// Whether two numbers collide once formatting is ignored.
    pub fn collides_with(&self, other: &str) -> bool {
        self.normalized() == normalize_phone(other)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
