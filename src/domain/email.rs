//! EmailAddress value object.

use super::errors::ValidationError;

/// An email address that passed the shape check.
///
/// Only the presence of an '@' is checked; the local part and domain are
/// not inspected.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// assert!(EmailAddress::new("ann@example.com").is_ok());
/// assert!(EmailAddress::new("ann.example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address has no '@'.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }
}
