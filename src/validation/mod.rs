//! Candidate field validation.
//!
//! Pure checks only. Whether a phone number is already taken is the store's
//! concern, since it needs the current collection.

use crate::domain::{EmailAddress, PhoneNumber, RequiredField, ValidationError, ValidationResult};
use crate::models::ContactDraft;

/// Check the user-entered fields of a contact.
///
/// Name and phone must be non-empty after trimming; a non-empty email must
/// contain '@'. Name is checked before phone, and both before email.
///
/// ```
/// use contact_book::validation::validate;
///
/// assert!(validate("", "123", "").is_err());
/// assert!(validate("Ann", "123", "ann.example.com").is_err());
/// assert!(validate("Ann", "123", "a@b.com").is_ok());
/// ```
pub fn validate(name: &str, phone: &str, email: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(RequiredField::Name));
    }
    PhoneNumber::new(phone)?;

    let email = email.trim();
    if !email.is_empty() {
        EmailAddress::new(email)?;
    }
    Ok(())
}

/// [`validate`] applied to a draft. The address is free text and never rejected.
pub fn validate_draft(draft: &ContactDraft) -> ValidationResult<()> {
    validate(&draft.name, &draft.phone, &draft.email)
}
