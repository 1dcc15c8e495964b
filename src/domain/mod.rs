//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact IDs, email addresses, and phone numbers. Phone numbers carry the
//! digit normalization used for uniqueness checks; email addresses carry the
//! shape check used by the validator.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::{RequiredField, ValidationError, ValidationResult};
pub use phone::{normalize_phone, PhoneNumber};
