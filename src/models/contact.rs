//! Contact model representing a person in the contact book.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A stored contact.
///
/// Persisted as a JSON object with the keys `id`, `name`, `phone`, `email`
/// and `address`. Older files that omit `email` or `address` still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned on creation and never changed
    pub id: ContactId,

    /// Display name (never empty)
    pub name: String,

    /// Phone number as entered, formatting preserved (never empty)
    pub phone: String,

    /// Email address, empty when unknown
    #[serde(default)]
    pub email: String,

    /// Free-text postal address, may span several lines
    #[serde(default)]
    pub address: String,
}

/// Candidate contact fields, as entered by a user or read from an import row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactDraft {
    /// Create a draft with the two required fields.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: String::new(),
            address: String::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Strip surrounding whitespace from every field.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}

impl Contact {
    /// Build a stored contact from a draft and a freshly assigned id.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
        }
    }

    /// Replace every editable field, keeping the id.
    pub fn apply(&mut self, draft: ContactDraft) {
        self.name = draft.name;
        self.phone = draft.phone;
        self.email = draft.email;
        self.address = draft.address;
    }

    /// The editable fields of this contact, without the id.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}
