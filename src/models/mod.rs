//! Data models for the contact book.
//!
//! A [`Contact`] is the stored record; a [`ContactDraft`] is the set of
//! user-editable fields before the store has assigned an id.

pub mod contact;

pub use contact::{Contact, ContactDraft};
