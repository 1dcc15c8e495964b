//! Contact Book - a local-first personal contact manager.
//!
//! Contacts live in memory for the session and are written back to a JSON
//! file after every change. A front end (the bundled CLI, or any view layer)
//! validates input, calls the store, then re-queries to refresh its display.
//!
//! # Architecture
//!
//! - **domain**: Value objects for ids, phone numbers and email addresses
//! - **models**: The stored `Contact` record and the editable `ContactDraft`
//! - **validation**: Required-field and email-shape checks
//! - **repositories**: Storage trait and the JSON file implementation
//! - **store**: The contact collection with uniqueness enforcement
//! - **search**: Substring search and stable column sorting
//! - **transfer**: CSV import and export
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;
pub mod store;
pub mod transfer;
pub mod validation;

pub use config::Config;
pub use domain::{ContactId, ValidationError};
pub use error::{ConfigError, ContactBookError, ContactBookResult};
pub use models::{Contact, ContactDraft};
pub use repositories::{ContactRepository, JsonContactRepository};
pub use search::SortField;
pub use store::{ContactStore, LoadOutcome, SaveOutcome};
pub use transfer::ImportReport;
