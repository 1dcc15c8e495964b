//! Bulk import/export against comma-separated files.
//!
//! # Format
//!
//! | Column | Required on import | Notes |
//! |--------|--------------------|-------|
//! | `name` | yes | |
//! | `phone` | yes | duplicates of existing phones are skipped |
//! | `email` | no | must contain '@' when present |
//! | `address` | no | may contain newlines (quoted) |
//!
//! Columns are looked up by header name, so their order does not matter and
//! extra columns are ignored. Ids are never exported; every imported row
//! gets a fresh one.

pub mod csv_export;
pub mod csv_import;
pub mod row;

pub use csv_export::{export, export_to_writer};
pub use csv_import::{import, import_from_reader};
pub use row::ContactRow;

/// Header row written on export and expected on import.
pub const CSV_HEADER: [&str; 4] = ["name", "phone", "email", "address"];

/// Per-row tally of a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows added to the store
    pub imported: usize,
    /// Rows whose phone collided with an existing contact or an earlier row
    pub skipped_duplicates: usize,
    /// Rows lacking a name or phone, or not decodable
    pub skipped_malformed: usize,
    /// Rows with an invalid email
    pub skipped_invalid: usize,
}

impl ImportReport {
    /// Total rows that were not imported.
    pub fn skipped(&self) -> usize {
        self.skipped_duplicates + self.skipped_malformed + self.skipped_invalid
    }
}
