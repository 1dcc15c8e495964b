use crate::error::ContactBookResult;
use crate::models::Contact;

/// Persistent storage for the whole contact collection.
///
/// The store reads the collection once at startup and rewrites it wholesale
/// after every mutation, so implementations only deal in full snapshots.
pub trait ContactRepository {
    /// Read the persisted collection.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet (first run).
    fn load(&self) -> ContactBookResult<Option<Vec<Contact>>>;

    /// Overwrite the persisted collection with `contacts`.
    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()>;

    /// Human-readable location used in log lines.
    fn describe(&self) -> String;
}
