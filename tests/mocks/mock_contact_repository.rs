use contact_book::error::{ContactBookError, ContactBookResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps the "persisted" collection in memory behind shared state, so a
/// clone handed to a `ContactStore` can still be inspected by the test.
/// Tracks method calls and can be switched to fail loads or saves.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    stored: Arc<Mutex<Option<Vec<Contact>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_loads: Arc<Mutex<Option<String>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a repository with nothing persisted (first run).
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_loads: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a repository that already holds `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(contacts);
        repo
    }

    /// Make every load fail with a parse failure.
    pub fn fail_loads_with(&self, reason: &str) {
        *self.fail_loads.lock().unwrap() = Some(reason.to_string());
    }

    /// Make saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// The last successfully saved collection.
    pub fn stored(&self) -> Option<Vec<Contact>> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> ContactBookResult<Option<Vec<Contact>>> {
        self.track_call("load");

        if let Some(reason) = self.fail_loads.lock().unwrap().clone() {
            return Err(ContactBookError::ParseFailure(reason));
        }
        Ok(self.stored())
    }

    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(ContactBookError::io(
                "mock://contacts",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        *self.stored.lock().unwrap() = Some(contacts.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "mock://contacts".to_string()
    }
}
