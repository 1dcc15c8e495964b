use crate::error::{ContactBookError, ContactBookResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contact repository backed by a single pretty-printed JSON file.
///
/// The file holds an array of contact objects in insertion order and is
/// written as UTF-8 without escaping non-ASCII characters.
pub struct JsonContactRepository {
    path: PathBuf,
}

impl JsonContactRepository {
    /// Create a repository for the given file path. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactRepository for JsonContactRepository {
    fn load(&self) -> ContactBookResult<Option<Vec<Contact>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ContactBookError::io(&self.path, e)),
        };

        let contacts: Vec<Contact> = serde_json::from_str(&raw).map_err(|e| {
            ContactBookError::ParseFailure(format!("{}: {}", self.path.display(), e))
        })?;

        debug!("Read {} contacts from {}", contacts.len(), self.path.display());
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()> {
        let json = serde_json::to_string_pretty(contacts)
            .map_err(|e| ContactBookError::ParseFailure(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ContactBookError::io(parent, e))?;
        }
        fs::write(&self.path, json).map_err(|e| ContactBookError::io(&self.path, e))?;

        debug!("Wrote {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
