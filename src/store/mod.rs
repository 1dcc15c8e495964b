//! The in-memory contact collection and its persistence.
//!
//! [`ContactStore`] owns the list of contacts, enforces id and phone
//! uniqueness, and writes the full collection back through its
//! [`ContactRepository`] after every successful mutation.

use crate::domain::{normalize_phone, ContactId, PhoneNumber};
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactRepository;
use crate::search;
use crate::transfer::ImportReport;
use crate::validation::{validate, validate_draft};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// What happened when the persisted collection was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were read; `dropped` of them broke an invariant and were skipped.
    Loaded { count: usize, dropped: usize },
    /// Nothing has been persisted yet.
    Missing,
    /// The storage could not be read or decoded. The store starts empty.
    Unreadable(String),
}

/// Result of writing the collection back to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The write failed. In-memory state stays authoritative for the session.
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// The failure reason, if any, for surfacing to the user.
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Saved => None,
            Self::Failed(reason) => Some(reason),
        }
    }
}

/// Owns the contact list for one session.
pub struct ContactStore {
    repository: Box<dyn ContactRepository>,
    contacts: Vec<Contact>,
    load_outcome: LoadOutcome,
    last_save: Option<SaveOutcome>,
}

impl ContactStore {
    /// Create a store over `repository` and load the persisted collection.
    ///
    /// Never fails: a missing or unreadable file yields an empty store, and
    /// the reason is kept in [`ContactStore::load_outcome`].
    pub fn open(repository: impl ContactRepository + 'static) -> Self {
        let mut store = Self {
            repository: Box::new(repository),
            contacts: Vec::new(),
            load_outcome: LoadOutcome::Missing,
            last_save: None,
        };
        store.load();
        store
    }

    /// Replace the in-memory collection with the persisted one.
    pub fn load(&mut self) -> &LoadOutcome {
        let location = self.repository.describe();

        self.load_outcome = match self.repository.load() {
            Ok(Some(records)) => {
                let (contacts, dropped) = Self::sanitize(records);
                info!(
                    "Loaded {} contacts from {} ({} dropped)",
                    contacts.len(),
                    location,
                    dropped
                );
                let count = contacts.len();
                self.contacts = contacts;
                LoadOutcome::Loaded { count, dropped }
            }
            Ok(None) => {
                info!("No contact file at {}, starting empty", location);
                self.contacts.clear();
                LoadOutcome::Missing
            }
            Err(e) => {
                warn!("Could not load contacts from {}: {}; starting empty", location, e);
                self.contacts.clear();
                LoadOutcome::Unreadable(e.to_string())
            }
        };

        &self.load_outcome
    }

    /// Drop persisted records that would break the store's invariants.
    /// The first record wins when ids or phones collide.
    fn sanitize(records: Vec<Contact>) -> (Vec<Contact>, usize) {
        let mut ids = HashSet::new();
        let mut phones = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());
        let mut dropped = 0;

        for record in records {
            if let Err(e) = validate(&record.name, &record.phone, "") {
                warn!("Dropping stored contact {}: {}", record.id, e);
                dropped += 1;
                continue;
            }
            if !ids.insert(record.id.clone()) {
                warn!("Dropping stored contact with repeated id {}", record.id);
                dropped += 1;
                continue;
            }
            if !phones.insert(normalize_phone(&record.phone)) {
                warn!(
                    "Dropping stored contact {}: phone {} already in use",
                    record.id, record.phone
                );
                dropped += 1;
                continue;
            }
            kept.push(record);
        }

        (kept, dropped)
    }

    /// Write the full collection back to storage.
    pub fn save(&mut self) -> SaveOutcome {
        let outcome = match self.repository.save(&self.contacts) {
            Ok(()) => {
                debug!("Saved {} contacts", self.contacts.len());
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!("Failed to save contacts: {}", e);
                SaveOutcome::Failed(e.to_string())
            }
        };
        self.last_save = Some(outcome.clone());
        outcome
    }

    /// Add a new contact and persist.
    ///
    /// # Errors
    ///
    /// - `Validation` if name or phone is blank, or the email has no '@'
    /// - `DuplicatePhone` if another contact has the same normalized phone
    pub fn add(&mut self, draft: ContactDraft) -> ContactBookResult<Contact> {
        let contact = self.insert(draft)?;
        info!("Added contact {} ({})", contact.id, contact.name);
        self.save();
        Ok(contact)
    }

    /// Validate, check uniqueness and append without saving.
    fn insert(&mut self, draft: ContactDraft) -> ContactBookResult<Contact> {
        let draft = draft.trimmed();
        validate_draft(&draft)?;
        let phone = PhoneNumber::new(draft.phone.as_str())?;
        self.ensure_phone_free(&phone, None)?;

        let contact = Contact::from_draft(ContactId::generate(), draft);
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    /// Replace the fields of an existing contact and persist. The id never changes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no contact has this id
    /// - `Validation` if the new fields are invalid
    /// - `DuplicatePhone` if a different contact has the same normalized phone
    pub fn update(&mut self, id: &str, draft: ContactDraft) -> ContactBookResult<Contact> {
        let index = self.position(id)?;

        let draft = draft.trimmed();
        validate_draft(&draft)?;
        let phone = PhoneNumber::new(draft.phone.as_str())?;
        let own_id = self.contacts[index].id.clone();
        self.ensure_phone_free(&phone, Some(&own_id))?;

        let contact = &mut self.contacts[index];
        contact.apply(draft);
        let updated = contact.clone();

        info!("Updated contact {}", updated.id);
        self.save();
        Ok(updated)
    }

    /// Remove a contact and persist.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no contact has this id.
    pub fn remove(&mut self, id: &str) -> ContactBookResult<Contact> {
        let index = self.position(id)?;
        let removed = self.contacts.remove(index);

        info!("Removed contact {}", removed.id);
        self.save();
        Ok(removed)
    }

    /// Add every draft that passes validation and the phone check, then save once.
    ///
    /// Drafts are checked against the existing contacts and against earlier
    /// drafts of the same batch.
    pub fn import_drafts<I>(&mut self, drafts: I) -> ImportReport
    where
        I: IntoIterator<Item = ContactDraft>,
    {
        let mut report = ImportReport::default();

        for draft in drafts {
            match self.insert(draft) {
                Ok(_) => report.imported += 1,
                Err(ContactBookError::DuplicatePhone { phone, .. }) => {
                    debug!("Skipping imported row: phone {} already in use", phone);
                    report.skipped_duplicates += 1;
                }
                Err(e) => {
                    debug!("Skipping imported row: {}", e);
                    report.skipped_invalid += 1;
                }
            }
        }

        info!(
            "Imported {} contacts ({} duplicates, {} invalid)",
            report.imported, report.skipped_duplicates, report.skipped_invalid
        );
        self.save();
        report
    }

    /// All contacts in insertion order.
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == *id)
    }

    /// Contacts whose name or phone contains `query`; see [`search::search`].
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Contact> + 'a {
        search::search(&self.contacts, query)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Outcome of the most recent save, `None` if nothing was saved yet.
    pub fn last_save(&self) -> Option<&SaveOutcome> {
        self.last_save.as_ref()
    }

    fn position(&self, id: &str) -> ContactBookResult<usize> {
        self.contacts
            .iter()
            .position(|c| c.id == *id)
            .ok_or_else(|| ContactBookError::NotFound(id.to_string()))
    }

    fn ensure_phone_free(
        &self,
        phone: &PhoneNumber,
        except: Option<&ContactId>,
    ) -> ContactBookResult<()> {
        let owner = self
            .contacts
            .iter()
            .filter(|c| Some(&c.id) != except)
            .find(|c| phone.collides_with(&c.phone));

        match owner {
            Some(existing) => Err(ContactBookError::DuplicatePhone {
                phone: phone.as_str().to_string(),
                existing_id: existing.id.to_string(),
            }),
            None => Ok(()),
        }
    }
}
