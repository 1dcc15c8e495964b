//! Integration tests for the contact store: CRUD, uniqueness and persistence.

mod mocks;

use contact_book::domain::{normalize_phone, ContactId, RequiredField, ValidationError};
use contact_book::{
    Contact, ContactBookError, ContactDraft, ContactStore, JsonContactRepository, LoadOutcome,
    SaveOutcome,
};
use mocks::MockContactRepository;
use std::collections::HashSet;
use tempfile::TempDir;

fn stored(id: &str, name: &str, phone: &str) -> Contact {
    Contact::from_draft(ContactId::new(id).unwrap(), ContactDraft::new(name, phone))
}

fn assert_phones_unique(store: &ContactStore) {
    let phones: HashSet<String> = store.all().iter().map(|c| normalize_phone(&c.phone)).collect();
    assert_eq!(phones.len(), store.len(), "normalized phones must be unique");
}

#[test]
fn test_add_appears_in_all_and_is_persisted() {
    let repo = MockContactRepository::new();
    let mut store = ContactStore::open(repo.clone());

    let ann = store
        .add(ContactDraft::new("Ann", "555-0100").with_email("ann@example.com"))
        .unwrap();

    assert_eq!(store.all(), std::slice::from_ref(&ann));
    assert_eq!(repo.stored(), Some(vec![ann]));
    assert_eq!(repo.get_call_count("save"), 1);
    assert_eq!(store.last_save(), Some(&SaveOutcome::Saved));
}

#[test]
fn test_add_trims_input() {
    let mut store = ContactStore::open(MockContactRepository::new());
    let contact = store
        .add(ContactDraft::new("  Ann ", " 555 ").with_address("\n1 Main St\n"))
        .unwrap();
    assert_eq!(contact.name, "Ann");
    assert_eq!(contact.phone, "555");
    assert_eq!(contact.address, "1 Main St");
}

#[test]
fn test_add_duplicate_normalized_phone_fails() {
    let repo = MockContactRepository::new();
    let mut store = ContactStore::open(repo.clone());
    let ann = store.add(ContactDraft::new("Ann", "555-0100")).unwrap();
    repo.reset_call_counts();

    let result = store.add(ContactDraft::new("Bob", "5550100"));

    match result {
        Err(ContactBookError::DuplicatePhone { existing_id, .. }) => {
            assert_eq!(existing_id, ann.id.to_string());
        }
        other => panic!("Expected DuplicatePhone, got: {:?}", other),
    }
    assert_eq!(store.len(), 1);
    assert_eq!(repo.get_call_count("save"), 0);
}

#[test]
fn test_add_rejects_invalid_fields() {
    let mut store = ContactStore::open(MockContactRepository::new());

    assert!(matches!(
        store.add(ContactDraft::new("", "123")),
        Err(ContactBookError::Validation(ValidationError::MissingRequiredField(
            RequiredField::Name
        )))
    ));
    assert!(matches!(
        store.add(ContactDraft::new("Ann", "  ")),
        Err(ContactBookError::Validation(ValidationError::MissingRequiredField(
            RequiredField::Phone
        )))
    ));
    assert!(matches!(
        store.add(ContactDraft::new("Ann", "123").with_email("ann.example.com")),
        Err(ContactBookError::Validation(ValidationError::InvalidEmail(_)))
    ));
    assert!(store.is_empty());
}

#[test]
fn test_ids_are_unique() {
    let mut store = ContactStore::open(MockContactRepository::new());
    for i in 0..50 {
        store.add(ContactDraft::new(format!("C{}", i), format!("{}", i))).unwrap();
    }
    let ids: HashSet<&ContactId> = store.all().iter().map(|c| &c.id).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_all_keeps_insertion_order() {
    let mut store = ContactStore::open(MockContactRepository::new());
    for (name, phone) in [("Zed", "3"), ("Amy", "1"), ("Max", "2")] {
        store.add(ContactDraft::new(name, phone)).unwrap();
    }
    let names: Vec<&str> = store.all().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Zed", "Amy", "Max"]);
}

#[test]
fn test_update_replaces_fields_and_keeps_id() {
    let repo = MockContactRepository::new();
    let mut store = ContactStore::open(repo.clone());
    let ann = store.add(ContactDraft::new("Ann", "555-0100")).unwrap();

    let updated = store
        .update(
            ann.id.as_str(),
            ContactDraft::new("Ann Lee", "555-0101").with_address("1 Main St"),
        )
        .unwrap();

    assert_eq!(updated.id, ann.id);
    assert_eq!(updated.name, "Ann Lee");
    assert_eq!(store.get(ann.id.as_str()), Some(&updated));
    assert_eq!(repo.stored(), Some(vec![updated]));
}

#[test]
fn test_update_may_keep_own_phone() {
    let mut store = ContactStore::open(MockContactRepository::new());
    let ann = store.add(ContactDraft::new("Ann", "555-0100")).unwrap();

    let updated = store
        .update(ann.id.as_str(), ContactDraft::new("Ann", "(555) 0100"))
        .unwrap();
    assert_eq!(updated.phone, "(555) 0100");
}

#[test]
fn test_update_to_other_contacts_phone_fails() {
    let mut store = ContactStore::open(MockContactRepository::new());
    let ann = store.add(ContactDraft::new("Ann", "555-0100")).unwrap();
    let bob = store.add(ContactDraft::new("Bob", "555-0199")).unwrap();

    let result = store.update(bob.id.as_str(), ContactDraft::new("Bob", "5550100"));
    assert!(matches!(
        result,
        Err(ContactBookError::DuplicatePhone { ref existing_id, .. }) if *existing_id == ann.id.to_string()
    ));
    assert_eq!(store.get(bob.id.as_str()), Some(&bob));
    assert_phones_unique(&store);
}

#[test]
fn test_update_missing_id_is_not_found() {
    let mut store = ContactStore::open(MockContactRepository::new());
    let result = store.update("nope", ContactDraft::new("Ann", "1"));
    assert!(matches!(result, Err(ContactBookError::NotFound(id)) if id == "nope"));
}

#[test]
fn test_update_invalid_fields_leaves_contact_untouched() {
    let mut store = ContactStore::open(MockContactRepository::new());
    let ann = store.add(ContactDraft::new("Ann", "1")).unwrap();

    assert!(store.update(ann.id.as_str(), ContactDraft::new("", "1")).is_err());
    assert_eq!(store.get(ann.id.as_str()), Some(&ann));
}

#[test]
fn test_remove_then_all_excludes_id() {
    let repo = MockContactRepository::new();
    let mut store = ContactStore::open(repo.clone());
    let ann = store.add(ContactDraft::new("Ann", "1")).unwrap();
    let bob = store.add(ContactDraft::new("Bob", "2")).unwrap();

    let removed = store.remove(ann.id.as_str()).unwrap();

    assert_eq!(removed, ann);
    assert!(store.all().iter().all(|c| c.id != ann.id));
    assert_eq!(repo.stored(), Some(vec![bob]));
}

#[test]
fn test_remove_missing_id_is_not_found() {
    let mut store = ContactStore::open(MockContactRepository::new());
    assert!(matches!(
        store.remove("missing"),
        Err(ContactBookError::NotFound(_))
    ));
}

#[test]
fn test_removed_phone_can_be_reused() {
    let mut store = ContactStore::open(MockContactRepository::new());
    let ann = store.add(ContactDraft::new("Ann", "555-0100")).unwrap();
    store.remove(ann.id.as_str()).unwrap();

    let bob = store.add(ContactDraft::new("Bob", "5550100")).unwrap();
    assert_ne!(bob.id, ann.id);
}

#[test]
fn test_open_first_run_is_missing() {
    let store = ContactStore::open(MockContactRepository::new());
    assert_eq!(store.load_outcome(), &LoadOutcome::Missing);
    assert!(store.is_empty());
    assert_eq!(store.last_save(), None);
}

#[test]
fn test_open_unreadable_storage_starts_empty() {
    let repo = MockContactRepository::with_contacts(vec![stored("1", "Ann", "1")]);
    repo.fail_loads_with("expected value at line 1");

    let store = ContactStore::open(repo);

    assert!(store.is_empty());
    match store.load_outcome() {
        LoadOutcome::Unreadable(reason) => assert!(reason.contains("expected value")),
        other => panic!("Expected Unreadable, got: {:?}", other),
    }
}

#[test]
fn test_open_drops_records_breaking_invariants() {
    let repo = MockContactRepository::with_contacts(vec![
        stored("1", "Ann", "555-0100"),
        stored("2", "", "555-0111"),
        stored("1", "Ann again", "555-0122"),
        stored("3", "Bob", "5550100"),
        stored("4", "Cy", "555-0133"),
    ]);

    let store = ContactStore::open(repo);

    assert_eq!(
        store.load_outcome(),
        &LoadOutcome::Loaded {
            count: 2,
            dropped: 3
        }
    );
    let ids: Vec<&str> = store.all().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "4"]);
}

#[test]
fn test_save_failure_is_reported_but_not_fatal() {
    let repo = MockContactRepository::new();
    repo.set_fail_saves(true);
    let mut store = ContactStore::open(repo.clone());

    let ann = store.add(ContactDraft::new("Ann", "1")).unwrap();

    assert_eq!(store.all(), std::slice::from_ref(&ann));
    let outcome = store.last_save().unwrap();
    assert!(!outcome.is_saved());
    assert!(outcome.warning().unwrap().contains("read-only"));
    assert_eq!(repo.stored(), None);

    repo.set_fail_saves(false);
    store.add(ContactDraft::new("Bob", "2")).unwrap();
    assert_eq!(store.last_save(), Some(&SaveOutcome::Saved));
    assert_eq!(repo.stored().unwrap().len(), 2);
}

#[test]
fn test_reload_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");

    let mut store = ContactStore::open(JsonContactRepository::new(&path));
    assert_eq!(store.load_outcome(), &LoadOutcome::Missing);
    let ann = store
        .add(ContactDraft::new("Ann", "555-0100").with_address("1 Main St\nSpringfield"))
        .unwrap();
    let bob = store.add(ContactDraft::new("Bob", "555-0199")).unwrap();

    let reopened = ContactStore::open(JsonContactRepository::new(&path));
    assert_eq!(
        reopened.load_outcome(),
        &LoadOutcome::Loaded {
            count: 2,
            dropped: 0
        }
    );
    assert_eq!(reopened.all(), &[ann, bob]);
}

#[test]
fn test_corrupt_json_file_starts_empty_and_next_save_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(&path, "[{\"id\": ").unwrap();

    let mut store = ContactStore::open(JsonContactRepository::new(&path));
    assert!(matches!(store.load_outcome(), LoadOutcome::Unreadable(_)));
    assert!(store.is_empty());

    store.add(ContactDraft::new("Ann", "1")).unwrap();
    let reopened = ContactStore::open(JsonContactRepository::new(&path));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_phone_uniqueness_holds_across_mixed_operations() {
    let mut store = ContactStore::open(MockContactRepository::new());
    let phones = ["555-0100", "5550100", "(555) 0101", "555 0101", "555-0102"];
    for (i, phone) in phones.iter().enumerate() {
        let _ = store.add(ContactDraft::new(format!("C{}", i), *phone));
        assert_phones_unique(&store);
    }
    let ids: Vec<String> = store.all().iter().map(|c| c.id.to_string()).collect();
    for id in &ids {
        let _ = store.update(id, ContactDraft::new("X", "555-0102"));
        assert_phones_unique(&store);
    }
}

#[test]
fn test_store_search_delegates_to_query_engine() {
    let mut store = ContactStore::open(MockContactRepository::new());
    store.add(ContactDraft::new("Ann", "555-0100")).unwrap();
    store.add(ContactDraft::new("Bob", "555-0199")).unwrap();

    let all: Vec<&str> = store.search("").map(|c| c.name.as_str()).collect();
    assert_eq!(all, ["Ann", "Bob"]);
    let found: Vec<&str> = store.search("bo").map(|c| c.name.as_str()).collect();
    assert_eq!(found, ["Bob"]);
}
