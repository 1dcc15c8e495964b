//! Case-insensitive substring search on name and phone.

use crate::domain::normalize_phone;
use crate::models::Contact;

/// Characters a typed phone number may carry besides digits.
const PHONE_PUNCTUATION: &[char] = &[' ', '+', '-', '(', ')', '.'];

/// Whether `query` reads as a phone number: at least one digit and nothing
/// but digits and phone punctuation.
fn is_phone_like(query: &str) -> bool {
    query.chars().any(|c| c.is_ascii_digit())
        && query
            .chars()
            .all(|c| c.is_ascii_digit() || PHONE_PUNCTUATION.contains(&c))
}

/// A prepared search query.
struct Needle {
    lowered: String,
    /// Digits of a phone-like query; empty for any other query.
    digits: String,
}

impl Needle {
    fn new(query: &str) -> Self {
        let lowered = query.trim().to_lowercase();
        let digits = if is_phone_like(&lowered) {
            normalize_phone(&lowered)
        } else {
            String::new()
        };
        Self { lowered, digits }
    }

    fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    fn hits(&self, contact: &Contact) -> bool {
        if self.is_empty() {
            return true;
        }
        if contact.name.to_lowercase().contains(&self.lowered)
            || contact.phone.to_lowercase().contains(&self.lowered)
        {
            return true;
        }
        // "5550100" should find "555-0100"
        !self.digits.is_empty() && normalize_phone(&contact.phone).contains(&self.digits)
    }
}

/// Whether `contact` matches `query`.
pub fn matches(contact: &Contact, query: &str) -> bool {
    Needle::new(query).hits(contact)
}

/// Lazily filter `contacts` down to those whose name or phone contains `query`.
///
/// Matching is case-insensitive and ignores surrounding whitespace in the
/// query. The phone is matched as entered, and a query made only of digits
/// and phone punctuation is also matched with formatting stripped on both
/// sides. An empty query matches everything. Input order is preserved.
///
/// ```
/// use contact_book::domain::ContactId;
/// use contact_book::models::{Contact, ContactDraft};
/// use contact_book::search::search;
///
/// let contacts = vec![
///     Contact::from_draft(ContactId::generate(), ContactDraft::new("Ann", "555-0100")),
///     Contact::from_draft(ContactId::generate(), ContactDraft::new("Bob", "555-0199")),
/// ];
/// let names: Vec<_> = search(&contacts, "5550100").map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Ann"]);
/// assert_eq!(search(&contacts, "").count(), 2);
/// ```
pub fn search<'a>(contacts: &'a [Contact], query: &str) -> impl Iterator<Item = &'a Contact> + 'a {
    let needle = Needle::new(query);
    contacts.iter().filter(move |c| needle.hits(c))
}
