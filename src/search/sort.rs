//! Stable column sorting for display.

use crate::domain::normalize_phone;
use crate::models::Contact;
use std::borrow::Borrow;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// A contact column that can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Phone,
    Email,
    Address,
}

impl SortField {
    pub const ALL: [SortField; 4] = [Self::Name, Self::Phone, Self::Email, Self::Address];

    /// The column value of `contact`.
    pub fn value<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            Self::Name => &contact.name,
            Self::Phone => &contact.phone,
            Self::Email => &contact.email,
            Self::Address => &contact.address,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort field '{}', expected name, phone, email or address", s))
    }
}

/// Digits of a value as an orderable number of arbitrary length.
///
/// Compares by significant-digit count first, then digit by digit.
fn numeric_key(value: &str) -> (usize, String) {
    let digits = normalize_phone(value);
    let significant = digits.trim_start_matches('0').to_string();
    (significant.chars().count(), significant)
}

/// Sort `contacts` in place by `field`.
///
/// When every value in the column contains at least one digit, values are
/// ordered by the number their digits form (so phone columns sort
/// numerically whatever their formatting). Otherwise values are ordered
/// case-insensitively. The sort is stable in both directions: equal keys
/// keep their prior relative order.
pub fn sort<C: Borrow<Contact>>(contacts: &mut [C], field: SortField, descending: bool) {
    let numeric = contacts
        .iter()
        .all(|c| !normalize_phone(field.value(c.borrow())).is_empty());

    match (numeric, descending) {
        (true, false) => contacts.sort_by_cached_key(|c| numeric_key(field.value(c.borrow()))),
        (true, true) => {
            contacts.sort_by_cached_key(|c| Reverse(numeric_key(field.value(c.borrow()))))
        }
        (false, false) => contacts.sort_by_cached_key(|c| field.value(c.borrow()).to_lowercase()),
        (false, true) => {
            contacts.sort_by_cached_key(|c| Reverse(field.value(c.borrow()).to_lowercase()))
        }
    }
}
