//! Loosely keyed import rows.

use crate::error::{ContactBookError, ContactBookResult};
use crate::models::ContactDraft;
use std::collections::HashMap;

/// One data row of an import file, keyed by (lowercased) column name.
///
/// Keys may be missing or blank; conversion into a [`ContactDraft`] decides
/// whether the row is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRow {
    fields: HashMap<String, String>,
}

impl ContactRow {
    /// Pair header names with the values of one record.
    ///
    /// Short records simply lack the trailing keys; surplus values without a
    /// header are ignored.
    pub fn from_pairs<'a, H, V>(headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let fields = headers
            .into_iter()
            .zip(values)
            .map(|(key, value)| (Self::normalize_key(key), value.to_string()))
            .collect();
        Self { fields }
    }

    fn normalize_key(key: &str) -> String {
        key.trim_start_matches('\u{feff}').trim().to_lowercase()
    }

    /// Value of a column, `None` when absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value of a required column, failing when it is absent or blank.
    fn required(&self, column: &str) -> ContactBookResult<String> {
        match self.get(column).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ContactBookError::ParseFailure(format!(
                "row has no value for required column '{}'",
                column
            ))),
        }
    }

    fn optional(&self, column: &str) -> String {
        self.get(column).map(str::trim).unwrap_or_default().to_string()
    }
}

impl TryFrom<ContactRow> for ContactDraft {
    type Error = ContactBookError;

    fn try_from(row: ContactRow) -> ContactBookResult<Self> {
        Ok(ContactDraft::new(row.required("name")?, row.required("phone")?)
            .with_email(row.optional("email"))
            .with_address(row.optional("address")))
    }
}
