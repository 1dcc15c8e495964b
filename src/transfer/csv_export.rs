//! CSV export of a contact collection.

use super::CSV_HEADER;
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::Contact;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `contacts` to a CSV file at `path`, replacing any existing file.
///
/// Returns the number of data rows written. An empty collection produces a
/// file holding only the header.
///
/// # Errors
///
/// Returns `IoFailure` if the destination cannot be created or written.
pub fn export(contacts: &[Contact], path: impl AsRef<Path>) -> ContactBookResult<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ContactBookError::io(path, e))?;
    let written = write_rows(contacts, file, path)?;
    info!("Exported {} contacts to {}", written, path.display());
    Ok(written)
}

/// [`export`] into any writer.
pub fn export_to_writer<W: Write>(contacts: &[Contact], writer: W) -> ContactBookResult<usize> {
    write_rows(contacts, writer, Path::new("<output>"))
}

fn write_rows<W: Write>(contacts: &[Contact], writer: W, origin: &Path) -> ContactBookResult<usize> {
    let fail = |e: csv::Error| ContactBookError::io(origin, e.into());

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(CSV_HEADER).map_err(fail)?;
    for contact in contacts {
        writer
            .write_record([&contact.name, &contact.phone, &contact.email, &contact.address])
            .map_err(fail)?;
    }
    writer.flush().map_err(|e| ContactBookError::io(origin, e))?;

    Ok(contacts.len())
}
