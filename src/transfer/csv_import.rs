//! CSV import into the contact store.

use super::row::ContactRow;
use super::ImportReport;
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::ContactDraft;
use crate::store::ContactStore;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Import every usable row of the CSV file at `path` into `store`.
///
/// Rows missing a name or phone are skipped, as are rows whose phone is
/// already taken and rows with an invalid email. The store is saved once
/// at the end.
///
/// # Errors
///
/// - `IoFailure` if the file cannot be opened or read
/// - `ParseFailure` if the header row cannot be decoded
pub fn import(store: &mut ContactStore, path: impl AsRef<Path>) -> ContactBookResult<ImportReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ContactBookError::io(path, e))?;
    let report = import_rows(store, file, path)?;
    info!("Imported {} contacts from {}", report.imported, path.display());
    Ok(report)
}

/// [`import`] from any reader.
pub fn import_from_reader<R: Read>(
    store: &mut ContactStore,
    reader: R,
) -> ContactBookResult<ImportReport> {
    import_rows(store, reader, Path::new("<input>"))
}

fn import_rows<R: Read>(
    store: &mut ContactStore,
    reader: R,
    origin: &Path,
) -> ContactBookResult<ImportReport> {
    let (drafts, malformed) = read_drafts(reader, origin)?;
    let mut report = store.import_drafts(drafts);
    report.skipped_malformed = malformed;
    Ok(report)
}

/// Decode all rows, returning the usable drafts and the count of malformed rows.
fn read_drafts<R: Read>(reader: R, origin: &Path) -> ContactBookResult<(Vec<ContactDraft>, usize)> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| classify(e, origin))?
        .clone();

    let has_column = |wanted: &str| {
        headers
            .iter()
            .any(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(wanted))
    };
    if !has_column("name") || !has_column("phone") {
        warn!(
            "{} has no name/phone header; every row will be skipped",
            origin.display()
        );
    }

    let mut drafts = Vec::new();
    let mut malformed = 0;

    for (index, record) in reader.records().enumerate() {
        let row_number = index + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(classify(e, origin)),
            Err(e) => {
                debug!("Skipping undecodable row {}: {}", row_number, e);
                malformed += 1;
                continue;
            }
        };

        match ContactDraft::try_from(ContactRow::from_pairs(headers.iter(), record.iter())) {
            Ok(draft) => drafts.push(draft),
            Err(e) => {
                debug!("Skipping row {}: {}", row_number, e);
                malformed += 1;
            }
        }
    }

    Ok((drafts, malformed))
}

fn classify(err: csv::Error, origin: &Path) -> ContactBookError {
    if err.is_io_error() {
        ContactBookError::io(origin, err.into())
    } else {
        ContactBookError::ParseFailure(format!("{}: {}", origin.display(), err))
    }
}
