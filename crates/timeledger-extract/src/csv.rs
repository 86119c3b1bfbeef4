//! Delimited persistence for extracted records
//!
//! Writes the extracted record set once, at the end of a scan, as a
//! comma-separated file with an explicit `Summary,Start,End` header and no
//! row-index column. Embedded delimiters get standard CSV quoting.

use crate::error::{ExtractError, Result};
use crate::txt::EventRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Write records to a delimited file
///
/// The header row (`Summary,Start,End`) is always written, so an empty
/// record set still produces a header-only file.
///
/// # Errors
///
/// Returns [`ExtractError::WriteError`] if the file cannot be created and
/// [`ExtractError::InvalidRecordFile`] if a row fails to serialize.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[EventRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ExtractError::write_error(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    // Write the header explicitly so empty record sets still produce one
    writer.write_record(["Summary", "Start", "End"])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| ExtractError::write_error(path, e))?;

    Ok(())
}

/// Read records back from a delimited file written by [`write_records`]
///
/// # Errors
///
/// Returns [`ExtractError::ReadError`] if the file cannot be opened and
/// [`ExtractError::InvalidRecordFile`] if a row does not match the
/// `Summary,Start,End` layout.
#[must_use = "this function returns the records read from disk"]
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<EventRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExtractError::read_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    Ok(records)
}
