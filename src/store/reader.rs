//! Record Reader
//!
//! Reads the whole record file into memory.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::record::Record;

/// Load every record from `path`, in file order
///
/// Field names come from the file's header row. A missing file is an empty
/// store, not an error. Rows whose column count disagrees with the header
/// surface as a CSV error.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Record file {} not found, treating as empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        records.push(row?);
    }

    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
