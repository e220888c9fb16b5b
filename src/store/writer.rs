//! Record Writer
//!
//! Writes rows to the record file, either appending to an existing file in
//! its own column order or starting a fresh one with a header row.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::record::{check_headers, require_id_column, Record};

/// Writes records as CSV rows in a fixed column order
pub struct RecordWriter {
    /// CSV writer over the open file (headers handled manually)
    writer: csv::Writer<File>,

    /// Column order for every row
    headers: Vec<String>,

    /// Number of rows written so far
    rows_written: usize,
}

impl RecordWriter {
    /// Open `path` for writing
    ///
    /// A missing or zero-length file gets the header row first (parent
    /// directories are created as needed). A file that already has a header
    /// row is appended to in that row's column order, so `headers` only
    /// decides the layout of new files.
    pub fn open<S: AsRef<str>>(path: &Path, headers: &[S]) -> Result<Self> {
        check_headers(headers)?;

        let fresh = match fs::metadata(path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                true
            }
            Err(e) => return Err(e.into()),
        };

        let headers = if fresh {
            tracing::debug!("Creating {} with a header row", path.display());
            headers.iter().map(|h| h.as_ref().to_string()).collect()
        } else {
            tracing::debug!("Appending to {}", path.display());
            existing_headers(path)?
        };

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if fresh {
            writer.write_record(&headers)?;
        }

        Ok(Self {
            writer,
            headers,
            rows_written: 0,
        })
    }

    /// Write one record as a row, fields in header order
    ///
    /// Columns the record doesn't know about are left empty.
    pub fn write(&mut self, record: &Record) -> Result<()> {
        let row = self
            .headers
            .iter()
            .map(|h| record.get(h).unwrap_or_default());
        self.writer.write_record(row)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of rows written through this writer
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows to disk and close the file
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }
}

/// Column order of an existing file's header row
fn existing_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    require_id_column(&headers)?;
    Ok(headers)
}
