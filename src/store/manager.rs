//! Record Store
//!
//! Merges candidate records into the file, deduplicating by id.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::id;
use crate::record::{check_headers, Record};

use super::{load, InsertOutcome, RecordWriter, SkippedRecord};

/// Merge `candidates` into the record file at `path`
///
/// 1. Load existing rows and collect their ids
/// 2. Walk candidates in order; an id already seen (on disk or earlier in
///    this batch) is skipped, anything else is accepted
/// 3. Nothing accepted → return without touching the file
/// 4. Otherwise append accepted rows (or start the file with `headers`)
///
/// `headers` must name known fields and include `id`. Appends follow the
/// file's own header row; only an empty or missing file takes `headers`.
/// A failed write may leave a partial row behind; there is no rollback.
pub fn insert<S: AsRef<str>>(
    path: &Path,
    candidates: &[Record],
    headers: &[S],
) -> Result<InsertOutcome> {
    check_headers(headers)?;

    let existing = load(path)?;
    let mut ids: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();

    let mut accepted = Vec::new();
    let mut skipped = Vec::new();
    for candidate in candidates {
        if !ids.insert(candidate.id.as_str()) {
            tracing::info!(
                "Skipping duplicate employee with ID {} name: {}",
                candidate.id,
                candidate.name
            );
            skipped.push(SkippedRecord {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
            });
            continue;
        }
        accepted.push(candidate);
    }

    if accepted.is_empty() {
        tracing::info!("No new employees to add");
        return Ok(InsertOutcome { accepted: 0, skipped });
    }

    let mut writer = RecordWriter::open(path, headers)?;
    for record in &accepted {
        writer.write(record)?;
    }
    let written = writer.finish()?;

    tracing::info!("Added {} new employees to {}", written, path.display());
    Ok(InsertOutcome {
        accepted: written,
        skipped,
    })
}

/// A record file bound to its path and column order
///
/// Holds no records: every call goes back to the file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Path of the record file
    path: PathBuf,

    /// Column order used when writing
    headers: Vec<String>,
}

impl RecordStore {
    /// Create a store over `path` with the given column order
    pub fn new(path: impl Into<PathBuf>, headers: Vec<String>) -> Self {
        Self {
            path: path.into(),
            headers,
        }
    }

    /// Create a store from a validated config
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.data_file.clone(), config.headers.clone()))
    }

    /// Load every record, in file order
    pub fn load(&self) -> Result<Vec<Record>> {
        load(&self.path)
    }

    /// Merge candidates into the file (see [`insert`])
    pub fn insert(&self, candidates: &[Record]) -> Result<InsertOutcome> {
        insert(&self.path, candidates, &self.headers)
    }

    /// Next free id: one past the largest id currently on disk
    pub fn next_id(&self) -> Result<String> {
        id::next_id(&self.load()?)
    }

    /// Get the record file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}
