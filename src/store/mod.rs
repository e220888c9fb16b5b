//! Record Store Module
//!
//! Load/merge/persist logic over the flat record file.
//!
//! ## Responsibilities
//! - Read every row of the file into memory, in file order
//! - Merge candidate records, skipping ids already present
//! - Append accepted rows (or create the file with a header row)
//!
//! The store keeps no state between calls: every operation re-reads the
//! file from scratch and releases it before returning.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ id,name,phone,email,age,dob,salary,joining_date          │  header
//! ├──────────────────────────────────────────────────────────┤
//! │ 1,Ruchi Singh,123-456-7890,ruchi@example.com,18,...      │  row
//! │ 2,Amity,9958125355,amity@example.com,20,...              │  row
//! │ ...                                                      │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod reader;
mod writer;
mod manager;

pub use reader::load;
pub use writer::RecordWriter;
pub use manager::{insert, RecordStore};

/// A candidate that was not written because its id was already taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: String,
    pub name: String,
}

/// Result of an insert (merge) operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Number of rows written to the file
    pub accepted: usize,

    /// Duplicates, in candidate order
    pub skipped: Vec<SkippedRecord>,
}

impl InsertOutcome {
    /// True when nothing was written (the file was left untouched)
    pub fn is_noop(&self) -> bool {
        self.accepted == 0
    }
}
