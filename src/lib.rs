//! # emprec
//!
//! A command-line employee record manager over a single flat CSV file:
//! - Load every record, in file order
//! - Merge new records, skipping any whose id is already taken
//! - Append accepted records (or create the file with a header row)
//! - Interactive menu shell with table output
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interactive Shell                         │
//! │            (menu, prompts, id generation, tables)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ load / insert
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Record Store                             │
//! │              (read → dedupe by id → append)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ employees.csv │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod id;
pub mod store;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EmprecError, Result};
pub use config::Config;
pub use record::{Record, HEADERS};
pub use store::{InsertOutcome, RecordStore, SkippedRecord};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of emprec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
