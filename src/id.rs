//! Identifier generation
//!
//! New ids are one past the largest existing id, read as an integer.

use crate::error::{EmprecError, Result};
use crate::record::Record;

/// Produce the id for a new record
///
/// Returns `"1"` for an empty set. Any id that does not parse as an integer
/// fails the whole call with [`EmprecError::InvalidId`].
pub fn next_id(records: &[Record]) -> Result<String> {
    let mut max: Option<i64> = None;
    for record in records {
        let value = parse_id(&record.id)?;
        max = Some(max.map_or(value, |m| m.max(value)));
    }

    match max {
        None => Ok("1".to_string()),
        Some(m) => m
            .checked_add(1)
            .map(|next| next.to_string())
            .ok_or_else(|| EmprecError::InvalidId {
                id: m.to_string(),
            }),
    }
}

fn parse_id(id: &str) -> Result<i64> {
    id.trim().parse().map_err(|_| EmprecError::InvalidId {
        id: id.to_string(),
    })
}
