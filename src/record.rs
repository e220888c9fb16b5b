//! Employee record definitions
//!
//! A record is a fixed set of string fields. Nothing here is parsed or
//! validated: `age` and `salary` stay text, dates stay whatever was typed.

use serde::Deserialize;

use crate::error::{EmprecError, Result};

/// Column order of the record file header
pub const HEADERS: [&str; 8] = [
    "id",
    "name",
    "phone",
    "email",
    "age",
    "dob",
    "salary",
    "joining_date",
];

/// A single employee row
///
/// Columns missing from the file header deserialize as empty strings;
/// columns the record doesn't know about are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Unique key (compared as a string)
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub age: String,
    pub dob: String,
    pub salary: String,
    pub joining_date: String,
}

impl Record {
    /// Create a record with the given id and name, other fields empty
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Look up a field by its header name
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "id" => &self.id,
            "name" => &self.name,
            "phone" => &self.phone,
            "email" => &self.email,
            "age" => &self.age,
            "dob" => &self.dob,
            "salary" => &self.salary,
            "joining_date" => &self.joining_date,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Set a field by its header name
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let slot = match field {
            "id" => &mut self.id,
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            "age" => &mut self.age,
            "dob" => &mut self.dob,
            "salary" => &mut self.salary,
            "joining_date" => &mut self.joining_date,
            _ => return Err(EmprecError::UnknownField(field.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Builder-style variant of [`Record::set`]
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }
}

/// Check that every header names a known record field and that `id` is
/// among them
pub fn check_headers<S: AsRef<str>>(headers: &[S]) -> Result<()> {
    for header in headers {
        let header = header.as_ref();
        if !HEADERS.contains(&header) {
            return Err(EmprecError::UnknownField(header.to_string()));
        }
    }
    require_id_column(headers)
}

/// Check that a header row carries the `id` key column
pub fn require_id_column<S: AsRef<str>>(headers: &[S]) -> Result<()> {
    if headers.iter().any(|h| h.as_ref() == "id") {
        Ok(())
    } else {
        Err(EmprecError::MissingIdColumn)
    }
}
