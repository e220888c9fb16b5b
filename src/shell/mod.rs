//! Interactive Shell
//!
//! Menu-driven front end over the record store. Reads choices and field
//! values line by line, prints results and tables.
//!
//! Input and output are generic so the shell can be driven from stdin/stdout
//! or from in-memory buffers.

mod seed;
mod table;

pub use seed::default_employees;
pub use table::render;

use std::io::{BufRead, Write};

use crate::error::{EmprecError, Result};
use crate::record::Record;
use crate::store::{InsertOutcome, RecordStore};

/// Menu shell bound to a record store
pub struct Shell<R, W> {
    /// Backing store (re-read on every action)
    store: RecordStore,

    /// Line source for menu choices and field values
    input: R,

    /// Where prompts, notices and tables go
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a new shell
    pub fn new(store: RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let choice = match self.display_menu()? {
                Some(choice) => choice,
                None => {
                    tracing::debug!("Input closed at menu");
                    writeln!(self.output, "\nExiting...")?;
                    return Ok(());
                }
            };

            match choice.as_str() {
                "1" => match self.add_new_employee() {
                    Ok(_) => {}
                    Err(EmprecError::InputClosed(field)) => {
                        tracing::debug!("Input closed while reading {}", field);
                        writeln!(self.output, "\nExiting...")?;
                        return Ok(());
                    }
                    Err(e) => return Err(e),
                },
                "2" => self.view_all_employees()?,
                "3" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please select a valid option.")?,
            }
        }
    }

    /// Merge `records` into the store and print what happened
    pub fn seed(&mut self, records: &[Record]) -> Result<InsertOutcome> {
        let outcome = self.store.insert(records)?;
        self.report(&outcome)?;
        Ok(outcome)
    }

    /// Prompt for a new employee, assign the next id and store it
    pub fn add_new_employee(&mut self) -> Result<Record> {
        writeln!(self.output, "\nAdd New Employee")?;

        let mut record = Record {
            id: self.store.next_id()?,
            ..Record::default()
        };

        let fields: Vec<String> = self
            .store
            .headers()
            .iter()
            .filter(|h| h.as_str() != "id")
            .cloned()
            .collect();
        for field in &fields {
            let value = self
                .prompt(&format!("Enter Employee {}: ", field_label(field)))?
                .ok_or_else(|| EmprecError::InputClosed(field.clone()))?;
            record.set(field, value)?;
        }

        let outcome = self.store.insert(std::slice::from_ref(&record))?;
        self.report(&outcome)?;
        if !outcome.is_noop() {
            writeln!(
                self.output,
                "Employee {} added successfully with ID {}.",
                record.name, record.id
            )?;
        }
        Ok(record)
    }

    /// Print every stored employee as a table
    pub fn view_all_employees(&mut self) -> Result<()> {
        writeln!(self.output, "\nAll Employees")?;

        let records = self.store.load()?;
        if records.is_empty() {
            writeln!(self.output, "No employees found.")?;
            return Ok(());
        }

        let headers = self.store.headers();
        let rows: Vec<Vec<&str>> = records
            .iter()
            .map(|r| headers.iter().map(|h| r.get(h).unwrap_or_default()).collect())
            .collect();
        write!(self.output, "{}", render(headers, &rows))?;
        Ok(())
    }

    /// Get the backing store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Print the menu and read a choice; `None` once input is exhausted
    fn display_menu(&mut self) -> Result<Option<String>> {
        writeln!(
            self.output,
            "\nEmployee Management System -- Version {}",
            crate::VERSION
        )?;
        writeln!(self.output, "1. Add New Employee")?;
        writeln!(self.output, "2. View All Employees")?;
        writeln!(self.output, "3. Exit")?;
        self.prompt("Enter your choice: ")
    }

    /// Print a prompt and read one line, without its line ending
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print skip notices and the accepted count
    fn report(&mut self, outcome: &InsertOutcome) -> Result<()> {
        for skipped in &outcome.skipped {
            writeln!(
                self.output,
                "Skipping duplicate employee with ID {} name: {}",
                skipped.id, skipped.name
            )?;
        }
        if outcome.is_noop() {
            writeln!(self.output, "No new employees to add.")?;
        } else {
            writeln!(self.output, "Added {} new employees.", outcome.accepted)?;
        }
        Ok(())
    }
}

/// Prompt label for a field
fn field_label(field: &str) -> &str {
    match field {
        "name" => "Name",
        "phone" => "Phone",
        "email" => "Email",
        "age" => "Age",
        "dob" => "Date of Birth (dd/mm/yyyy)",
        "salary" => "Salary",
        "joining_date" => "Joining Date (dd/mm/yyyy)",
        other => other,
    }
}
