//! Built-in employees merged into the store at startup

use crate::record::Record;

/// The three employees every fresh store starts with
pub fn default_employees() -> Vec<Record> {
    vec![
        employee(
            "1",
            "Ruchi Singh",
            "123-456-7890",
            "ruchi.singh@example.com",
            "18",
            "02/10/2004",
            "10",
            "10/10/2010",
        ),
        employee(
            "2",
            "Amity",
            "9958125355",
            "amity@example.com",
            "20",
            "10/12/2004",
            "100",
            "10/10/2004",
        ),
        employee(
            "3",
            "Kokur",
            "1234567890",
            "kokur@example.com",
            "12",
            "3/03/2008",
            "100",
            "10/10/2010",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    phone: &str,
    email: &str,
    age: &str,
    dob: &str,
    salary: &str,
    joining_date: &str,
) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        age: age.to_string(),
        dob: dob.to_string(),
        salary: salary.to_string(),
        joining_date: joining_date.to_string(),
    }
}
