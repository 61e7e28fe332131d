use std::path::Path;

use tracing::warn;

use crate::input::InputError;
use crate::input::table::read_table;
use crate::model::records::{Employee, EmployeeDirectory};

pub fn parse_employees(path: &Path) -> Result<EmployeeDirectory, InputError> {
    let table = read_table(path)?;
    let id_col = table.require_column("employee_id")?;
    let name_col = table.require_column("fullname")?;

    let mut directory = EmployeeDirectory::new();
    for row in &table.rows {
        let employee_id = row.get(id_col);
        if employee_id.is_empty() {
            warn!(line = row.line_no, "employee row has empty employee_id; skipping");
            continue;
        }
        let inserted = directory.insert(Employee {
            employee_id: employee_id.to_string(),
            fullname: row.get(name_col).to_string(),
        });
        if !inserted {
            warn!(
                line = row.line_no,
                employee_id, "duplicate employee_id; keeping first"
            );
        }
    }

    if directory.is_empty() {
        return Err(InputError::Parse(format!(
            "{} has no employees",
            path.display()
        )));
    }
    Ok(directory)
}
