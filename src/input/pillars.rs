use std::path::Path;

use crate::input::InputError;
use crate::input::table::read_table;
use crate::model::records::{Pillar, PillarLabels};

pub fn parse_pillars(path: &Path) -> Result<PillarLabels, InputError> {
    let table = read_table(path)?;
    let code_col = table.require_column("pillar_code")?;
    let label_col = table.require_column("pillar_label")?;

    Ok(table
        .rows
        .iter()
        .filter(|row| !row.get(code_col).is_empty())
        .map(|row| Pillar {
            pillar_code: row.get(code_col).to_string(),
            pillar_label: row.get(label_col).to_string(),
        })
        .collect())
}
