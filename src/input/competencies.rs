use std::path::Path;

use crate::input::InputError;
use crate::input::table::read_table;
use crate::model::records::CompetencyRecord;

#[derive(Debug, Clone, Default)]
pub struct ParsedCompetencies {
    pub records: Vec<CompetencyRecord>,
    /// Rows with a blank or NaN score, left out the way a mean skips missing values.
    pub skipped_missing_score: usize,
}

pub fn parse_competencies(path: &Path) -> Result<ParsedCompetencies, InputError> {
    let table = read_table(path)?;
    let id_col = table.require_column("employee_id")?;
    let pillar_col = table.require_column("pillar_code")?;
    let score_col = table.require_column("score")?;

    let mut out = ParsedCompetencies::default();
    for row in &table.rows {
        let employee_id = row.get(id_col);
        let pillar_code = row.get(pillar_col);
        if employee_id.is_empty() || pillar_code.is_empty() {
            return Err(InputError::Parse(format!(
                "{} line {}: missing employee_id or pillar_code",
                path.display(),
                row.line_no
            )));
        }
        let raw = row.get(score_col);
        let score = match parse_score(raw) {
            Ok(Some(score)) => score,
            Ok(None) => {
                out.skipped_missing_score += 1;
                continue;
            }
            Err(()) => {
                return Err(InputError::Parse(format!(
                    "{} line {}: invalid score '{}'",
                    path.display(),
                    row.line_no,
                    raw
                )));
            }
        };
        out.records
            .push(CompetencyRecord::new(employee_id, pillar_code, score));
    }

    Ok(out)
}

fn parse_score(raw: &str) -> Result<Option<f64>, ()> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") || raw.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    let value: f64 = raw.parse().map_err(|_| ())?;
    if value.is_finite() { Ok(Some(value)) } else { Err(()) }
}
