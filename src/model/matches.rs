use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub employee_id: String,
    pub fullname: String,
    /// Mean absolute deviation from the benchmark over the shared pillars.
    pub gap: f64,
    /// `1 - gap`. Not clamped; negative when the mean deviation exceeds 1.
    pub match_rate: f64,
}

/// What to do with a scored employee that has no entry in the employee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEmployeePolicy {
    /// Leave the employee out of the ranking (inner join on employee id).
    #[default]
    Drop,
    /// Fail the scoring call.
    Error,
}
