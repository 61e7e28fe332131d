use std::collections::HashMap;

use serde::Serialize;

/// One competency score of one employee on one pillar for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetencyRecord {
    pub employee_id: String,
    pub pillar_code: String,
    pub score: f64,
}

impl CompetencyRecord {
    pub fn new(employee_id: impl Into<String>, pillar_code: impl Into<String>, score: f64) -> Self {
        Self {
            employee_id: employee_id.into(),
            pillar_code: pillar_code.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub employee_id: String,
    pub fullname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pillar {
    pub pillar_code: String,
    pub pillar_label: String,
}

/// Employee id to full name lookup. The first entry for an id wins.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    names: HashMap<String, String>,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the id was already present; the existing name is kept.
    pub fn insert(&mut self, employee: Employee) -> bool {
        if self.names.contains_key(&employee.employee_id) {
            return false;
        }
        self.names.insert(employee.employee_id, employee.fullname);
        true
    }

    pub fn fullname(&self, employee_id: &str) -> Option<&str> {
        self.names.get(employee_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<Employee> for EmployeeDirectory {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut dir = EmployeeDirectory::new();
        for employee in iter {
            dir.insert(employee);
        }
        dir
    }
}

/// Display labels for pillar codes.
#[derive(Debug, Clone, Default)]
pub struct PillarLabels {
    labels: HashMap<String, String>,
}

impl PillarLabels {
    pub fn label_for<'a>(&'a self, pillar_code: &'a str) -> &'a str {
        self.labels
            .get(pillar_code)
            .map(String::as_str)
            .unwrap_or(pillar_code)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<Pillar> for PillarLabels {
    fn from_iter<I: IntoIterator<Item = Pillar>>(iter: I) -> Self {
        let mut labels = HashMap::new();
        for pillar in iter {
            labels.entry(pillar.pillar_code).or_insert(pillar.pillar_label);
        }
        Self { labels }
    }
}
