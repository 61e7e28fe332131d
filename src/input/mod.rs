use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

pub mod cache;
pub mod competencies;
pub mod employees;
pub mod pillars;
pub mod reader;
pub mod table;

use competencies::parse_competencies;
use employees::parse_employees;
use pillars::parse_pillars;
use reader::hash_files;

use crate::model::records::{CompetencyRecord, EmployeeDirectory, PillarLabels};

pub const EMPLOYEES_TABLE: &str = "employees";
pub const COMPETENCIES_TABLE: &str = "competencies_yearly";
pub const PILLARS_TABLE: &str = "dim_competency_pillars";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Table files discovered in a dataset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFiles {
    pub employees: PathBuf,
    pub competencies: PathBuf,
    pub pillars: Option<PathBuf>,
}

impl DatasetFiles {
    pub fn fingerprint(&self) -> Result<u64, InputError> {
        let mut paths: Vec<&Path> = vec![&self.employees, &self.competencies];
        if let Some(p) = &self.pillars {
            paths.push(p);
        }
        hash_files(&paths)
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub source_dir: PathBuf,
    pub files: DatasetFiles,
    pub employees: EmployeeDirectory,
    pub records: Vec<CompetencyRecord>,
    pub pillars: PillarLabels,
    pub skipped_missing_score: usize,
}

pub fn discover_tables(input_dir: &Path) -> Result<DatasetFiles, InputError> {
    if !input_dir.is_dir() {
        return Err(InputError::MissingInput(format!(
            "dataset directory {} does not exist",
            input_dir.display()
        )));
    }
    let employees = find_table_path(input_dir, EMPLOYEES_TABLE).ok_or_else(|| {
        InputError::MissingInput(format!("missing {EMPLOYEES_TABLE}.tsv(.gz) or .csv(.gz)"))
    })?;
    let competencies = find_table_path(input_dir, COMPETENCIES_TABLE).ok_or_else(|| {
        InputError::MissingInput(format!(
            "missing {COMPETENCIES_TABLE}.tsv(.gz) or .csv(.gz)"
        ))
    })?;
    let pillars = find_table_path(input_dir, PILLARS_TABLE);
    Ok(DatasetFiles {
        employees,
        competencies,
        pillars,
    })
}

pub fn load_dataset(input_dir: &Path) -> Result<Dataset, InputError> {
    let files = discover_tables(input_dir)?;
    load_dataset_files(input_dir, files)
}

pub fn load_dataset_files(input_dir: &Path, files: DatasetFiles) -> Result<Dataset, InputError> {
    info!(
        employees = %files.employees.display(),
        competencies = %files.competencies.display(),
        pillars = ?files.pillars,
        "discovered dataset tables"
    );

    let employees = parse_employees(&files.employees)?;
    let parsed = parse_competencies(&files.competencies)?;
    if parsed.skipped_missing_score > 0 {
        warn!(
            rows = parsed.skipped_missing_score,
            "competency rows with missing score skipped"
        );
    }
    let pillars = match &files.pillars {
        Some(path) => parse_pillars(path)?,
        None => {
            warn!(
                table = PILLARS_TABLE,
                "pillar table not found; pillar codes are used as labels"
            );
            PillarLabels::default()
        }
    };

    info!(
        employees = employees.len(),
        records = parsed.records.len(),
        pillars = pillars.len(),
        "dataset loaded"
    );

    Ok(Dataset {
        source_dir: input_dir.to_path_buf(),
        files,
        employees,
        records: parsed.records,
        pillars,
        skipped_missing_score: parsed.skipped_missing_score,
    })
}

fn find_table_path(input_dir: &Path, name: &str) -> Option<PathBuf> {
    ["tsv", "tsv.gz", "csv", "csv.gz"]
        .iter()
        .map(|ext| input_dir.join(format!("{name}.{ext}")))
        .find(|path| path.is_file())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
