use std::path::{Path, PathBuf};

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    /// `.csv` and `.csv.gz` are comma separated, everything else is tab separated.
    pub fn for_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(".csv") {
            Delimiter::Comma
        } else {
            Delimiter::Tab
        }
    }

    /// Comma separated tables follow RFC 4180 quoting, so a quoted field may
    /// hold delimiters and line breaks. Tab separated fields are taken verbatim.
    pub fn reader_builder(self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All);
        match self {
            Delimiter::Tab => builder.delimiter(b'\t').quoting(false),
            Delimiter::Comma => builder.delimiter(b','),
        };
        builder
    }
}

#[derive(Debug, Clone)]
pub struct TableRow {
    pub line_no: usize,
    pub fields: Vec<String>,
}

impl TableRow {
    pub fn get(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }

    pub fn require_column(&self, name: &str) -> Result<usize, InputError> {
        self.find_column(name).ok_or_else(|| {
            InputError::InvalidInput(format!(
                "{} has no '{}' column",
                self.path.display(),
                name
            ))
        })
    }
}

pub fn read_table(path: &Path) -> Result<Table, InputError> {
    let delimiter = Delimiter::for_path(path);
    let mut reader = delimiter
        .reader_builder()
        .from_reader(open_maybe_gz(path)?);
    let parse_err = |err: csv::Error| table_error(path, err);

    let columns: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|c| c.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if columns.is_empty() {
        return Err(InputError::Parse(format!("{} is empty", path.display())));
    }
    if columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse(format!(
            "{} header is empty",
            path.display()
        )));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_err)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line_no = record.position().map_or(0, |p| p.line() as usize);
        rows.push(TableRow {
            line_no,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(Table {
        path: path.to_path_buf(),
        columns,
        rows,
    })
}

fn table_error(path: &Path, err: csv::Error) -> InputError {
    match err.position() {
        Some(pos) => InputError::Parse(format!("{} line {}: {}", path.display(), pos.line(), err)),
        None => InputError::Parse(format!("{}: {}", path.display(), err)),
    }
}
