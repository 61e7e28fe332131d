use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

/// Running arithmetic mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn value(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Mean benchmark score per pillar, ordered by pillar code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BenchmarkProfile {
    scores: BTreeMap<String, f64>,
}

impl BenchmarkProfile {
    pub fn from_scores(scores: BTreeMap<String, f64>) -> Self {
        Self { scores }
    }

    pub fn get(&self, pillar_code: &str) -> Option<f64> {
        self.scores.get(pillar_code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Benchmark employee ids in the order they were given, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BenchmarkIds {
    ids: Vec<String>,
}

impl BenchmarkIds {
    /// Parses a comma separated id list. Tokens are trimmed and empty ones dropped.
    pub fn parse(raw: &str) -> Self {
        raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn lookup(&self) -> HashSet<&str> {
        self.ids.iter().map(String::as_str).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for BenchmarkIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut ids: Vec<String> = Vec::new();
        for id in iter {
            let id = id.into();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl std::fmt::Display for BenchmarkIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ids.join(", "))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
