use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

pub mod gz;
pub mod table;

use table::parse_prediction_table;

/// Scores of one model paired index-wise with binary ground truth.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSet {
    pub name: String,
    pub scores: Vec<f64>,
    pub labels: Vec<bool>,
}

impl PredictionSet {
    pub fn new(name: impl Into<String>, scores: Vec<f64>, labels: Vec<bool>) -> Self {
        Self {
            name: name.into(),
            scores,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModelSet {
    pub sets: Vec<PredictionSet>,
    /// All models were read from one table and share its label column.
    pub shared_labels: bool,
}

impl ModelSet {
    pub fn names(&self) -> Vec<&str> {
        self.sets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Labels of every model back to back.
    pub fn concatenated_labels(&self) -> Vec<bool> {
        self.sets
            .iter()
            .flat_map(|s| s.labels.iter().copied())
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error in {path} line {line}: {msg}")]
    Parse {
        path: String,
        line: usize,
        msg: String,
    },
    #[error("non-binary label {value:?} in {path} line {line}")]
    NonBinaryLabel {
        path: String,
        line: usize,
        value: String,
    },
}

pub fn load_model_set(paths: &[PathBuf], names: &[String]) -> Result<ModelSet, InputError> {
    if paths.is_empty() {
        return Err(InputError::MissingInput(
            "at least one --input table is required".to_string(),
        ));
    }

    let mut sets = Vec::new();
    for path in paths {
        sets.extend(parse_prediction_table(path)?);
    }

    if !names.is_empty() {
        if names.len() != sets.len() {
            return Err(InputError::InvalidInput(format!(
                "{} --name values given for {} models",
                names.len(),
                sets.len()
            )));
        }
        for (set, name) in sets.iter_mut().zip(names) {
            set.name = name.clone();
        }
    }

    let mut seen = BTreeSet::new();
    for set in &sets {
        if !seen.insert(set.name.as_str()) {
            tracing::warn!(model = %set.name, "duplicate model name; series will share a legend label");
        }
    }

    Ok(ModelSet {
        sets,
        shared_labels: paths.len() == 1,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
