use std::path::PathBuf;

use crate::curve::average::validate_sets;
use crate::input::{ModelSet, load_model_set};
use crate::pipeline::RunError;

#[derive(Debug, Clone)]
pub struct Stage1Params<'a> {
    pub inputs: &'a [PathBuf],
    pub names: &'a [String],
}

pub fn run_stage1(params: &Stage1Params<'_>) -> Result<ModelSet, RunError> {
    let models = load_model_set(params.inputs, params.names)?;
    validate_sets(&models.sets)?;

    let n_items: usize = models.sets.iter().map(|s| s.len()).sum();
    tracing::info!(
        models = models.sets.len(),
        items = n_items,
        shared_labels = models.shared_labels,
        "stage1: prediction sets loaded"
    );
    tracing::debug!(names = ?models.names(), "stage1: model names");
    Ok(models)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
