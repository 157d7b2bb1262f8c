use thiserror::Error;

use crate::error::CurveError;
use crate::input::InputError;

pub mod stage1_load;
pub mod stage2_metrics;
pub mod stage3_average;
pub mod stage4_figures;
pub mod stage5_report;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
