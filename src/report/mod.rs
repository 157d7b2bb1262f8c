use serde::Serialize;

use crate::curve::average::AverageParams;
use crate::pipeline::stage4_figures::FigureParams;

pub mod json;
pub mod text;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub n: usize,
    pub positives: usize,
    pub weight: f64,
    pub auprc: f64,
    /// `None` when the model has only one label class.
    pub auroc: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AverageSummary {
    pub auprc: f64,
    pub curve_area: f64,
    pub discrepancy: f64,
    pub grid_points: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureSummary {
    pub name: String,
    pub title: String,
    pub series: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub git_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryParams {
    pub run_mode: String,
    pub average: AverageParams,
    pub figures: FigureParams,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolInfo,
    pub inputs: Vec<String>,
    pub shared_labels: bool,
    pub params: SummaryParams,
    pub models: Vec<ModelSummary>,
    pub average: AverageSummary,
    pub figures: Vec<FigureSummary>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_percent(v: f64) -> String {
    format!("{:.2}%", 100.0 * v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
