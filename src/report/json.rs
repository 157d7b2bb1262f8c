use serde::Serialize;

use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

#[derive(Debug, Serialize)]
struct PipelineStep<'a> {
    tool: &'a str,
    mode: &'static str,
    artifacts: PipelineArtifacts,
    n_models: usize,
    average_auprc: f64,
}

#[derive(Debug, Serialize)]
struct PipelineArtifacts {
    summary: &'static str,
    primary_metrics: &'static str,
    curves: &'static str,
    report: &'static str,
}

/// Manifest read by downstream aggregators when running inside a pipeline.
pub fn render_pipeline_step_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    let step = PipelineStep {
        tool: &data.tool.name,
        mode: "pipeline",
        artifacts: PipelineArtifacts {
            summary: "summary.json",
            primary_metrics: "average_pr.tsv",
            curves: "curves.tsv",
            report: "report.txt",
        },
        n_models: data.models.len(),
        average_auprc: data.average.auprc,
    };
    serde_json::to_string_pretty(&step)
}
