use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::curve::average::AverageParams;
use crate::input::ModelSet;
use crate::pipeline::RunError;
use crate::pipeline::stage3_average::Stage3Output;
use crate::pipeline::stage4_figures::{FigureParams, RecordedFigure};
use crate::report::json::{render_pipeline_step_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{
    AverageSummary, FigureSummary, ModelSummary, SummaryData, SummaryParams, ToolInfo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    #[default]
    Standalone,
    Pipeline,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Standalone => "standalone",
            RunMode::Pipeline => "pipeline",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub inputs: &'a [PathBuf],
    pub models: &'a ModelSet,
    pub summaries: &'a [ModelSummary],
    pub average: &'a Stage3Output,
    pub figures: &'a [RecordedFigure],

    pub average_params: AverageParams,
    pub figure_params: FigureParams,
    pub run_mode: RunMode,

    pub tool_name: String,
    pub tool_version: String,
    pub git_hash: Option<String>,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> Result<(), RunError> {
    fs::create_dir_all(out_dir)?;

    write_average_tsv(input.average, &out_dir.join("average_pr.tsv"))?;
    write_curves_tsv(input.figures, &out_dir.join("curves.tsv"))?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(&summary);
    write_text(&out_dir.join("report.txt"), &report)?;

    if input.run_mode == RunMode::Pipeline {
        let json = render_pipeline_step_json(&summary)?;
        write_text(&out_dir.join("pipeline_step.json"), &json)?;
    }

    tracing::info!(out = %out_dir.display(), "stage5: reports written");
    Ok(())
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    SummaryData {
        tool: ToolInfo {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
            git_hash: input.git_hash.clone(),
        },
        inputs: input
            .inputs
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        shared_labels: input.models.shared_labels,
        params: SummaryParams {
            run_mode: input.run_mode.as_str().to_string(),
            average: input.average_params,
            figures: input.figure_params,
        },
        models: input.summaries.to_vec(),
        average: AverageSummary {
            auprc: input.average.auprc,
            curve_area: input.average.curve_area,
            discrepancy: input.average.discrepancy(),
            grid_points: input.average.curve.recall.len(),
        },
        figures: input
            .figures
            .iter()
            .map(|fig| FigureSummary {
                name: fig.kind.name().to_string(),
                title: fig
                    .recorder
                    .axes
                    .as_ref()
                    .map(|a| a.title.clone())
                    .unwrap_or_default(),
                series: fig
                    .recorder
                    .labels()
                    .into_iter()
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect(),
            })
            .collect(),
    }
}

fn write_average_tsv(average: &Stage3Output, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "recall\tprecision")?;
    for (r, p) in average.curve.recall.iter().zip(&average.curve.precision) {
        writeln!(w, "{}\t{}", r, p)?;
    }
    w.flush()
}

fn write_curves_tsv(figures: &[RecordedFigure], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "figure\tseries\tstyle\tx\ty")?;
    for fig in figures {
        fig.recorder.write_tsv(fig.kind.name(), &mut w)?;
    }
    w.flush()
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
