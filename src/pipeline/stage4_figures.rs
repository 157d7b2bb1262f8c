use clap::ValueEnum;
use serde::Serialize;

use crate::input::ModelSet;
use crate::metrics::MetricsProvider;
use crate::plot::figures::{
    PrParams, RocParams, TpAtKParams, precision_recall_figure, roc_figure, tp_at_k_figure,
};
use crate::plot::recorder::SeriesRecorder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureSelection {
    Roc,
    Pr,
    TpAtK,
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureKind {
    Roc,
    Pr,
    TpAtK,
}

impl FigureKind {
    pub const ALL: [FigureKind; 3] = [FigureKind::Roc, FigureKind::Pr, FigureKind::TpAtK];

    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Roc => "roc",
            FigureKind::Pr => "pr",
            FigureKind::TpAtK => "tp-at-k",
        }
    }
}

impl FigureSelection {
    pub fn includes(self, kind: FigureKind) -> bool {
        matches!(
            (self, kind),
            (FigureSelection::All, _)
                | (FigureSelection::Roc, FigureKind::Roc)
                | (FigureSelection::Pr, FigureKind::Pr)
                | (FigureSelection::TpAtK, FigureKind::TpAtK)
        )
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FigureParams {
    pub selection: FigureSelection,
    pub roc: RocParams,
    pub pr: PrParams,
    pub tp_at_k: TpAtKParams,
}

#[derive(Debug, Clone)]
pub struct RecordedFigure {
    pub kind: FigureKind,
    pub recorder: SeriesRecorder,
}

/// Draws every selected figure. A figure that cannot be drawn is skipped with a warning.
pub fn run_stage4(
    metrics: &dyn MetricsProvider,
    models: &ModelSet,
    params: &FigureParams,
) -> Vec<RecordedFigure> {
    let mut out = Vec::new();
    for kind in FigureKind::ALL {
        if !params.selection.includes(kind) {
            continue;
        }
        let mut recorder = SeriesRecorder::default();
        let drawn = match kind {
            FigureKind::Roc => roc_figure(&mut recorder, metrics, models, &params.roc),
            FigureKind::Pr => precision_recall_figure(&mut recorder, metrics, models, &params.pr),
            FigureKind::TpAtK => tp_at_k_figure(&mut recorder, models, &params.tp_at_k),
        };
        match drawn {
            Ok(()) => out.push(RecordedFigure { kind, recorder }),
            Err(err) => tracing::warn!(figure = kind.name(), "figure skipped: {err}"),
        }
    }
    tracing::info!(figures = out.len(), "stage4: figures recorded");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_figures.rs"]
mod tests;
