use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::curve::average::{AverageParams, average_auprc, average_precision_recall};
use crate::curve::tp_at_k::{tp_at_k, tp_at_k_area};
use crate::error::CurveError;
use crate::input::ModelSet;
use crate::metrics::{MetricsProvider, binarized_point};
use crate::plot::{AxesSpec, CurveStyle, LegendPos, Series, SeriesStyle, Surface, legend_label};

pub const BASELINE_SEED: u64 = 42;
pub const RANDOM_SHUFFLE: &str = "random shuffle";
pub const RANDOM_UNIFORM: &str = "random uniform";
pub const AVERAGE: &str = "average";

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RocParams {
    pub style: CurveStyle,
    pub legend: LegendPos,
    pub random_shuffle: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PrParams {
    pub style: CurveStyle,
    pub legend: LegendPos,
    pub random_shuffle: bool,
    pub average: bool,
    pub binary_as_point: bool,
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub average_params: AverageParams,
}

impl Default for PrParams {
    fn default() -> Self {
        Self {
            style: CurveStyle::default(),
            legend: LegendPos::Inside,
            random_shuffle: true,
            average: false,
            binary_as_point: true,
            xlim: (-0.05, 1.05),
            ylim: (-0.05, 1.05),
            average_params: AverageParams::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TpAtKParams {
    pub style: CurveStyle,
    pub legend: LegendPos,
    pub random_uniform: bool,
}

/// Labels resampled with replacement and used as scores.
pub fn random_shuffle_scores(labels: &[bool], seed: u64) -> Vec<f64> {
    if labels.is_empty() {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..labels.len())
        .map(|_| {
            if labels[rng.gen_range(0..labels.len())] {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

pub fn random_uniform_scores(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.0..1.0)).collect()
}

pub fn roc_figure(
    surface: &mut dyn Surface,
    metrics: &dyn MetricsProvider,
    models: &ModelSet,
    params: &RocParams,
) -> Result<(), CurveError> {
    for set in &models.sets {
        draw_roc_series(surface, metrics, &set.name, &set.labels, &set.scores, params)
            .map_err(|e| e.for_model(&set.name))?;
    }

    if params.random_shuffle {
        let labels = models.concatenated_labels();
        let scores = random_shuffle_scores(&labels, BASELINE_SEED);
        draw_roc_series(surface, metrics, RANDOM_SHUFFLE, &labels, &scores, params)
            .map_err(|e| e.for_model(RANDOM_SHUFFLE))?;
    }

    surface.draw(Series {
        label: String::new(),
        style: SeriesStyle::Reference,
        x: vec![0.0, 1.0],
        y: vec![0.0, 1.0],
    });
    surface.set_axes(AxesSpec {
        title: "Receiver Operating Characteristic".to_string(),
        x_label: "False Positive Rate FP/TN+FP".to_string(),
        y_label: "True Positive Rate TP/TP+FP".to_string(),
        xlim: None,
        ylim: None,
        legend: params.legend,
    });
    Ok(())
}

fn draw_roc_series(
    surface: &mut dyn Surface,
    metrics: &dyn MetricsProvider,
    name: &str,
    labels: &[bool],
    scores: &[f64],
    params: &RocParams,
) -> Result<(), CurveError> {
    let roc = metrics.roc_curve(labels, scores)?;
    let area = metrics.roc_auc(labels, scores)?;
    surface.draw(Series {
        label: legend_label(name, "auROC", area, params.legend),
        style: params.style.series_style(),
        x: roc.fpr,
        y: roc.tpr,
    });
    Ok(())
}

pub fn precision_recall_figure(
    surface: &mut dyn Surface,
    metrics: &dyn MetricsProvider,
    models: &ModelSet,
    params: &PrParams,
) -> Result<(), CurveError> {
    for set in &models.sets {
        if set.positives() == 0 {
            tracing::warn!(model = %set.name, "no positive labels; precision-recall series skipped");
            continue;
        }
        draw_pr_series(surface, metrics, &set.name, &set.labels, &set.scores, params)
            .map_err(|e| e.for_model(&set.name))?;
    }

    if params.random_shuffle {
        let labels = models.concatenated_labels();
        let scores = random_shuffle_scores(&labels, BASELINE_SEED);
        draw_pr_series(surface, metrics, RANDOM_SHUFFLE, &labels, &scores, params)
            .map_err(|e| e.for_model(RANDOM_SHUFFLE))?;
    }

    if params.average {
        let avg = average_precision_recall(metrics, &models.sets, &params.average_params)?;
        let area = average_auprc(metrics, &models.sets)?;
        surface.draw(Series {
            label: legend_label(AVERAGE, "auc", area, params.legend),
            style: params.style.series_style(),
            x: avg.recall,
            y: avg.precision,
        });
    }

    surface.set_axes(AxesSpec {
        title: "Precision vs. Recall".to_string(),
        x_label: "recall TP/(TP+FN)".to_string(),
        y_label: "precision TP/(TP+FP)".to_string(),
        xlim: Some(params.xlim),
        ylim: Some(params.ylim),
        legend: params.legend,
    });
    Ok(())
}

fn draw_pr_series(
    surface: &mut dyn Surface,
    metrics: &dyn MetricsProvider,
    name: &str,
    labels: &[bool],
    scores: &[f64],
    params: &PrParams,
) -> Result<(), CurveError> {
    let area = metrics.average_precision(labels, scores)?;
    let label = legend_label(name, "auc", area, params.legend);

    if params.binary_as_point
        && let Some((recall, precision)) = binarized_point(labels, scores)?
    {
        surface.draw(Series {
            label,
            style: SeriesStyle::Marker,
            x: vec![recall],
            y: vec![precision],
        });
        return Ok(());
    }

    let curve = metrics.precision_recall_curve(labels, scores)?;
    surface.draw(Series {
        label,
        style: params.style.series_style(),
        x: curve.recall,
        y: curve.precision,
    });
    Ok(())
}

pub fn tp_at_k_figure(
    surface: &mut dyn Surface,
    models: &ModelSet,
    params: &TpAtKParams,
) -> Result<(), CurveError> {
    let last = models.sets.last().ok_or(CurveError::NoModels)?;
    // A single shared label column normalises every curve by the same total.
    let shared_total = if models.shared_labels {
        Some(last.positives())
    } else {
        None
    };

    for set in &models.sets {
        let total = shared_total.unwrap_or_else(|| set.positives());
        draw_tp_at_k_series(surface, &set.name, &set.labels, &set.scores, total, params)
            .map_err(|e| e.for_model(&set.name))?;
    }

    let reference_total = shared_total.unwrap_or_else(|| last.positives());
    if params.random_uniform {
        let scores = random_uniform_scores(last.labels.len(), BASELINE_SEED);
        draw_tp_at_k_series(
            surface,
            RANDOM_UNIFORM,
            &last.labels,
            &scores,
            reference_total,
            params,
        )
        .map_err(|e| e.for_model(RANDOM_UNIFORM))?;
    }

    surface.draw(Series {
        label: String::new(),
        style: SeriesStyle::Reference,
        x: vec![0.0, last.labels.len() as f64],
        y: vec![0.0, reference_total as f64],
    });
    surface.set_axes(AxesSpec {
        title: "True Positives at k".to_string(),
        x_label: "k (rank of score)".to_string(),
        y_label: "number of true positives".to_string(),
        xlim: None,
        ylim: None,
        legend: params.legend,
    });
    Ok(())
}

fn draw_tp_at_k_series(
    surface: &mut dyn Surface,
    name: &str,
    labels: &[bool],
    scores: &[f64],
    positives_total: usize,
    params: &TpAtKParams,
) -> Result<(), CurveError> {
    let table = tp_at_k(labels, scores)?;
    let area = tp_at_k_area(&table, labels.len(), positives_total)?;
    surface.draw(Series {
        label: legend_label(name, "auc", area, params.legend),
        style: params.style.series_style(),
        x: table.k,
        y: table.n_true,
    });
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/plot/figures.rs"]
mod tests;
