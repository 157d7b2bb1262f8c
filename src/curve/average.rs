//! Weighted averaging of precision-recall curves across prediction sets.
//!
//! Each model's curve is turned into a "next"-kind step interpolant and
//! evaluated on the union of all observed recall values, so every kink of every
//! individual curve survives in the average. Models are weighted by their share
//! of positive labels, since recall is `tp / positives`.

use serde::Serialize;

use crate::curve::interp::{DomainPolicy, NextInterpolant};
use crate::curve::step::{StepOrder, SteppedCurve, prc_step};
use crate::curve::union::union_recall;
use crate::error::CurveError;
use crate::input::PredictionSet;
use crate::metrics::sweep::check_inputs;
use crate::metrics::{MetricsProvider, PrCurve, auc};

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AverageParams {
    pub step_order: StepOrder,
    pub domain: DomainPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AverageCurve {
    pub precision: Vec<f64>,
    /// Union grid, descending.
    pub recall: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct ModelCurve {
    pub curve: PrCurve,
    pub stepped: SteppedCurve,
    pub interpolant: NextInterpolant,
}

pub fn validate_sets(sets: &[PredictionSet]) -> Result<(), CurveError> {
    if sets.is_empty() {
        return Err(CurveError::NoModels);
    }
    for set in sets {
        check_inputs(&set.labels, &set.scores).map_err(|e| e.for_model(&set.name))?;
    }
    Ok(())
}

pub fn positive_weights(sets: &[PredictionSet]) -> Result<Vec<f64>, CurveError> {
    if sets.is_empty() {
        return Err(CurveError::NoModels);
    }
    let positives: Vec<usize> = sets.iter().map(PredictionSet::positives).collect();
    let total: usize = positives.iter().sum();
    if total == 0 {
        return Err(CurveError::UndefinedWeighting {
            n_models: sets.len(),
        });
    }
    Ok(positives
        .iter()
        .map(|&p| p as f64 / total as f64)
        .collect())
}

pub fn model_curve<M: MetricsProvider + ?Sized>(
    metrics: &M,
    set: &PredictionSet,
    params: &AverageParams,
) -> Result<ModelCurve, CurveError> {
    let curve = metrics
        .precision_recall_curve(&set.labels, &set.scores)
        .map_err(|e| e.for_model(&set.name))?;
    let stepped = prc_step(&curve.precision, &curve.recall, params.step_order)
        .map_err(|e| e.for_model(&set.name))?;
    let interpolant = NextInterpolant::new(&stepped.recall, &stepped.precision, params.domain)
        .map_err(|e| e.for_model(&set.name))?;
    Ok(ModelCurve {
        curve,
        stepped,
        interpolant,
    })
}

/// Weighted mean of the per-model precision-recall curves over the union recall grid.
pub fn average_precision_recall<M: MetricsProvider + ?Sized>(
    metrics: &M,
    sets: &[PredictionSet],
    params: &AverageParams,
) -> Result<AverageCurve, CurveError> {
    validate_sets(sets)?;
    let weights = positive_weights(sets)?;

    // Zero-weight models have no positives and contribute nothing.
    let weighted = sets
        .iter()
        .zip(weights)
        .filter(|&(_, weight)| weight > 0.0)
        .map(|(set, weight)| Ok((model_curve(metrics, set, params)?, weight)))
        .collect::<Result<Vec<_>, CurveError>>()?;

    let grid = union_recall(weighted.iter().map(|(c, _)| c.curve.recall.as_slice()));

    let mut precision = vec![0.0f64; grid.len()];
    for (model, weight) in &weighted {
        let values = model.interpolant.eval_many(&grid)?;
        for (acc, v) in precision.iter_mut().zip(values) {
            *acc += weight * v;
        }
    }

    tracing::debug!(
        n_models = sets.len(),
        grid_points = grid.len(),
        "averaged precision-recall curves"
    );

    Ok(AverageCurve {
        precision,
        recall: grid,
    })
}

/// Weighted mean of the per-model auPRC scores. Models without positives weigh zero.
///
/// This is not computed from [`average_precision_recall`]'s output; see
/// [`average_curve_area`] for that. The two agree analytically but are not
/// guaranteed to be bit-identical.
pub fn average_auprc<M: MetricsProvider + ?Sized>(
    metrics: &M,
    sets: &[PredictionSet],
) -> Result<f64, CurveError> {
    validate_sets(sets)?;
    let weights = positive_weights(sets)?;

    let mut total = 0.0f64;
    for (set, &weight) in sets.iter().zip(&weights) {
        if weight == 0.0 {
            continue;
        }
        let ap = metrics
            .average_precision(&set.labels, &set.scores)
            .map_err(|e| e.for_model(&set.name))?;
        total += weight * ap;
    }
    Ok(total)
}

/// Area under the step form of an averaged curve.
pub fn average_curve_area(curve: &AverageCurve) -> Result<f64, CurveError> {
    let stepped = prc_step(
        &curve.precision,
        &curve.recall,
        StepOrder::ProviderDescending,
    )?;
    auc(&stepped.recall, &stepped.precision)
}

#[cfg(test)]
#[path = "../../tests/src_inline/curve/average.rs"]
mod tests;
