use crate::curve::average::positive_weights;
use crate::error::CurveError;
use crate::input::ModelSet;
use crate::metrics::MetricsProvider;
use crate::report::ModelSummary;

pub fn run_stage2(
    metrics: &dyn MetricsProvider,
    models: &ModelSet,
) -> Result<Vec<ModelSummary>, CurveError> {
    let weights = positive_weights(&models.sets)?;

    let mut out = Vec::with_capacity(models.sets.len());
    for (set, &weight) in models.sets.iter().zip(&weights) {
        let auprc = if weight == 0.0 {
            tracing::warn!(model = %set.name, "no positive labels; auPRC set to 0 and weight is 0");
            0.0
        } else {
            metrics
                .average_precision(&set.labels, &set.scores)
                .map_err(|e| e.for_model(&set.name))?
        };
        let auroc = match metrics.roc_auc(&set.labels, &set.scores) {
            Ok(v) => Some(v),
            Err(err @ (CurveError::NoPositives { .. } | CurveError::NoNegatives { .. })) => {
                tracing::warn!(model = %set.name, "auROC undefined: {}", err.for_model(&set.name));
                None
            }
            Err(err) => return Err(err.for_model(&set.name)),
        };
        out.push(ModelSummary {
            name: set.name.clone(),
            n: set.len(),
            positives: set.positives(),
            weight,
            auprc,
            auroc,
        });
    }

    tracing::info!(models = out.len(), "stage2: per-model metrics computed");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_metrics.rs"]
mod tests;
