use crate::curve::average::{
    AverageCurve, AverageParams, average_auprc, average_curve_area, average_precision_recall,
};
use crate::error::CurveError;
use crate::input::ModelSet;
use crate::metrics::MetricsProvider;

/// Gap between the weighted auPRC and the integrated area above which a warning is logged.
const AREA_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub curve: AverageCurve,
    pub auprc: f64,
    pub curve_area: f64,
}

impl Stage3Output {
    pub fn discrepancy(&self) -> f64 {
        (self.auprc - self.curve_area).abs()
    }
}

pub fn run_stage3(
    metrics: &dyn MetricsProvider,
    models: &ModelSet,
    params: &AverageParams,
) -> Result<Stage3Output, CurveError> {
    let curve = average_precision_recall(metrics, &models.sets, params)?;
    let auprc = average_auprc(metrics, &models.sets)?;
    let curve_area = average_curve_area(&curve)?;

    let out = Stage3Output {
        curve,
        auprc,
        curve_area,
    };
    if out.discrepancy() > AREA_TOLERANCE {
        tracing::warn!(
            auprc,
            curve_area,
            "weighted auPRC and area under the averaged curve disagree"
        );
    }
    tracing::info!(
        grid_points = out.curve.recall.len(),
        auprc,
        "stage3: average curve built"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_average.rs"]
mod tests;
