//! Single-curve classification metrics.
//!
//! Curves follow the threshold-sweep convention: one point per distinct score,
//! precision-recall arrays reported in descending recall with a trailing
//! `(recall = 0, precision = 1)` sentinel.

pub mod sweep;

use crate::error::CurveError;

pub use sweep::{ThresholdSweep, auc, binarized_point, threshold_sweep};

#[derive(Debug, Clone, PartialEq)]
pub struct PrCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    /// Ascending; one shorter than `precision` and `recall`.
    pub thresholds: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    /// Descending; starts at `+inf`.
    pub thresholds: Vec<f64>,
}

pub trait MetricsProvider {
    fn precision_recall_curve(&self, labels: &[bool], scores: &[f64])
    -> Result<PrCurve, CurveError>;

    fn roc_curve(&self, labels: &[bool], scores: &[f64]) -> Result<RocCurve, CurveError>;

    /// Step-wise area under the precision-recall curve.
    fn average_precision(&self, labels: &[bool], scores: &[f64]) -> Result<f64, CurveError> {
        let curve = self.precision_recall_curve(labels, scores)?;
        let mut ap = 0.0;
        for i in 0..curve.recall.len().saturating_sub(1) {
            ap += (curve.recall[i] - curve.recall[i + 1]) * curve.precision[i];
        }
        Ok(ap)
    }

    fn roc_auc(&self, labels: &[bool], scores: &[f64]) -> Result<f64, CurveError> {
        let curve = self.roc_curve(labels, scores)?;
        auc(&curve.fpr, &curve.tpr)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdMetrics;

impl MetricsProvider for ThresholdMetrics {
    fn precision_recall_curve(
        &self,
        labels: &[bool],
        scores: &[f64],
    ) -> Result<PrCurve, CurveError> {
        let sweep = threshold_sweep(labels, scores)?;
        let total_tp = sweep.tps.last().copied().unwrap_or(0.0);
        if total_tp <= 0.0 {
            return Err(CurveError::NoPositives {
                model: crate::error::UNNAMED.to_string(),
            });
        }

        let n = sweep.tps.len();
        let mut precision = Vec::with_capacity(n + 1);
        let mut recall = Vec::with_capacity(n + 1);
        for i in (0..n).rev() {
            let tp = sweep.tps[i];
            precision.push(tp / (tp + sweep.fps[i]));
            recall.push(tp / total_tp);
        }
        precision.push(1.0);
        recall.push(0.0);

        let mut thresholds = sweep.thresholds;
        thresholds.reverse();

        Ok(PrCurve {
            precision,
            recall,
            thresholds,
        })
    }

    fn roc_curve(&self, labels: &[bool], scores: &[f64]) -> Result<RocCurve, CurveError> {
        let sweep = threshold_sweep(labels, scores)?;
        let total_tp = sweep.tps.last().copied().unwrap_or(0.0);
        let total_fp = sweep.fps.last().copied().unwrap_or(0.0);
        if total_tp <= 0.0 {
            return Err(CurveError::NoPositives {
                model: crate::error::UNNAMED.to_string(),
            });
        }
        if total_fp <= 0.0 {
            return Err(CurveError::NoNegatives {
                model: crate::error::UNNAMED.to_string(),
            });
        }

        let kept = drop_collinear(&sweep);

        let mut fpr = Vec::with_capacity(kept.len() + 1);
        let mut tpr = Vec::with_capacity(kept.len() + 1);
        let mut thresholds = Vec::with_capacity(kept.len() + 1);
        fpr.push(0.0);
        tpr.push(0.0);
        thresholds.push(f64::INFINITY);
        for i in kept {
            fpr.push(sweep.fps[i] / total_fp);
            tpr.push(sweep.tps[i] / total_tp);
            thresholds.push(sweep.thresholds[i]);
        }

        Ok(RocCurve {
            fpr,
            tpr,
            thresholds,
        })
    }
}

// Interior points whose second difference vanishes in both counts lie on a
// straight ROC segment and carry no shape.
fn drop_collinear(sweep: &ThresholdSweep) -> Vec<usize> {
    let n = sweep.fps.len();
    if n <= 2 {
        return (0..n).collect();
    }
    let mut kept = Vec::with_capacity(n);
    kept.push(0);
    for i in 1..n - 1 {
        let d_fp = sweep.fps[i + 1] - 2.0 * sweep.fps[i] + sweep.fps[i - 1];
        let d_tp = sweep.tps[i + 1] - 2.0 * sweep.tps[i] + sweep.tps[i - 1];
        if d_fp != 0.0 || d_tp != 0.0 {
            kept.push(i);
        }
    }
    kept.push(n - 1);
    kept
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/mod.rs"]
mod tests;
