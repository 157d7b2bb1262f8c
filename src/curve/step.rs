use serde::Serialize;

use crate::error::CurveError;

/// Ordering guarantee the caller makes about the recall sequence handed to [`prc_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepOrder {
    /// Recall is non-increasing, as produced by the metrics provider. Reversed in O(N).
    #[default]
    ProviderDescending,
    /// No guarantee. Points are stably sorted by ascending recall; ties keep input order.
    Unsorted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SteppedCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
}

impl SteppedCurve {
    pub fn len(&self) -> usize {
        self.recall.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recall.is_empty()
    }
}

/// Expands a precision-recall curve into its right-continuous ("post") step form.
///
/// Input point `i` lands at index `2i`; index `2i + 1` holds
/// `(precision[i + 1], recall[i])`, so N points become `2N - 1`.
pub fn prc_step(
    precision: &[f64],
    recall: &[f64],
    order: StepOrder,
) -> Result<SteppedCurve, CurveError> {
    if precision.len() != recall.len() {
        return Err(CurveError::mismatch(precision.len(), recall.len()));
    }
    let n = recall.len();
    if n == 0 {
        return Err(CurveError::empty());
    }

    let idx: Vec<usize> = match order {
        StepOrder::ProviderDescending => (0..n).rev().collect(),
        StepOrder::Unsorted => {
            let mut idx: Vec<usize> = (0..n).collect();
            idx.sort_by(|&a, &b| recall[a].total_cmp(&recall[b]));
            idx
        }
    };

    let mut prec_step = Vec::with_capacity(2 * n - 1);
    let mut rec_step = Vec::with_capacity(2 * n - 1);
    for (pos, &i) in idx.iter().enumerate() {
        prec_step.push(precision[i]);
        rec_step.push(recall[i]);
        if let Some(&next) = idx.get(pos + 1) {
            prec_step.push(precision[next]);
            rec_step.push(recall[i]);
        }
    }

    Ok(SteppedCurve {
        precision: prec_step,
        recall: rec_step,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/curve/step.rs"]
mod tests;
