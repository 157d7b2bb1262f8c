use crate::error::CurveError;
use crate::metrics::auc;
use crate::metrics::sweep::check_inputs;

/// Running count of true positives among the top-`k` scored items.
#[derive(Debug, Clone, PartialEq)]
pub struct TpAtK {
    /// 0-based rank.
    pub k: Vec<f64>,
    pub n_true: Vec<f64>,
}

pub fn tp_at_k(labels: &[bool], scores: &[f64]) -> Result<TpAtK, CurveError> {
    check_inputs(labels, scores)?;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut k = Vec::with_capacity(order.len());
    let mut n_true = Vec::with_capacity(order.len());
    let mut running = 0usize;
    for (rank, &idx) in order.iter().enumerate() {
        if labels[idx] {
            running += 1;
        }
        k.push(rank as f64);
        n_true.push(running as f64);
    }
    Ok(TpAtK { k, n_true })
}

/// Area under `n_true / positives_total` against `k / n_items`.
pub fn tp_at_k_area(
    table: &TpAtK,
    n_items: usize,
    positives_total: usize,
) -> Result<f64, CurveError> {
    if positives_total == 0 {
        return Err(CurveError::NoPositives {
            model: crate::error::UNNAMED.to_string(),
        });
    }
    if n_items == 0 {
        return Err(CurveError::empty());
    }
    let x: Vec<f64> = table.k.iter().map(|k| k / n_items as f64).collect();
    let y: Vec<f64> = table
        .n_true
        .iter()
        .map(|t| t / positives_total as f64)
        .collect();
    auc(&x, &y)
}
