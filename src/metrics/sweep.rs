use crate::error::CurveError;

/// Cumulative counts at every distinct score, highest threshold first.
#[derive(Debug, Clone, Default)]
pub struct ThresholdSweep {
    pub fps: Vec<f64>,
    pub tps: Vec<f64>,
    pub thresholds: Vec<f64>,
}

pub fn check_inputs(labels: &[bool], scores: &[f64]) -> Result<(), CurveError> {
    if scores.is_empty() || labels.is_empty() {
        return Err(CurveError::empty());
    }
    if scores.len() != labels.len() {
        return Err(CurveError::mismatch(scores.len(), labels.len()));
    }
    if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
        return Err(CurveError::NonFiniteScore {
            model: crate::error::UNNAMED.to_string(),
            index,
        });
    }
    Ok(())
}

pub fn threshold_sweep(labels: &[bool], scores: &[f64]) -> Result<ThresholdSweep, CurveError> {
    check_inputs(labels, scores)?;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut sweep = ThresholdSweep::default();
    let mut tp = 0usize;
    let mut fp = 0usize;
    for (pos, &idx) in order.iter().enumerate() {
        if labels[idx] {
            tp += 1;
        } else {
            fp += 1;
        }
        let last_of_value = match order.get(pos + 1) {
            Some(&next) => scores[next] != scores[idx],
            None => true,
        };
        if last_of_value {
            sweep.tps.push(tp as f64);
            sweep.fps.push(fp as f64);
            sweep.thresholds.push(scores[idx]);
        }
    }
    Ok(sweep)
}

/// Trapezoidal area under `(x, y)`; `x` may run in either direction but must be monotone.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64, CurveError> {
    if x.len() != y.len() {
        return Err(CurveError::mismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(CurveError::TooFewPoints { n: x.len() });
    }

    let mut any_down = false;
    let mut any_up = false;
    for w in x.windows(2) {
        if w[1] < w[0] {
            any_down = true;
        } else if w[1] > w[0] {
            any_up = true;
        }
    }
    if any_down && any_up {
        return Err(CurveError::NonMonotonic);
    }
    let direction = if any_down { -1.0 } else { 1.0 };

    let mut area = 0.0;
    for i in 1..x.len() {
        area += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) / 2.0;
    }
    Ok(direction * area)
}

/// Recall and precision of a predictor that takes at most two distinct values.
///
/// Returns `None` when the scores are not binary. The positive class is the
/// maximum score.
pub fn binarized_point(labels: &[bool], scores: &[f64]) -> Result<Option<(f64, f64)>, CurveError> {
    check_inputs(labels, scores)?;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &s in scores {
        min = min.min(s);
        max = max.max(s);
    }
    if scores.iter().any(|&s| s != min && s != max) {
        return Ok(None);
    }

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;
    for (&label, &score) in labels.iter().zip(scores) {
        match (score == max, label) {
            (true, true) => tp += 1,
            (true, false) => fp += 1,
            (false, true) => fn_ += 1,
            (false, false) => {}
        }
    }

    let recall = if tp + fn_ > 0 {
        tp as f64 / (tp + fn_) as f64
    } else {
        0.0
    };
    let precision = if tp + fp > 0 {
        tp as f64 / (tp + fp) as f64
    } else {
        0.0
    };
    Ok(Some((recall, precision)))
}
