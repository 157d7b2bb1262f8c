use super::*;

fn labels(v: &[u8]) -> Vec<bool> {
    v.iter().map(|&x| x == 1).collect()
}

fn assert_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len(), "{a:?} vs {b:?}");
    for (x, y) in a.iter().zip(b) {
        assert!((x - y).abs() < 1e-12, "{a:?} vs {b:?}");
    }
}

#[test]
fn test_pr_curve_descending_recall_with_sentinel() {
    let y = labels(&[1, 0, 1, 1, 0]);
    let s = [0.9, 0.1, 0.8, 0.4, 0.3];
    let curve = ThresholdMetrics.precision_recall_curve(&y, &s).unwrap();

    assert_close(&curve.precision, &[0.6, 0.75, 1.0, 1.0, 1.0, 1.0]);
    assert_close(&curve.recall, &[1.0, 1.0, 1.0, 2.0 / 3.0, 1.0 / 3.0, 0.0]);
    assert_close(&curve.thresholds, &[0.1, 0.3, 0.4, 0.8, 0.9]);
    assert_eq!(curve.thresholds.len() + 1, curve.recall.len());
    assert!(curve.recall.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_pr_curve_groups_tied_scores() {
    let y = labels(&[1, 0]);
    let curve = ThresholdMetrics
        .precision_recall_curve(&y, &[0.5, 0.5])
        .unwrap();
    assert_close(&curve.precision, &[0.5, 1.0]);
    assert_close(&curve.recall, &[1.0, 0.0]);
    assert_close(&curve.thresholds, &[0.5]);
}

#[test]
fn test_average_precision_values() {
    let perfect = ThresholdMetrics
        .average_precision(&labels(&[1, 0, 1, 1, 0]), &[0.9, 0.1, 0.8, 0.4, 0.3])
        .unwrap();
    assert!((perfect - 1.0).abs() < 1e-12);

    let mixed = ThresholdMetrics
        .average_precision(&labels(&[1, 0, 1, 0]), &[0.9, 0.8, 0.3, 0.2])
        .unwrap();
    assert!((mixed - (0.5 * 2.0 / 3.0 + 0.5)).abs() < 1e-12);
}

#[test]
fn test_pr_curve_rejects_degenerate_inputs() {
    assert!(matches!(
        ThresholdMetrics.precision_recall_curve(&[], &[]),
        Err(CurveError::EmptyInput { .. })
    ));
    assert!(matches!(
        ThresholdMetrics.precision_recall_curve(&labels(&[1, 0]), &[0.1]),
        Err(CurveError::ShapeMismatch {
            left: 1,
            right: 2,
            ..
        })
    ));
    assert!(matches!(
        ThresholdMetrics.precision_recall_curve(&labels(&[0, 0]), &[0.1, 0.2]),
        Err(CurveError::NoPositives { .. })
    ));
    assert!(matches!(
        ThresholdMetrics.precision_recall_curve(&labels(&[1, 0]), &[0.1, f64::NAN]),
        Err(CurveError::NonFiniteScore { index: 1, .. })
    ));
}

#[test]
fn test_roc_curve_and_auc() {
    let y = labels(&[1, 0, 1, 0]);
    let s = [0.9, 0.8, 0.3, 0.2];
    let roc = ThresholdMetrics.roc_curve(&y, &s).unwrap();
    assert_close(&roc.fpr, &[0.0, 0.0, 0.5, 0.5, 1.0]);
    assert_close(&roc.tpr, &[0.0, 0.5, 0.5, 1.0, 1.0]);
    assert_eq!(roc.thresholds[0], f64::INFINITY);

    let area = ThresholdMetrics.roc_auc(&y, &s).unwrap();
    assert!((area - 0.75).abs() < 1e-12);
}

#[test]
fn test_roc_auc_extremes() {
    let y = labels(&[1, 1, 0, 0]);
    let perfect = ThresholdMetrics.roc_auc(&y, &[0.9, 0.8, 0.2, 0.1]).unwrap();
    let reversed = ThresholdMetrics.roc_auc(&y, &[0.1, 0.2, 0.8, 0.9]).unwrap();
    assert!((perfect - 1.0).abs() < 1e-12);
    assert!(reversed.abs() < 1e-12);
}

#[test]
fn test_roc_drops_collinear_points() {
    let y = labels(&[1, 1, 1, 0]);
    let roc = ThresholdMetrics
        .roc_curve(&y, &[0.9, 0.8, 0.7, 0.1])
        .unwrap();
    assert_close(&roc.fpr, &[0.0, 0.0, 0.0, 1.0]);
    assert_close(&roc.tpr, &[0.0, 1.0 / 3.0, 1.0, 1.0]);
}

#[test]
fn test_roc_requires_both_classes() {
    assert!(matches!(
        ThresholdMetrics.roc_curve(&labels(&[1, 1]), &[0.1, 0.2]),
        Err(CurveError::NoNegatives { .. })
    ));
    assert!(matches!(
        ThresholdMetrics.roc_curve(&labels(&[0, 0]), &[0.1, 0.2]),
        Err(CurveError::NoPositives { .. })
    ));
}

#[test]
fn test_auc_direction_and_monotonicity() {
    assert!((auc(&[0.0, 1.0], &[1.0, 1.0]).unwrap() - 1.0).abs() < 1e-12);
    assert!((auc(&[1.0, 0.5, 0.0], &[1.0, 1.0, 1.0]).unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(
        auc(&[0.0, 1.0, 0.5], &[1.0, 1.0, 1.0]),
        Err(CurveError::NonMonotonic)
    );
    assert_eq!(auc(&[0.0], &[1.0]), Err(CurveError::TooFewPoints { n: 1 }));
}

#[test]
fn test_binarized_point() {
    let y = labels(&[1, 0, 1, 0]);
    assert_eq!(
        binarized_point(&y, &[1.0, 1.0, 0.0, 0.0]).unwrap(),
        Some((0.5, 0.5))
    );
    assert_eq!(binarized_point(&y, &[0.9, 0.8, 0.3, 0.2]).unwrap(), None);
    // Constant scores predict every item positive.
    assert_eq!(
        binarized_point(&y, &[0.3, 0.3, 0.3, 0.3]).unwrap(),
        Some((1.0, 0.5))
    );
}
