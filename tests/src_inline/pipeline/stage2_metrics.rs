use super::*;
use crate::input::PredictionSet;
use crate::metrics::ThresholdMetrics;

fn set(name: &str, labels: &[u8], scores: &[f64]) -> PredictionSet {
    PredictionSet::new(
        name,
        scores.to_vec(),
        labels.iter().map(|&l| l == 1).collect(),
    )
}

#[test]
fn test_stage2_weights_and_scores() {
    let models = ModelSet {
        sets: vec![
            set("a", &[1, 0, 1, 1, 0], &[0.9, 0.1, 0.8, 0.4, 0.3]),
            set("c", &[1, 0, 1, 0], &[0.9, 0.8, 0.3, 0.2]),
        ],
        shared_labels: false,
    };
    let out = run_stage2(&ThresholdMetrics, &models).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].n, 5);
    assert_eq!(out[0].positives, 3);
    assert!((out[0].weight - 0.6).abs() < 1e-12);
    assert!((out[1].weight - 0.4).abs() < 1e-12);
    assert!((out[0].auprc - 1.0).abs() < 1e-12);
    assert!((out[1].auprc - 5.0 / 6.0).abs() < 1e-12);
    assert_eq!(out[0].auroc, Some(1.0));
    assert!((out[1].auroc.unwrap() - 0.75).abs() < 1e-12);
}

#[test]
fn test_stage2_single_class_model_has_no_auroc() {
    let models = ModelSet {
        sets: vec![
            set("a", &[1, 0, 1], &[0.9, 0.1, 0.8]),
            set("all_pos", &[1, 1], &[0.2, 0.4]),
        ],
        shared_labels: false,
    };
    let out = run_stage2(&ThresholdMetrics, &models).unwrap();
    assert_eq!(out[1].auroc, None);
    assert!((out[1].auprc - 1.0).abs() < 1e-12);
    assert!((out[1].weight - 0.5).abs() < 1e-12);
}

#[test]
fn test_stage2_model_without_positives_weighs_zero() {
    let models = ModelSet {
        sets: vec![
            set("a", &[1, 0], &[0.9, 0.1]),
            set("none", &[0, 0], &[0.2, 0.4]),
        ],
        shared_labels: false,
    };
    let out = run_stage2(&ThresholdMetrics, &models).unwrap();
    assert_eq!(out[1].weight, 0.0);
    assert_eq!(out[1].auprc, 0.0);
    assert_eq!(out[1].auroc, None);
    assert_eq!(out[0].weight, 1.0);
}

#[test]
fn test_stage2_no_positives_anywhere_is_undefined() {
    let models = ModelSet {
        sets: vec![set("none", &[0, 0], &[0.2, 0.4])],
        shared_labels: true,
    };
    let err = run_stage2(&ThresholdMetrics, &models).unwrap_err();
    assert_eq!(err, CurveError::UndefinedWeighting { n_models: 1 });
}
