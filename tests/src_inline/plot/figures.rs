use super::*;
use crate::input::PredictionSet;
use crate::metrics::ThresholdMetrics;
use crate::plot::StepWhere;
use crate::plot::recorder::SeriesRecorder;

fn set(name: &str, labels: &[u8], scores: &[f64]) -> PredictionSet {
    PredictionSet::new(
        name,
        scores.to_vec(),
        labels.iter().map(|&l| l == 1).collect(),
    )
}

fn two_models() -> ModelSet {
    ModelSet {
        sets: vec![
            set("a", &[1, 0, 1, 1, 0], &[0.9, 0.1, 0.8, 0.4, 0.3]),
            set("c", &[1, 0, 1, 0], &[0.9, 0.8, 0.3, 0.2]),
        ],
        shared_labels: false,
    }
}

#[test]
fn test_roc_figure_series() {
    let mut rec = SeriesRecorder::default();
    roc_figure(&mut rec, &ThresholdMetrics, &two_models(), &RocParams::default()).unwrap();

    assert_eq!(
        rec.labels(),
        vec!["a (auROC = 100.00%)", "c (auROC = 75.00%)", ""]
    );
    assert_eq!(rec.series[2].style, SeriesStyle::Reference);
    assert_eq!(rec.series[0].style, SeriesStyle::Step(StepWhere::Post));
    let axes = rec.axes.unwrap();
    assert_eq!(axes.title, "Receiver Operating Characteristic");
    assert_eq!(axes.xlim, None);
}

#[test]
fn test_roc_figure_reports_model_without_negatives() {
    let models = ModelSet {
        sets: vec![set("all_pos", &[1, 1], &[0.2, 0.4])],
        shared_labels: true,
    };
    let mut rec = SeriesRecorder::default();
    let err = roc_figure(&mut rec, &ThresholdMetrics, &models, &RocParams::default()).unwrap_err();
    assert_eq!(
        err,
        CurveError::NoNegatives {
            model: "all_pos".to_string()
        }
    );
}

#[test]
fn test_pr_figure_with_shuffle_and_average() {
    let params = PrParams {
        average: true,
        ..PrParams::default()
    };
    let mut rec = SeriesRecorder::default();
    precision_recall_figure(&mut rec, &ThresholdMetrics, &two_models(), &params).unwrap();

    let labels = rec.labels();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0], "a (auc = 100.00%)");
    assert_eq!(labels[1], "c (auc = 83.33%)");
    assert!(labels[2].starts_with("random shuffle (auc = "));
    assert_eq!(labels[3], "average (auc = 93.33%)");

    // Resampled labels are binary scores and are drawn as a single point.
    assert_eq!(rec.series[2].style, SeriesStyle::Marker);
    assert_eq!(rec.series[2].x.len(), 1);

    let average = &rec.series[3];
    assert_eq!(average.x.len(), 5);
    assert_eq!(average.x[0], 1.0);
    assert_eq!(average.x[4], 0.0);

    let axes = rec.axes.unwrap();
    assert_eq!(axes.xlim, Some((-0.05, 1.05)));
    assert_eq!(axes.title, "Precision vs. Recall");
}

#[test]
fn test_pr_figure_binary_predictor() {
    let models = ModelSet {
        sets: vec![set("bin", &[1, 0, 1, 0], &[1.0, 1.0, 0.0, 0.0])],
        shared_labels: true,
    };
    let params = PrParams {
        random_shuffle: false,
        ..PrParams::default()
    };
    let mut rec = SeriesRecorder::default();
    precision_recall_figure(&mut rec, &ThresholdMetrics, &models, &params).unwrap();
    assert_eq!(rec.series.len(), 1);
    assert_eq!(rec.series[0].style, SeriesStyle::Marker);
    assert_eq!(rec.series[0].x, vec![0.5]);
    assert_eq!(rec.series[0].y, vec![0.5]);

    let as_curve = PrParams {
        random_shuffle: false,
        binary_as_point: false,
        ..PrParams::default()
    };
    let mut rec = SeriesRecorder::default();
    precision_recall_figure(&mut rec, &ThresholdMetrics, &models, &as_curve).unwrap();
    assert_eq!(rec.series[0].style, SeriesStyle::Step(StepWhere::Post));
    assert_eq!(rec.series[0].x, vec![1.0, 0.5, 0.0]);
}

#[test]
fn test_tp_at_k_figure_shared_labels() {
    let labels = [1u8, 0, 1, 1, 0];
    let models = ModelSet {
        sets: vec![
            set("m1", &labels, &[0.9, 0.1, 0.8, 0.4, 0.3]),
            set("m2", &labels, &[0.1, 0.9, 0.2, 0.3, 0.8]),
        ],
        shared_labels: true,
    };
    let params = TpAtKParams {
        random_uniform: true,
        ..TpAtKParams::default()
    };
    let mut rec = SeriesRecorder::default();
    tp_at_k_figure(&mut rec, &models, &params).unwrap();

    assert_eq!(rec.series.len(), 4);
    assert_eq!(rec.series[0].y, vec![1.0, 2.0, 3.0, 3.0, 3.0]);
    assert!(rec.series[2].label.starts_with("random uniform"));
    assert_eq!(rec.series[3].x, vec![0.0, 5.0]);
    assert_eq!(rec.series[3].y, vec![0.0, 3.0]);
    assert_eq!(rec.axes.unwrap().title, "True Positives at k");
}

#[test]
fn test_baseline_scores_are_deterministic() {
    let labels = [true, false, false, true, false, true];
    let a = random_shuffle_scores(&labels, BASELINE_SEED);
    let b = random_shuffle_scores(&labels, BASELINE_SEED);
    assert_eq!(a, b);
    assert_eq!(a.len(), labels.len());
    assert!(a.iter().all(|&v| v == 0.0 || v == 1.0));
    assert!(random_shuffle_scores(&[], BASELINE_SEED).is_empty());

    let u = random_uniform_scores(8, BASELINE_SEED);
    assert_eq!(u, random_uniform_scores(8, BASELINE_SEED));
    assert!(u.iter().all(|&v| (0.0..1.0).contains(&v)));
}

#[test]
fn test_pr_figure_skips_model_without_positives() {
    let models = ModelSet {
        sets: vec![
            set("a", &[1, 0, 1, 1, 0], &[0.9, 0.1, 0.8, 0.4, 0.3]),
            set("nopos", &[0, 0, 0], &[0.1, 0.2, 0.3]),
        ],
        shared_labels: false,
    };
    let params = PrParams {
        random_shuffle: false,
        average: true,
        ..PrParams::default()
    };
    let mut rec = SeriesRecorder::default();
    precision_recall_figure(&mut rec, &ThresholdMetrics, &models, &params).unwrap();
    assert_eq!(
        rec.labels(),
        vec!["a (auc = 100.00%)", "average (auc = 100.00%)"]
    );
}
