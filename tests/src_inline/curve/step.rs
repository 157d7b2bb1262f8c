use super::*;
use proptest::prelude::*;

#[test]
fn test_step_provider_order_reverses() {
    let precision = [0.5, 2.0 / 3.0, 0.5, 1.0, 1.0];
    let recall = [1.0, 1.0, 0.5, 0.5, 0.0];
    let step = prc_step(&precision, &recall, StepOrder::ProviderDescending).unwrap();

    assert_eq!(step.recall, vec![0.0, 0.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]);
    assert_eq!(
        step.precision,
        vec![1.0, 1.0, 1.0, 0.5, 0.5, 2.0 / 3.0, 2.0 / 3.0, 0.5, 0.5]
    );
}

#[test]
fn test_step_unsorted_sorts_by_recall() {
    let precision = [0.2, 0.9, 0.5];
    let recall = [0.8, 0.1, 0.4];
    let step = prc_step(&precision, &recall, StepOrder::Unsorted).unwrap();

    assert_eq!(step.recall, vec![0.1, 0.1, 0.4, 0.4, 0.8]);
    assert_eq!(step.precision, vec![0.9, 0.5, 0.5, 0.2, 0.2]);
}

#[test]
fn test_step_single_point() {
    let step = prc_step(&[0.7], &[0.3], StepOrder::ProviderDescending).unwrap();
    assert_eq!(step.len(), 1);
    assert_eq!(step.precision, vec![0.7]);
    assert_eq!(step.recall, vec![0.3]);
}

#[test]
fn test_step_empty_and_mismatch() {
    assert!(matches!(
        prc_step(&[], &[], StepOrder::Unsorted),
        Err(CurveError::EmptyInput { .. })
    ));
    assert!(matches!(
        prc_step(&[1.0], &[0.1, 0.2], StepOrder::Unsorted),
        Err(CurveError::ShapeMismatch {
            left: 1,
            right: 2,
            ..
        })
    ));
}

fn sorted_curve() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            proptest::collection::vec(0.0f64..=1.0, n),
            proptest::collection::vec(0.0f64..=1.0, n),
        )
            .prop_map(|(precision, mut recall)| {
                recall.sort_by(|a, b| a.total_cmp(b));
                (precision, recall)
            })
    })
}

proptest! {
    #[test]
    fn step_keeps_sorted_points_on_even_indices((precision, recall) in sorted_curve()) {
        let n = recall.len();
        let step = prc_step(&precision, &recall, StepOrder::Unsorted).unwrap();
        prop_assert_eq!(step.len(), 2 * n - 1);
        for i in 0..n {
            prop_assert_eq!(step.recall[2 * i], recall[i]);
            prop_assert_eq!(step.precision[2 * i], precision[i]);
        }
        for i in 0..n - 1 {
            prop_assert_eq!(step.recall[2 * i + 1], recall[i]);
            prop_assert_eq!(step.precision[2 * i + 1], precision[i + 1]);
        }
    }

    #[test]
    fn step_provider_order_matches_reversed_input((precision, recall) in sorted_curve()) {
        let mut p_desc = precision.clone();
        let mut r_desc = recall.clone();
        p_desc.reverse();
        r_desc.reverse();
        let fast = prc_step(&p_desc, &r_desc, StepOrder::ProviderDescending).unwrap();
        let sorted = prc_step(&precision, &recall, StepOrder::Unsorted).unwrap();
        prop_assert_eq!(fast, sorted);
    }
}
