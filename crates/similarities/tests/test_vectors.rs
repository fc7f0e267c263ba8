//! Tests for the position-indexed similarity metrics.

use float_cmp::approx_eq;
use test_case::test_case;

use similarities::{
    vectors::{cosine_similarity, euclidean_distance, pearson_correlation},
    Cause, Metric,
};

#[test]
fn euclidean() {
    let x = vec![5, 7, 8, 10];
    let y = vec![10, 9, 8, 4];

    let similarity: f64 = euclidean_distance(&x, &y).unwrap();
    assert!(
        approx_eq!(f64, similarity, 0.110_347_777_317_164_84, ulps = 2),
        "{similarity}"
    );

    let similarity: f64 = euclidean_distance(&x, &x).unwrap();
    assert_eq!(similarity, 1.0);

    let similarity: f32 = euclidean_distance(&[0.5_f32, -1.5], &[0.5, -1.5]).unwrap();
    assert_eq!(similarity, 1.0);

    let similarity: f64 = euclidean_distance::<u8, _>(&[], &[]).unwrap();
    assert_eq!(similarity, 1.0);
}

#[test]
fn euclidean_decreases_with_distance() {
    let origin = vec![0.0_f64; 3];
    let mut last = 1.0;
    for d in 1..20_i32 {
        let point = vec![f64::from(d), 0.0, 0.0];
        let similarity: f64 = euclidean_distance(&origin, &point).unwrap();
        assert!(similarity > 0.0 && similarity < last, "{similarity} vs {last}");
        last = similarity;
    }
}

#[test]
fn euclidean_extreme_values() {
    let similarity: f64 = euclidean_distance(&[f64::MAX], &[-f64::MAX]).unwrap();
    assert!(similarity > 0.0 && similarity < 1e-300, "{similarity}");

    let x = vec![f64::MAX, -f64::MAX, 1.0];
    let y = vec![-f64::MAX, f64::MAX, 1.0];
    let similarity: f64 = euclidean_distance(&x, &y).unwrap();
    assert!(similarity > 0.0, "{similarity}");
    let reversed: f64 = euclidean_distance(&y, &x).unwrap();
    assert_eq!(similarity.to_bits(), reversed.to_bits());

    let similarity: f32 = euclidean_distance(&[f32::MAX, 0.0], &[-f32::MAX, 0.0]).unwrap();
    assert!(similarity > 0.0, "{similarity}");

    let similarity: f64 = euclidean_distance(&x, &x).unwrap();
    assert_eq!(similarity, 1.0);

    let similarity: f64 = euclidean_distance(&[f64::INFINITY], &[0.0]).unwrap();
    assert_eq!(similarity, 0.0);
}

#[test]
fn pearson() {
    let x = vec![5, 7, 8, 10];
    let y = vec![10, 9, 8, 4];

    // Floating-point arithmetic throughout. Truncating integer division
    // would give -0.9078412990032038 instead.
    let r: f64 = pearson_correlation(&x, &y).unwrap();
    assert!(approx_eq!(f64, r, -0.943_736_976_599_373_6, ulps = 4), "{r}");

    let r: f64 = pearson_correlation(&x, &x).unwrap();
    assert!(approx_eq!(f64, r, 1.0, epsilon = 1e-12), "{r}");
}

#[test_case(2 ; "pair")]
#[test_case(5 ; "five")]
#[test_case(100 ; "hundred")]
fn pearson_anti_correlated(n: i32) {
    let increasing = (0..n).collect::<Vec<_>>();
    let decreasing = (0..n).rev().collect::<Vec<_>>();

    let r: f64 = pearson_correlation(&increasing, &decreasing).unwrap();
    assert!(r < 0.0);
    assert!(approx_eq!(f64, r, -1.0, epsilon = 1e-9), "{r}");
}

#[test]
fn pearson_degenerate() {
    let constant = vec![3.5_f64; 4];
    let x = vec![1.0, 2.0, 3.0, 4.0];

    let r: f64 = pearson_correlation(&constant, &x).unwrap();
    assert_eq!(r, 0.0);
    let r: f64 = pearson_correlation(&x, &constant).unwrap();
    assert_eq!(r, 0.0);
    let r: f64 = pearson_correlation(&constant, &constant).unwrap();
    assert_eq!(r, 0.0);

    let r: f64 = pearson_correlation(&[0.1_f64, 0.1, 0.1], &[1.0, 2.0, 4.0]).unwrap();
    assert!(r.is_finite());
    assert!(r.abs() <= 1.0);

    let r: f64 = pearson_correlation::<i32, _>(&[], &[]).unwrap();
    assert_eq!(r, 0.0);
}

#[test]
fn cosine() {
    let x = vec![5, 7, 8, 10, 7];
    let y = vec![10, 9, 8, 4, 6];

    let similarity: f64 = cosine_similarity(&x, &y).unwrap();
    assert!(
        approx_eq!(f64, similarity, 0.887_116_365_259_953_3, ulps = 2),
        "{similarity}"
    );

    let similarity: f64 = cosine_similarity(&[1, 2, 3], &[2, 4, 6]).unwrap();
    assert!(approx_eq!(f64, similarity, 1.0, epsilon = 1e-12), "{similarity}");

    let similarity: f64 = cosine_similarity(&[1, 2, 3], &[-1, -2, -3]).unwrap();
    assert!(approx_eq!(f64, similarity, -1.0, epsilon = 1e-12), "{similarity}");

    let similarity: f64 = cosine_similarity(&[3.0, 4.0], &[-4.0, 3.0]).unwrap();
    assert!(similarity.abs() < 1e-12, "{similarity}");
}

#[test]
fn cosine_zero_vector() {
    let similarity: f64 = cosine_similarity(&[0, 0, 0], &[1, 2, 3]).unwrap();
    assert_eq!(similarity, 0.0);

    let similarity: f64 = cosine_similarity::<f32, _>(&[], &[]).unwrap();
    assert_eq!(similarity, 0.0);
}

#[test_case(Metric::Euclidean ; "euclidean")]
#[test_case(Metric::Pearson ; "pearson")]
#[test_case(Metric::Cosine ; "cosine")]
fn length_mismatch(metric: Metric) {
    let x = vec![1, 2, 3, 4, 5, 6];
    let y = vec![1, 2, 3];

    let result = match metric {
        Metric::Euclidean => euclidean_distance::<_, f64>(&x, &y),
        Metric::Pearson => pearson_correlation::<_, f64>(&x, &y),
        _ => cosine_similarity::<_, f64>(&x, &y),
    };

    let err = result.unwrap_err();
    assert_eq!(err.metric(), metric);
    assert_eq!(err.cause(), Cause::LengthMismatch { left: 6, right: 3 });
    assert!(err.to_string().starts_with(metric.name()));

    let err = metric.similarity::<_, f32>(&y, &x).unwrap_err();
    assert_eq!(err.cause(), Cause::LengthMismatch { left: 3, right: 6 });
}
