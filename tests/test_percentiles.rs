use bucket_hist::{percentile, percentiles, sample_count, BucketHistogram, Buckets, HistError};

mod common;
use common::{micros_hist, random_fractions, random_hist, seeded_rng, small_hist};

#[test]
fn test_small_hist_percentiles() {
    _ = env_logger::try_init();
    let h = small_hist();

    assert_eq!(percentile(&h, 0.5).unwrap(), 1.5e9);
    assert_eq!(percentile(&h, 0.9).unwrap(), 3e9);
    assert_eq!(percentile(&h, 0.25).unwrap(), 0.5e9);
    assert_eq!(percentile(&h, 0.26).unwrap(), 1.5e9);
    assert_eq!(percentile(&h, 1.0).unwrap(), 3e9);
}

#[test]
fn test_results_follow_request_order() {
    let h = small_hist();
    let vals = percentiles(&h, &[0.9, 0.1, 0.5, 0.9]).unwrap();
    assert_eq!(vals, vec![3e9, 0.5e9, 1.5e9, 3e9]);
}

#[test]
fn test_empty_request() {
    let h = small_hist();
    assert_eq!(percentiles(&h, &[]).unwrap(), Vec::<f64>::new());
}

#[test]
fn test_zero_fraction_resolves_at_first_bucket() {
    // Cumulative share of the first bucket is 0, which already reaches 0.
    let h = micros_hist(vec![0, 0, 5, 0]);
    let expected = (0.0 + 1e-6 * 1e9) / 2.0;
    assert_eq!(percentile(&h, 0.0).unwrap(), expected);
}

#[test]
fn test_ties_go_to_earlier_bucket() {
    // After bucket 1 the share is exactly 0.5; the trailing empty bucket 2 also has share 0.5.
    let h = BucketHistogram::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![1, 1, 0, 2]).unwrap();
    assert_eq!(percentile(&h, 0.5).unwrap(), 1.5e9);
}

#[test]
fn test_no_samples_defaults_to_max_boundary() {
    let h = BucketHistogram::new(vec![0.0, 1.0, 2.0, 4.0], vec![0, 0, 0]).unwrap();
    assert_eq!(sample_count(&h), 0);
    let vals = percentiles(&h, &[0.0, 0.5, 1.0]).unwrap();
    assert_eq!(vals, vec![4e9, 4e9, 4e9]);
}

#[test]
fn test_invalid_fractions_rejected() {
    let h = small_hist();
    for p in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
        match percentiles(&h, &[p]) {
            Err(HistError::InvalidFraction(bad)) => {
                assert!(bad.is_nan() || bad == p, "reported fraction {bad} for {p}")
            }
            other => panic!("expected InvalidFraction for {p}, got {other:?}"),
        }
    }

    // A single bad fraction fails the whole batch.
    assert!(matches!(
        percentiles(&h, &[0.5, 1.1, 0.9]),
        Err(HistError::InvalidFraction(p)) if p == 1.1
    ));
    assert!(matches!(
        percentile(&h, -0.1),
        Err(HistError::InvalidFraction(_))
    ));
}

#[test]
fn test_batch_equals_single() {
    let mut rng = seeded_rng();
    for n in [1, 2, 7, 40] {
        let h = random_hist(&mut rng, n);
        let fractions = random_fractions(&mut rng, 25);
        let batch = percentiles(&h, &fractions).unwrap();
        for (p, v) in fractions.iter().zip(&batch) {
            assert_eq!(percentile(&h, *p).unwrap(), *v, "p={p}, n={n}");
        }
    }
}

#[test]
fn test_monotonic_in_fraction() {
    let mut rng = seeded_rng();
    for n in [1, 3, 16, 100] {
        let h = random_hist(&mut rng, n);
        let mut fractions = random_fractions(&mut rng, 50);
        fractions.extend([0.0, 1.0]);
        fractions.sort_by(f64::total_cmp);
        let vals = percentiles(&h, &fractions).unwrap();
        for w in vals.windows(2) {
            assert!(w[0] <= w[1], "non-monotonic percentiles {vals:?}");
        }
    }
}

#[test]
fn test_within_bounds() {
    let mut rng = seeded_rng();
    for n in [1, 5, 50] {
        let h = random_hist(&mut rng, n);
        let lo = h.boundaries()[0] * 1e9;
        let hi = h.boundaries()[n] * 1e9;
        let fractions = random_fractions(&mut rng, 50);
        for v in percentiles(&h, &fractions).unwrap() {
            assert!(lo <= v && v <= hi, "{v} not in [{lo}, {hi}]");
        }
    }
}

#[test]
fn test_huge_counts() {
    let h = BucketHistogram::new(vec![0.0, 1.0, 2.0, 4.0], vec![u64::MAX, u64::MAX, 2]).unwrap();
    let vals = percentiles(&h, &[0.25, 0.5, 0.75]).unwrap();
    assert_eq!(vals, vec![0.5e9, 0.5e9, 1.5e9]);
}
