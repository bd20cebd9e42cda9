#![allow(dead_code)]

use bucket_hist::BucketHistogram;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn are_close(left: f64, right: f64, pct: f64) -> bool {
    let avg_abs = (left.abs() + right.abs()) / 2.0;
    (left - right).abs() <= avg_abs * pct
}

/// Boundaries `[0, 1, 2, 4]` seconds with counts `[2, 2, 4]`.
pub fn small_hist() -> BucketHistogram {
    BucketHistogram::new(vec![0.0, 1.0, 2.0, 4.0], vec![2, 2, 4]).unwrap()
}

/// Histogram with boundaries `0, 1, ..., n` microseconds and the given counts.
pub fn micros_hist(counts: Vec<u64>) -> BucketHistogram {
    let boundaries = (0..=counts.len()).map(|i| i as f64 * 1e-6).collect();
    BucketHistogram::new(boundaries, counts).unwrap()
}

/// Histogram with `n` buckets of random widths and random counts, about a third of them empty.
/// Boundaries are multiples of 1/1024 seconds so that they scale to nanoseconds exactly.
pub fn random_hist(rng: &mut impl Rng, n: usize) -> BucketHistogram {
    let mut boundaries = Vec::with_capacity(n + 1);
    let mut b: f64 = rng.gen_range(0..64) as f64 / 1024.0;
    boundaries.push(b);
    for _ in 0..n {
        b += rng.gen_range(1..256) as f64 / 1024.0;
        boundaries.push(b);
    }
    let counts = (0..n)
        .map(|_| {
            if rng.gen_bool(0.33) {
                0
            } else {
                rng.gen_range(1..1000)
            }
        })
        .collect();
    BucketHistogram::new(boundaries, counts).unwrap()
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

pub fn random_fractions(rng: &mut impl Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(0.0..=1.0)).collect()
}
