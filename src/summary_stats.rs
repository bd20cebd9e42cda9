use crate::{
    histogram::{wide_sample_count, NANOS_PER_SEC},
    percentile::resolve_percentiles,
    sample_count, Buckets,
};

/// Percentile fractions reported in [`SummaryStats`], in field order.
const SUMMARY_FRACTIONS: [f64; 9] = [0.01, 0.05, 0.10, 0.25, 0.50, 0.75, 0.90, 0.95, 0.99];

/// Common summary statistics useful in latency testing/benchmarking, estimated from a bucketed histogram.
///
/// `count` is [`sample_count`](crate::sample_count), which saturates at `u64::MAX`. All other values are in nanoseconds and are estimated from bucket midpoints:
/// - `mean` and `stdev` weight each bucket's midpoint by its count;
/// - `min` and `max` are the midpoints of the first and last buckets with a nonzero count;
/// - percentiles are computed with [`percentiles`](crate::percentiles).
///
/// For a histogram with no samples, `mean` and `stdev` are `0.0` and all other values are the histogram's
/// maximum boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: u64,
    pub mean: f64,
    pub stdev: f64,
    pub min: f64,
    pub p1: f64,
    pub p5: f64,
    pub p10: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Computes summary statistics from the given histogram.
    pub fn new<B: Buckets + ?Sized>(h: &B) -> Self {
        log::trace!("entering `SummaryStats::new`");
        let count = sample_count(h);
        let boundaries = h.boundaries();
        let max_val = boundaries[boundaries.len() - 1] * NANOS_PER_SEC;

        let ps = resolve_percentiles(h, &SUMMARY_FRACTIONS);

        let midpoints = h
            .nanos_buckets()
            .filter(|&(_, _, c)| c > 0)
            .map(|(lower, upper, c)| ((lower + upper) / 2.0, c));

        let (mean, stdev, min, max) = if count == 0 {
            (0.0, 0.0, max_val, max_val)
        } else {
            let n = wide_sample_count(h.counts()) as f64;
            let mean = midpoints.clone().map(|(m, c)| m * c as f64).sum::<f64>() / n;
            let var = midpoints
                .clone()
                .map(|(m, c)| (m - mean).powi(2) * c as f64)
                .sum::<f64>()
                / n;
            let min = midpoints.clone().next().map_or(max_val, |(m, _)| m);
            let max = midpoints.last().map_or(max_val, |(m, _)| m);
            (mean, var.sqrt(), min, max)
        };

        Self {
            count,
            mean,
            stdev,
            min,
            p1: ps[0],
            p5: ps[1],
            p10: ps[2],
            p25: ps[3],
            median: ps[4],
            p75: ps[5],
            p90: ps[6],
            p95: ps[7],
            p99: ps[8],
            max,
        }
    }
}

/// Computes a [`SummaryStats`] from a bucketed histogram.
pub fn summary_stats<B: Buckets + ?Sized>(h: &B) -> SummaryStats {
    SummaryStats::new(h)
}
