//! Conversion from [hdrhistogram](https://crates.io/crates/hdrhistogram) histograms.

use crate::{BucketHistogram, HistError};
use hdrhistogram::Histogram;

/// Builds a [`BucketHistogram`] from the recorded values of `hist`.
///
/// Values in `hist` are in some unit (e.g., microseconds); `secs_per_unit` converts them to seconds
/// (e.g., `1e-6` for microseconds). Each distinct recorded value becomes the bucket
/// `[lowest_equivalent(v), next_non_equivalent(v))` holding that value's count. Ranges between recorded
/// values become buckets with a zero count so the result's boundaries are contiguous.
///
/// # Errors
/// [`HistError::NoBuckets`] if `hist` has no recorded values.
pub fn from_hdr(hist: &Histogram<u64>, secs_per_unit: f64) -> Result<BucketHistogram, HistError> {
    log::trace!("entering `from_hdr` with {} samples", hist.len());
    let mut boundaries: Vec<f64> = Vec::new();
    let mut counts: Vec<u64> = Vec::new();
    let mut prev_upper: Option<u64> = None;

    for v in hist.iter_recorded() {
        let value = v.value_iterated_to();
        let lower = hist.lowest_equivalent(value);
        let upper = hist.next_non_equivalent(value);

        match prev_upper {
            None => boundaries.push(lower as f64 * secs_per_unit),
            Some(prev) if prev < lower => {
                // Gap between recorded values.
                counts.push(0);
                boundaries.push(lower as f64 * secs_per_unit);
            }
            Some(_) => {}
        }

        counts.push(v.count_at_value());
        boundaries.push(upper as f64 * secs_per_unit);
        prev_upper = Some(upper);
    }

    if counts.is_empty() {
        log::debug!("`from_hdr` called with an empty histogram");
    }
    BucketHistogram::new(boundaries, counts)
}

impl TryFrom<&Histogram<u64>> for BucketHistogram {
    type Error = HistError;

    /// Same as [`from_hdr`] with values in microseconds.
    fn try_from(value: &Histogram<u64>) -> Result<Self, Self::Error> {
        from_hdr(value, 1e-6)
    }
}
