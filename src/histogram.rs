//! Bucketed histogram input types.
//!
//! A histogram here is a sequence of `N + 1` non-decreasing bucket boundaries, in **seconds**, paired with
//! `N` non-negative sample counts, where `counts[i]` is the number of samples in
//! `[boundaries[i], boundaries[i + 1])`. Histograms are built and owned by the caller; the analysis
//! functions of this crate only borrow them for the duration of a call.

use crate::HistError;

/// Scale applied to boundaries (seconds) for all reported values (nanoseconds).
pub const NANOS_PER_SEC: f64 = 1e9;

//=================
// Buckets

/// Source of bucketed histogram data.
///
/// Implementors must uphold `boundaries().len() == counts().len() + 1`, with at least one bucket and
/// non-decreasing boundaries. [`BucketHistogram`] and [`BucketsView`] check this on construction; other
/// implementors are trusted, and analysis results over malformed data are unspecified.
pub trait Buckets {
    /// Bucket boundaries in seconds.
    fn boundaries(&self) -> &[f64];

    /// Per-bucket sample counts.
    fn counts(&self) -> &[u64];

    /// Number of buckets.
    fn len(&self) -> usize {
        self.counts().len()
    }

    /// Whether there are no buckets; never the case for validated implementations.
    fn is_empty(&self) -> bool {
        self.counts().is_empty()
    }

    /// Returns `(lower, upper, count)` for bucket `i`, with bounds in seconds.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    fn bucket(&self, i: usize) -> (f64, f64, u64) {
        let boundaries = self.boundaries();
        (boundaries[i], boundaries[i + 1], self.counts()[i])
    }

    /// Iterates over `(lower, upper, count)` for all buckets in index order, with bounds in nanoseconds.
    fn nanos_buckets(&self) -> NanosBuckets<'_> {
        NanosBuckets {
            boundaries: self.boundaries(),
            counts: self.counts(),
            i: 0,
        }
    }
}

/// Iterator returned by [`Buckets::nanos_buckets`].
#[derive(Debug, Clone)]
pub struct NanosBuckets<'a> {
    boundaries: &'a [f64],
    counts: &'a [u64],
    i: usize,
}

impl Iterator for NanosBuckets<'_> {
    type Item = (f64, f64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let count = *self.counts.get(self.i)?;
        let lower = self.boundaries[self.i] * NANOS_PER_SEC;
        let upper = self.boundaries[self.i + 1] * NANOS_PER_SEC;
        self.i += 1;
        Some((lower, upper, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.counts.len().saturating_sub(self.i);
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for NanosBuckets<'_> {}

/// Checks the structural invariants shared by all validated [`Buckets`] implementations.
fn validate(boundaries: &[f64], counts: &[u64]) -> Result<(), HistError> {
    if counts.is_empty() {
        return Err(HistError::NoBuckets);
    }
    if boundaries.len() != counts.len() + 1 {
        return Err(HistError::LengthMismatch {
            boundaries: boundaries.len(),
            counts: counts.len(),
        });
    }
    if boundaries[0].is_nan() {
        return Err(HistError::NonMonotonic { index: 0 });
    }
    // `!(a <= b)` also rejects NaN.
    if let Some(index) = (1..boundaries.len()).find(|&i| !(boundaries[i - 1] <= boundaries[i])) {
        return Err(HistError::NonMonotonic { index });
    }
    Ok(())
}

//=================
// BucketHistogram

/// Owned, immutable bucketed histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketHistogram {
    boundaries: Vec<f64>,
    counts: Vec<u64>,
}

impl BucketHistogram {
    /// Creates a histogram from `boundaries` (seconds) and `counts`.
    ///
    /// # Errors
    /// - [`HistError::NoBuckets`] if `counts` is empty.
    /// - [`HistError::LengthMismatch`] if `boundaries.len() != counts.len() + 1`.
    /// - [`HistError::NonMonotonic`] if `boundaries` is not non-decreasing or contains NaN.
    pub fn new(boundaries: Vec<f64>, counts: Vec<u64>) -> Result<Self, HistError> {
        validate(&boundaries, &counts)?;
        Ok(Self { boundaries, counts })
    }

    /// Consumes `self`, returning `(boundaries, counts)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<u64>) {
        (self.boundaries, self.counts)
    }
}

impl Buckets for BucketHistogram {
    fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    fn counts(&self) -> &[u64] {
        &self.counts
    }
}

//=================
// BucketsView

/// Validated borrowed view over caller-owned boundary and count slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketsView<'a> {
    boundaries: &'a [f64],
    counts: &'a [u64],
}

impl<'a> BucketsView<'a> {
    /// Creates a view, with the same checks as [`BucketHistogram::new`].
    pub fn new(boundaries: &'a [f64], counts: &'a [u64]) -> Result<Self, HistError> {
        validate(boundaries, counts)?;
        Ok(Self { boundaries, counts })
    }
}

impl Buckets for BucketsView<'_> {
    fn boundaries(&self) -> &[f64] {
        self.boundaries
    }

    fn counts(&self) -> &[u64] {
        self.counts
    }
}

impl<'a> From<&'a BucketHistogram> for BucketsView<'a> {
    fn from(value: &'a BucketHistogram) -> Self {
        Self {
            boundaries: &value.boundaries,
            counts: &value.counts,
        }
    }
}

//=================
// Sample count

/// Returns the total number of samples in the histogram.
///
/// The sum saturates at `u64::MAX` rather than overflowing; use of counts that large is not expected in
/// practice, but any valid histogram yields a result.
pub fn sample_count<B: Buckets + ?Sized>(h: &B) -> u64 {
    log::trace!("entering `sample_count`");
    h.counts().iter().fold(0_u64, |acc, &c| acc.saturating_add(c))
}

/// Exact total number of samples; cannot overflow as there are far fewer than `2^64` buckets.
pub(crate) fn wide_sample_count(counts: &[u64]) -> u128 {
    counts.iter().map(|&c| c as u128).sum()
}
