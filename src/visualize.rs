//! Rudimentary ASCII rendering of bucketed histograms.
//!
//! Buckets are plotted directly, one line each, regardless of their widths, so wide and narrow buckets
//! with the same count get bars of the same length.

use crate::Buckets;
use std::fmt::Write;

/// Width of the bar column; bars never exceed it.
const BAR_COLUMN: usize = 20;

/// Rendering configuration for [`visualize`]-style output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizeCfg {
    pub(crate) bar_width: usize,
    pub(crate) surround: usize,
}

impl Default for VisualizeCfg {
    /// Instantiates a default [`VisualizeCfg`]. The defaults are:
    /// - `bar_width` of 20: the bar of the bucket with the largest count has 20 asterisks.
    /// - `surround` of 2: in compressed mode, the 2 buckets on either side of an interesting bucket are
    ///   also shown.
    fn default() -> Self {
        Self {
            bar_width: BAR_COLUMN,
            surround: 2,
        }
    }
}

impl VisualizeCfg {
    /// Creates a new [`VisualizeCfg`] configured the same as `self` but with the given `bar_width`,
    /// capped at the width of the bar column.
    pub fn with_bar_width(&self, bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.min(BAR_COLUMN),
            ..self.clone()
        }
    }

    /// Creates a new [`VisualizeCfg`] configured the same as `self` but with the given `surround`.
    pub fn with_surround(&self, surround: usize) -> Self {
        Self {
            surround,
            ..self.clone()
        }
    }

    /// Renders `h` as text, one line per shown bucket, in bucket order.
    ///
    /// Each line has a right-aligned bar of asterisks proportional to the bucket's count relative to the
    /// largest count (truncated), the count, and the bucket's bounds in nanoseconds:
    ///
    /// ```text
    ///           **********|      9 [1000.0, 2000.0)
    /// ```
    ///
    /// If `full`, all buckets are shown. Otherwise only the first and last buckets, buckets with a nonzero
    /// count, and buckets within `surround` positions of those are shown, and each run of omitted buckets
    /// is replaced by a single `...` line.
    pub fn render<B: Buckets + ?Sized>(&self, h: &B, full: bool) -> String {
        log::trace!("entering `render` with full={full}");
        let counts = h.counts();
        let max_count = counts.iter().copied().max().unwrap_or(0);
        let should_print = interesting_buckets(counts, full, self.surround);

        let mut b = String::new();
        for (i, (lower, upper, count)) in h.nanos_buckets().enumerate() {
            if !should_print[i] {
                continue;
            } else if i > 0 && !should_print[i - 1] {
                // Previous bucket was skipped.
                let _ = writeln!(b, "{:>BAR_COLUMN$}| ...", " ");
            }

            let width = if max_count > 0 {
                (self.bar_width as f64 * (count as f64 / max_count as f64)) as usize
            } else {
                0
            };
            let bar = "*".repeat(width);

            let _ = writeln!(b, "{bar:>BAR_COLUMN$}| {count:>6} [{lower:>6.1}, {upper:>6.1})");
        }
        b
    }
}

/// Renders `h` with the default [`VisualizeCfg`]. See [`VisualizeCfg::render`].
pub fn visualize<B: Buckets + ?Sized>(h: &B, full: bool) -> String {
    VisualizeCfg::default().render(h, full)
}

/// Returns a mask with one entry per bucket telling whether that bucket should be shown.
///
/// If `full`, every bucket is shown. Otherwise a bucket is shown if it is the first or last bucket, has a
/// nonzero count, or lies within `surround` positions of such a bucket.
pub(crate) fn interesting_buckets(counts: &[u64], full: bool, surround: usize) -> Vec<bool> {
    let n = counts.len();
    if full {
        return vec![true; n];
    }

    let mut interesting = vec![false; n];
    if n == 0 {
        return interesting;
    }

    let mut mark_surrounding = |i: usize| {
        let lo = i.saturating_sub(surround);
        let hi = i.saturating_add(surround).min(n - 1);
        interesting[lo..=hi].fill(true);
    };

    mark_surrounding(0);
    mark_surrounding(n - 1);
    for (i, _) in counts.iter().enumerate().filter(|&(_, &c)| c > 0) {
        mark_surrounding(i);
    }

    interesting
}
