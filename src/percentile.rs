//! Percentile estimation over bucketed histograms.

use crate::{
    histogram::{wide_sample_count, NANOS_PER_SEC},
    Buckets, HistError,
};

/// Estimates the value, in nanoseconds, below which each fraction in `fractions` of the samples fall.
/// Results are returned in the same order as `fractions`.
///
/// The estimate for a fraction `p` is the midpoint of the first bucket (in index order) at which the
/// cumulative share of samples reaches or exceeds `p`. Each fraction is resolved independently, so
/// `percentiles(h, &[p, q])` yields the same values as two single-fraction calls.
///
/// Fractions that never resolve keep the default of the histogram's maximum boundary. With a non-empty
/// histogram this cannot happen, as the cumulative share reaches `1.0` at the last bucket. When the
/// histogram holds no samples the cumulative share is undefined, no fraction resolves, and every result
/// is the maximum boundary.
///
/// # Errors
/// [`HistError::InvalidFraction`] if any fraction is outside `[0, 1]` or NaN. The check runs before any
/// estimation, so an invalid fraction anywhere in `fractions` yields no results at all.
pub fn percentiles<B: Buckets + ?Sized>(h: &B, fractions: &[f64]) -> Result<Vec<f64>, HistError> {
    log::trace!("entering `percentiles` with {} fractions", fractions.len());
    if let Some(&p) = fractions.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        log::debug!("rejecting invalid percentile {p}");
        return Err(HistError::InvalidFraction(p));
    }

    Ok(resolve_percentiles(h, fractions))
}

/// Percentile resolution for fractions already known to be within `[0, 1]`.
pub(crate) fn resolve_percentiles<B: Buckets + ?Sized>(h: &B, fractions: &[f64]) -> Vec<f64> {
    let boundaries = h.boundaries();
    let max_val = boundaries[boundaries.len() - 1] * NANOS_PER_SEC;
    let mut vals: Vec<Option<f64>> = vec![None; fractions.len()];

    let total_count = wide_sample_count(h.counts());
    if total_count == 0 {
        log::debug!("histogram has no samples; all percentiles default to the maximum boundary");
    } else {
        let mut running_count: u128 = 0;
        for (i, &count) in h.counts().iter().enumerate() {
            running_count += count as u128;
            let curr_fraction = running_count as f64 / total_count as f64;

            for (val, &p) in vals.iter_mut().zip(fractions) {
                if val.is_none() && curr_fraction >= p {
                    let lower = boundaries[i] * NANOS_PER_SEC;
                    let upper = boundaries[i + 1] * NANOS_PER_SEC;
                    *val = Some((lower + upper) / 2.0);
                }
            }
        }
    }

    vals.into_iter().map(|v| v.unwrap_or(max_val)).collect()
}

/// Single-fraction form of [`percentiles`].
///
/// # Errors
/// [`HistError::InvalidFraction`] if `fraction` is outside `[0, 1]` or NaN.
pub fn percentile<B: Buckets + ?Sized>(h: &B, fraction: f64) -> Result<f64, HistError> {
    let vals = percentiles(h, &[fraction])?;
    Ok(vals[0])
}
