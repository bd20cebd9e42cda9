//! CSV export of bucketed histograms, and parsing of such exports.

use crate::{histogram::NANOS_PER_SEC, BucketHistogram, Buckets, HistError};
use std::io::{BufRead, BufWriter, Write};

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "lower,upper,count";

/// Writes `h` to `sink` as CSV, with header [`CSV_HEADER`] and one row per bucket in bucket order.
/// Bounds are in nanoseconds, written as plain decimals (no exponent) with the fewest digits that parse
/// back to the same `f64`; counts are integers.
///
/// Output is buffered and flushed before returning, so the export has only succeeded once this function
/// returns `Ok`.
///
/// # Errors
/// [`HistError::Io`] with whatever error `sink` reports on write or flush. Rows already handed to `sink`
/// are not rolled back.
pub fn export_csv<B: Buckets + ?Sized>(h: &B, sink: impl Write) -> Result<(), HistError> {
    log::trace!("entering `export_csv` with {} buckets", h.len());
    let mut w = BufWriter::new(sink);
    writeln!(w, "{CSV_HEADER}")?;
    for (lower, upper, count) in h.nanos_buckets() {
        writeln!(w, "{lower},{upper},{count}")?;
    }
    w.flush()?;
    Ok(())
}

/// One data row of a CSV export; bounds in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CsvRow {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Reads back the rows of a CSV export produced by [`export_csv`]. Blank lines are ignored.
///
/// # Errors
/// - [`HistError::Parse`] if the header is missing or a row does not have exactly three well-formed fields.
/// - [`HistError::Io`] if reading fails.
pub fn parse_csv(reader: impl BufRead) -> Result<Vec<CsvRow>, HistError> {
    log::trace!("entering `parse_csv`");
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line?,
        None => String::new(),
    };
    if header.trim() != CSV_HEADER {
        return Err(HistError::Parse {
            line: 1,
            reason: format!("expected header `{CSV_HEADER}`"),
        });
    }

    let mut rows = Vec::new();
    for (i, line) in lines {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(&line, line_no)?);
    }
    Ok(rows)
}

fn parse_row(line: &str, line_no: usize) -> Result<CsvRow, HistError> {
    let parse_err = |reason: String| HistError::Parse {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.trim().split(',').collect();
    let [lower, upper, count] = fields.as_slice() else {
        return Err(parse_err(format!("expected 3 fields, got {}", fields.len())));
    };

    let lower: f64 = lower
        .parse()
        .map_err(|e| parse_err(format!("lower `{lower}`: {e}")))?;
    let upper: f64 = upper
        .parse()
        .map_err(|e| parse_err(format!("upper `{upper}`: {e}")))?;
    let count: u64 = count
        .parse()
        .map_err(|e| parse_err(format!("count `{count}`: {e}")))?;

    Ok(CsvRow {
        lower,
        upper,
        count,
    })
}

impl BucketHistogram {
    /// Rebuilds a histogram from parsed CSV rows, rescaling bounds from nanoseconds back to seconds.
    ///
    /// Each boundary in seconds is chosen so that scaling it back to nanoseconds gives exactly the value in
    /// the row, so exporting the result reproduces `rows`.
    ///
    /// # Errors
    /// - [`HistError::NoBuckets`] if `rows` is empty.
    /// - [`HistError::Parse`] if a row's lower bound differs from the previous row's upper bound.
    /// - Any error of [`BucketHistogram::new`].
    pub fn from_csv_rows(rows: &[CsvRow]) -> Result<Self, HistError> {
        let Some(first) = rows.first() else {
            return Err(HistError::NoBuckets);
        };

        let mut boundaries = Vec::with_capacity(rows.len() + 1);
        boundaries.push(secs_from_nanos(first.lower));
        for (i, row) in rows.iter().enumerate() {
            if i > 0 && row.lower != rows[i - 1].upper {
                return Err(HistError::Parse {
                    // Data rows start after the header line.
                    line: i + 2,
                    reason: format!(
                        "lower bound {} does not match previous upper bound {}",
                        row.lower,
                        rows[i - 1].upper
                    ),
                });
            }
            boundaries.push(secs_from_nanos(row.upper));
        }
        let counts = rows.iter().map(|row| row.count).collect();

        Self::new(boundaries, counts)
    }
}

/// Returns a value in seconds that scales to exactly `nanos`, if one lies within a couple of ulps of
/// `nanos / NANOS_PER_SEC`; otherwise that quotient.
fn secs_from_nanos(nanos: f64) -> f64 {
    let secs = nanos / NANOS_PER_SEC;
    if !secs.is_finite() || secs * NANOS_PER_SEC == nanos {
        return secs;
    }
    let bits = secs.to_bits();
    [1, -1, 2, -2]
        .into_iter()
        .filter_map(|d: i64| bits.checked_add_signed(d).map(f64::from_bits))
        .find(|s| s.is_finite() && *s * NANOS_PER_SEC == nanos)
        .unwrap_or(secs)
}
