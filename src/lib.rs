//! Supports analysis of pre-aggregated, bucketed latency histograms.
//!
//! A histogram is given as `N + 1` non-decreasing bucket boundaries in **seconds** and `N` sample counts
//! (see [`Buckets`]). This library does not collect samples; it derives from an existing histogram:
//! - percentile estimates ([`percentiles`], [`percentile`]) and [`SummaryStats`];
//! - the total sample count ([`sample_count`]);
//! - an ASCII rendering, full or compressed ([`visualize`], [`VisualizeCfg`]);
//! - a CSV export ([`export_csv`]), which can be read back with [`parse_csv`].
//!
//! All reported values are in **nanoseconds**. Histograms recorded with
//! [hdrhistogram](https://crates.io/crates/hdrhistogram) can be converted with [`from_hdr`].
//!
//! ```rust
//! use bucket_hist::{percentile, sample_count, visualize, BucketHistogram};
//!
//! let h = BucketHistogram::new(vec![0.0, 1.0, 2.0, 4.0], vec![2, 2, 4]).unwrap();
//! assert_eq!(sample_count(&h), 8);
//! assert_eq!(percentile(&h, 0.5).unwrap(), 1.5e9);
//! print!("{}", visualize(&h, true));
//! ```
#![deny(clippy::unwrap_used)]

mod error;
pub use error::*;

mod histogram;
pub use histogram::*;

mod percentile;
pub use percentile::*;

mod summary_stats;
pub use summary_stats::*;

mod visualize;
pub use visualize::{visualize, VisualizeCfg};

mod export;
pub use export::*;

mod hdr;
pub use hdr::*;
