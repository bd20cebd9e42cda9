//! Records latencies of a simulated workload in an [`hdrhistogram::Histogram`] (microseconds), then
//! prints the summary, a compressed visualization and the CSV export of the bucketed histogram.

use bucket_hist::{export_csv, percentiles, summary_stats, visualize, BucketHistogram};
use hdrhistogram::Histogram;
use rand::Rng;
use std::{
    io, thread,
    time::{Duration, Instant},
};

fn work(rng: &mut impl Rng) {
    // Mostly fast, with an occasional slow path.
    let micros = if rng.gen_bool(0.9) {
        rng.gen_range(200..400)
    } else {
        rng.gen_range(2_000..3_000)
    };
    thread::sleep(Duration::from_micros(micros));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut hist = Histogram::<u64>::new_with_bounds(1, 20 * 1000 * 1000, 2)?;
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let start = Instant::now();
        work(&mut rng);
        hist.record(start.elapsed().as_micros() as u64)?;
    }

    let buckets = BucketHistogram::try_from(&hist)?;

    println!("\nLatency stats below are in nanoseconds");
    println!("{:?}", summary_stats(&buckets));

    let ps = percentiles(&buckets, &[0.5, 0.9, 0.99])?;
    println!("\np50: {:.1}, p90: {:.1}, p99: {:.1}", ps[0], ps[1], ps[2]);

    println!("\nCompressed visualization:");
    print!("{}", visualize(&buckets, false));

    println!("\nCSV:");
    export_csv(&buckets, io::stdout().lock())?;

    Ok(())
}
