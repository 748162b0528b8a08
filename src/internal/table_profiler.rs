//! Profiles `ProbingTable` against `std::collections::HashMap`.
//!
//! Inserts a growing number of random keys into both tables, times insertion
//! and lookup, records the average probe length of the probing table and
//! renders the results as `insert_lookup_time.svg` and `probe_length.svg`.
#![allow(
    clippy::cast_precision_loss,
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing
)]

use std::{collections::HashMap, error::Error, time::Instant};

use log::info;
use plotters::prelude::*;
use probetable::{ProbingTable, init_logger};
use rand::Rng;

/// Key counts profiled, one data point each
const KEY_COUNTS: [usize; 6] = [1_000, 5_000, 10_000, 25_000, 50_000, 100_000];

/// Series drawn on the timing chart
const SERIES: [&str; 4] = ["ProbingTable insert", "HashMap insert", "ProbingTable get", "HashMap get"];

/// Measurements for one key count
#[derive(Debug, Clone, Copy)]
struct Sample {
    /// Number of keys inserted
    keys: usize,
    /// Milliseconds per series, in `SERIES` order
    millis: [f64; 4],
    /// Mean number of slots inspected to find a stored key
    avg_probe_length: f64,
    /// Capacity of the probing table once all keys were inserted
    capacity: usize,
}

/// Milliseconds elapsed while running `f`
fn time_millis(f: impl FnOnce()) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_secs_f64() * 1_000.0
}

/// Runs one profiling round over `keys`
fn profile(keys: &[u32]) -> Sample {
    let mut table = ProbingTable::new();
    let mut std_map = HashMap::new();

    let table_insert = time_millis(|| {
        for &key in keys {
            table.insert(key, key);
        }
    });
    let std_insert = time_millis(|| {
        for &key in keys {
            std_map.insert(key, key);
        }
    });

    let mut found = 0usize;
    let table_get = time_millis(|| {
        found += keys.iter().filter(|key| table.get(*key).is_ok()).count();
    });
    let std_get = time_millis(|| {
        found += keys.iter().filter(|key| std_map.get(*key).is_some()).count();
    });
    info!("{found} successful lookups over {} keys", keys.len());

    let total_probes: usize = table.iter().filter_map(|(key, _)| table.probe_length(key)).sum();

    Sample {
        keys: keys.len(),
        millis: [table_insert, std_insert, table_get, std_get],
        avg_probe_length: total_probes as f64 / table.len().max(1) as f64,
        capacity: table.capacity(),
    }
}

/// Colors per series, in `SERIES` order
const COLORS: [RGBColor; 4] = [RED, BLUE, GREEN, MAGENTA];

/// Draws insert and lookup times per key count
fn draw_timings(samples: &[Sample]) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new("insert_lookup_time.svg", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_keys = samples.iter().map(|s| s.keys).max().unwrap_or(1) as f64;
    let max_millis =
        samples.iter().flat_map(|s| s.millis).fold(0.0, f64::max) * 1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("ProbingTable vs HashMap", ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_keys, 0.0..max_millis.max(f64::EPSILON))?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Time (ms)")
        .draw()?;

    for (series_idx, &name) in SERIES.iter().enumerate() {
        let line_style = ShapeStyle::from(&COLORS[series_idx]).stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                samples.iter().map(|s| (s.keys as f64, s.millis[series_idx])),
                line_style,
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Draws the average probe length per key count
fn draw_probe_lengths(samples: &[Sample]) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new("probe_length.svg", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_keys = samples.iter().map(|s| s.keys).max().unwrap_or(1) as f64;
    let max_probes = samples.iter().map(|s| s.avg_probe_length).fold(1.0, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Probe Length", ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_keys, 0.0..max_probes)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Slots inspected per lookup")
        .draw()?;

    chart.draw_series(LineSeries::new(
        samples.iter().map(|s| (s.keys as f64, s.avg_probe_length)),
        ShapeStyle::from(&RED).stroke_width(2),
    ))?;
    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();

    let mut rng = rand::rng();
    let max_keys = KEY_COUNTS.iter().copied().max().unwrap_or(0);
    let keys: Vec<u32> = (0..max_keys).map(|_| rng.random_range(0..u32::MAX)).collect();

    let mut samples = Vec::with_capacity(KEY_COUNTS.len());
    for &count in &KEY_COUNTS {
        let sample = profile(&keys[..count]);
        info!(
            "{} keys: insert {:.2}/{:.2} ms, get {:.2}/{:.2} ms (table/std), avg probes {:.2}, capacity {}",
            sample.keys,
            sample.millis[0],
            sample.millis[1],
            sample.millis[2],
            sample.millis[3],
            sample.avg_probe_length,
            sample.capacity
        );
        samples.push(sample);
    }

    draw_timings(&samples)?;
    draw_probe_lengths(&samples)?;
    info!("Generated plot images: insert_lookup_time.svg, probe_length.svg");

    Ok(())
}
