//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use oxibwt_transform::{FirstColumnTable, Measurement, RotationTable};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

/// Set up `env_logger`. `RUST_LOG` overrides the level picked by `-v`.
pub fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

/// Parse the `--sentinel` value: exactly one ASCII character.
pub fn parse_sentinel(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "sentinel must be a single ASCII character, got {:?}",
            value
        )),
    }
}

/// Render a symbol sequence for the terminal.
pub fn display(symbols: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(symbols)
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Print the rotations of the extended sequence next to their sorted order.
pub fn print_rotation_table(table: &RotationTable) {
    let width = table.len().max("Rotation".len());
    println!("{:>4}  {:<width$}  {:<width$}", "Row", "Rotation", "Sorted");
    println!("{}", "-".repeat(8 + 2 * width));

    let primary = table.primary_index();
    for row in table.rows() {
        let marker = if row.offset == primary { " <" } else { "" };
        println!(
            "{:>4}  {:<width$}  {:<width$}{}",
            row.offset,
            display(&row.rotation),
            display(&row.sorted),
            marker
        );
    }
}

/// Print the first and last columns recovered by the inverse transform.
pub fn print_first_column_table(table: &FirstColumnTable) {
    println!("{:>4}  {:^5}  {:^4}", "Row", "First", "Last");
    println!("{}", "-".repeat(17));
    for (i, (first, last)) in table.rows().enumerate() {
        println!(
            "{:>4}  {:^5}  {:^4}",
            i,
            display(&[first]),
            display(&[last])
        );
    }
}

/// Print a measurement as labelled lines.
pub fn print_measurement(sequence: &str, measurement: &Measurement) {
    println!("Sequence: {}", sequence);
    println!("Original length: {} bytes", measurement.original_length);
    println!("Transformed length: {} bytes", measurement.transformed_length);
    println!(
        "Length ratio: {:.4} ({:.1}%)",
        measurement.ratio,
        measurement.ratio_percent()
    );
    println!(
        "Round trip: {}",
        if measurement.round_trip { "OK" } else { "MISMATCH" }
    );
    println!("Forward time: {:.2?}", measurement.forward_time);
    println!("Inverse time: {:.2?}", measurement.inverse_time);
    println!("Note: the ratio reflects the added sentinel only; the transform does not compress.");
}

/// JSON serializable measurement.
#[derive(Debug, Serialize)]
pub struct MeasurementJson {
    pub sequence: String,
    pub original_length: usize,
    pub transformed_length: usize,
    pub ratio: f64,
    pub ratio_percent: f64,
    pub round_trip: bool,
    pub forward_time_us: f64,
    pub inverse_time_us: f64,
}

impl MeasurementJson {
    pub fn new(sequence: &str, measurement: &Measurement) -> Self {
        Self {
            sequence: sequence.to_string(),
            original_length: measurement.original_length,
            transformed_length: measurement.transformed_length,
            ratio: measurement.ratio,
            ratio_percent: measurement.ratio_percent(),
            round_trip: measurement.round_trip,
            forward_time_us: measurement.forward_time.as_secs_f64() * 1e6,
            inverse_time_us: measurement.inverse_time.as_secs_f64() * 1e6,
        }
    }
}
