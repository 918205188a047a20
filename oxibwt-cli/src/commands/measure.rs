//! Measure command implementation.

use crate::utils::{MeasurementJson, print_measurement};
use oxibwt_transform::Bwt;

pub fn cmd_measure(
    bwt: &Bwt,
    sequence: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let measurement = bwt.measure(sequence.as_bytes())?;

    if json {
        let output = MeasurementJson::new(sequence, &measurement);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_measurement(sequence, &measurement);
    }

    Ok(())
}
