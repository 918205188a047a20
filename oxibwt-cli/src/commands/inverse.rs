//! Inverse command implementation.

use crate::utils::{display, print_first_column_table};
use oxibwt_transform::Bwt;
use serde::Serialize;

/// JSON output for an inverse transform.
#[derive(Debug, Serialize)]
struct InverseJson {
    transformed: String,
    original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_column: Option<String>,
}

pub fn cmd_inverse(
    bwt: &Bwt,
    sequence: &str,
    table: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (original, columns) = bwt.inverse_with_table(sequence.as_bytes())?;

    if json {
        let output = InverseJson {
            transformed: sequence.to_string(),
            original: display(&original).into_owned(),
            first_column: table.then(|| display(columns.first()).into_owned()),
            last_column: table.then(|| display(columns.last()).into_owned()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Transformed: {}", sequence);
    println!("Original: {}", display(&original));
    if table {
        println!();
        print_first_column_table(&columns);
    }

    Ok(())
}
