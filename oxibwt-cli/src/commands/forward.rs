//! Forward command implementation.

use crate::utils::{display, print_rotation_table};
use oxibwt_transform::Bwt;
use serde::Serialize;

/// JSON output for a forward transform.
#[derive(Debug, Serialize)]
struct ForwardJson {
    input: String,
    transformed: String,
    primary_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotations: Option<Vec<RotationJson>>,
}

#[derive(Debug, Serialize)]
struct RotationJson {
    rotation: String,
    sorted: String,
}

pub fn cmd_forward(
    bwt: &Bwt,
    sequence: &str,
    table: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (transformed, rotations) = bwt.transform_with_table(sequence.as_bytes())?;

    if json {
        let output = ForwardJson {
            input: sequence.to_string(),
            transformed: display(&transformed).into_owned(),
            primary_index: rotations.primary_index(),
            rotations: table.then(|| {
                rotations
                    .rows()
                    .map(|row| RotationJson {
                        rotation: display(&row.rotation).into_owned(),
                        sorted: display(&row.sorted).into_owned(),
                    })
                    .collect()
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if table {
        println!("Rotations of {} and their sorted order:", display(rotations.extended()));
        println!();
        print_rotation_table(&rotations);
        println!();
    }
    println!("Input: {}", sequence);
    println!("BWT: {}", display(&transformed));

    Ok(())
}
