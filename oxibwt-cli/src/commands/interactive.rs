//! Interactive command implementation.

use super::presets::PRESETS;
use crate::utils::{display, print_first_column_table, print_measurement, print_rotation_table};
use dialoguer::{Confirm, Input, Select};
use oxibwt_transform::{Bwt, BwtError, byte_size};

const MENU: [&str; 5] = [
    "Perform Burrows-Wheeler Transform",
    "Inverse Burrows-Wheeler Transform",
    "Calculate size of a string",
    "Measure length ratio",
    "Exit",
];

/// Ask for a custom sequence or let the user pick a predefined one.
fn choose_sequence(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    let source = Select::new()
        .with_prompt("Sequence source")
        .items(&["Enter a custom sequence", "Use a predefined sequence"])
        .default(0)
        .interact()?;

    if source == 1 {
        let choice = Select::new()
            .with_prompt("Choose a predefined sequence")
            .items(&PRESETS)
            .default(0)
            .interact()?;
        return Ok(PRESETS[choice].to_string());
    }

    let sequence: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(sequence.trim().to_string())
}

fn run_forward(bwt: &Bwt) -> Result<(), Box<dyn std::error::Error>> {
    let sequence = choose_sequence("Please enter the sequence")?;
    let show_rotations = Confirm::new()
        .with_prompt("Do you want to see all the rotations sorted?")
        .default(false)
        .interact()?;

    let (transformed, rotations) = bwt.transform_with_table(sequence.as_bytes())?;
    if show_rotations {
        println!();
        print_rotation_table(&rotations);
        println!();
    }
    println!("BWT result of your sequence is: {}", display(&transformed));

    if Confirm::new()
        .with_prompt("Do you want to see the length measurement?")
        .default(false)
        .interact()?
    {
        print_measurement(&sequence, &bwt.measure(sequence.as_bytes())?);
    }
    Ok(())
}

fn run_inverse(bwt: &Bwt) -> Result<(), Box<dyn std::error::Error>> {
    let sequence: String = Input::new()
        .with_prompt("Please enter the transformed sequence")
        .interact_text()?;
    let (original, columns) = bwt.inverse_with_table(sequence.trim().as_bytes())?;

    println!("Inverse BWT sequence is: {}", display(&original));
    println!();
    print_first_column_table(&columns);
    Ok(())
}

fn run_size() -> Result<(), Box<dyn std::error::Error>> {
    let sequence = choose_sequence("Enter the string to calculate its size")?;
    println!("Size in bytes: {}", byte_size(&sequence));
    Ok(())
}

fn run_measure(bwt: &Bwt) -> Result<(), Box<dyn std::error::Error>> {
    let sequence = choose_sequence("Please enter the sequence for measurement")?;
    print_measurement(&sequence, &bwt.measure(sequence.as_bytes())?);
    Ok(())
}

/// Menu loop. Errors caused by the entered sequence are reported and the
/// loop continues; anything else (closed terminal, Ctrl-C, I/O) ends the
/// session.
pub fn cmd_interactive(bwt: &Bwt) -> Result<(), Box<dyn std::error::Error>> {
    println!("OxiBWT interactive session");
    println!("==========================");

    loop {
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&MENU)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => run_forward(bwt),
            1 => run_inverse(bwt),
            2 => run_size(),
            3 => run_measure(bwt),
            _ => break,
        };

        if let Err(e) = result {
            match e.downcast_ref::<BwtError>() {
                Some(err) if err.is_input_error() => eprintln!("Error: {}", err),
                _ => return Err(e),
            }
        }
        println!();
    }

    println!("Goodbye!");
    Ok(())
}
