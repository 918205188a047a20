//! Batch command implementation.

use crate::utils::{MeasurementJson, create_progress_bar};
use oxibwt_transform::Bwt;
use std::fs;
use std::path::Path;

/// Read one sequence per line, skipping blank lines and `#` comments.
fn read_sequences(file: &Path) -> oxibwt_transform::Result<Vec<String>> {
    let contents = fs::read_to_string(file)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

pub fn cmd_batch(
    bwt: &Bwt,
    file: &Path,
    json: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sequences = read_sequences(file)?;
    log::info!("batch: {} sequences from {}", sequences.len(), file.display());

    let pb = create_progress_bar(sequences.len() as u64, progress && !json);
    let mut reports = Vec::with_capacity(sequences.len());
    let mut errors: Vec<(usize, String)> = Vec::new();

    for (i, sequence) in sequences.iter().enumerate() {
        pb.set_message(sequence.chars().take(24).collect::<String>());
        match bwt.measure(sequence.as_bytes()) {
            Ok(measurement) => reports.push(MeasurementJson::new(sequence, &measurement)),
            Err(e) => errors.push((i + 1, e.to_string())),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!(
            "{:>8} {:>11} {:>8} {:>6}  Sequence",
            "Original", "Transformed", "Ratio", "Trip"
        );
        println!("{}", "-".repeat(60));
        for report in &reports {
            println!(
                "{:>8} {:>11} {:>7.1}% {:>6}  {}",
                report.original_length,
                report.transformed_length,
                report.ratio_percent,
                if report.round_trip { "OK" } else { "FAIL" },
                report.sequence
            );
        }
        println!("{}", "-".repeat(60));
        println!(
            "{} sequences measured, {} failed",
            reports.len(),
            errors.len()
        );
    }

    for (line, message) in &errors {
        eprintln!("  sequence {}: {}", line, message);
    }
    if !errors.is_empty() {
        return Err(format!("{} of {} sequences failed", errors.len(), sequences.len()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxibwt_transform::BwtError;

    #[test]
    fn test_read_sequences() {
        let path = std::env::temp_dir().join(format!("oxibwt-batch-{}.txt", std::process::id()));
        fs::write(&path, "# DNA samples\nGATTACA\n\n  ATATATATATA  \n").unwrap();

        let sequences = read_sequences(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(sequences, vec!["GATTACA", "ATATATATATA"]);
    }

    #[test]
    fn test_batch_reports_failures() {
        let path =
            std::env::temp_dir().join(format!("oxibwt-batch-fail-{}.txt", std::process::id()));
        fs::write(&path, "GATTACA\nGAT$ACA\n").unwrap();

        let result = cmd_batch(&Bwt::default(), &path, true, false);
        fs::remove_file(&path).unwrap();
        assert!(result.unwrap_err().to_string().contains("1 of 2"));
    }

    #[test]
    fn test_batch_missing_file() {
        let path = std::env::temp_dir().join("oxibwt-no-such-file.txt");
        assert!(matches!(read_sequences(&path), Err(BwtError::Io(_))));

        let err = cmd_batch(&Bwt::default(), &path, false, false).unwrap_err();
        let err = err.downcast_ref::<BwtError>().unwrap();
        assert!(matches!(err, BwtError::Io(_)));
        assert!(!err.is_input_error());
    }
}
