//! Predefined sequences.

/// Sequences offered by `--preset` and the interactive picker.
pub const PRESETS: [&str; 8] = [
    "GATTACA",
    "ATTACATTAC",
    "ATATATATATA",
    "ATATATATAT",
    "AATAATAATAAT",
    "AAAATAAATAAA",
    "ATATACACACA",
    "ATATGTATACAT",
];

/// Look up a predefined sequence by its 1-based number.
pub fn preset(number: usize) -> Result<&'static str, String> {
    number
        .checked_sub(1)
        .and_then(|index| PRESETS.get(index))
        .copied()
        .ok_or_else(|| {
            format!(
                "no predefined sequence {}, choose 1-{}",
                number,
                PRESETS.len()
            )
        })
}

/// Pick the sequence given on the command line or the requested preset.
pub fn resolve_sequence(
    sequence: Option<String>,
    preset_number: Option<usize>,
) -> Result<String, Box<dyn std::error::Error>> {
    match (sequence, preset_number) {
        (Some(sequence), _) => Ok(sequence),
        (None, Some(number)) => Ok(preset(number)?.to_string()),
        (None, None) => Err("a sequence or --preset is required".into()),
    }
}

pub fn cmd_presets() -> Result<(), Box<dyn std::error::Error>> {
    println!("Predefined sequences:");
    for (i, sequence) in PRESETS.iter().enumerate() {
        println!("{:>3}. {}", i + 1, sequence);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert_eq!(preset(1).unwrap(), "GATTACA");
        assert_eq!(preset(8).unwrap(), "ATATGTATACAT");
        assert!(preset(0).is_err());
        assert!(preset(9).unwrap_err().contains("1-8"));
    }

    #[test]
    fn test_resolve_sequence() {
        assert_eq!(resolve_sequence(Some("ACGT".into()), None).unwrap(), "ACGT");
        assert_eq!(resolve_sequence(None, Some(3)).unwrap(), "ATATATATATA");
        assert!(resolve_sequence(None, None).is_err());
        assert!(resolve_sequence(None, Some(42)).is_err());
    }
}
