//! Engine configuration.

use crate::alphabet::Alphabet;
use crate::error::{BwtError, Result};

/// The default sentinel symbol.
pub const DEFAULT_SENTINEL: u8 = b'$';

/// How the forward transform builds the sorted rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Construction {
    /// Comparison sort of rotation offsets with a full cyclic comparison.
    /// O(n² log n) in the worst case; fine for short sequences.
    Naive,
    /// Suffix array by prefix doubling with radix-sorted rank pairs.
    /// O(n log n), never compares whole rotations.
    #[default]
    PrefixDoubling,
}

impl Construction {
    /// Short human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::PrefixDoubling => "prefix-doubling",
        }
    }
}

/// What the inverse transform does with an input that has no sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSentinel {
    /// Append a sentinel at the end and try to invert the result.
    #[default]
    Append,
    /// Reject the input as malformed.
    Reject,
}

/// Configuration shared by the forward and inverse engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BwtConfig {
    /// Sentinel symbol; ordered below every other symbol.
    pub sentinel: u8,
    /// Alphabet that input symbols must belong to.
    pub alphabet: Alphabet,
    /// Forward construction strategy.
    pub construction: Construction,
    /// Inverse policy for inputs without a sentinel.
    pub missing_sentinel: MissingSentinel,
}

impl BwtConfig {
    /// Any byte alphabet, `$` sentinel, prefix doubling, lenient inverse.
    pub const DEFAULT: Self = Self {
        sentinel: DEFAULT_SENTINEL,
        alphabet: Alphabet::Bytes,
        construction: Construction::PrefixDoubling,
        missing_sentinel: MissingSentinel::Append,
    };

    /// Nucleotide sequences (`ACGT`), otherwise like [`BwtConfig::DEFAULT`].
    pub const DNA: Self = Self {
        alphabet: Alphabet::Dna,
        ..Self::DEFAULT
    };

    /// Like [`BwtConfig::DEFAULT`] but the inverse requires the sentinel.
    pub const STRICT: Self = Self {
        missing_sentinel: MissingSentinel::Reject,
        ..Self::DEFAULT
    };

    /// Create the default configuration.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Use a different sentinel symbol.
    pub fn with_sentinel(mut self, sentinel: u8) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Restrict input to an alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Select the forward construction strategy.
    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Select the inverse policy for a missing sentinel.
    pub fn with_missing_sentinel(mut self, policy: MissingSentinel) -> Self {
        self.missing_sentinel = policy;
        self
    }

    /// Check that the configuration is usable.
    ///
    /// A restricted alphabet must not contain the sentinel, otherwise valid
    /// input could carry a second sentinel.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_restricted() && self.alphabet.contains(self.sentinel) {
            return Err(BwtError::invalid_input(format!(
                "sentinel {:?} is part of the {} alphabet",
                self.sentinel as char,
                self.alphabet.name()
            )));
        }
        Ok(())
    }
}

impl Default for BwtConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::SymbolSet;

    #[test]
    fn test_default_config() {
        let config = BwtConfig::default();
        assert_eq!(config.sentinel, b'$');
        assert_eq!(config.alphabet, Alphabet::Bytes);
        assert_eq!(config.construction, Construction::PrefixDoubling);
        assert_eq!(config.missing_sentinel, MissingSentinel::Append);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(BwtConfig::DNA.alphabet, Alphabet::Dna);
        assert_eq!(BwtConfig::DNA.sentinel, b'$');
        assert_eq!(BwtConfig::STRICT.missing_sentinel, MissingSentinel::Reject);
        assert_eq!(BwtConfig::STRICT.alphabet, Alphabet::Bytes);
    }

    #[test]
    fn test_builder() {
        let config = BwtConfig::new()
            .with_sentinel(b'#')
            .with_construction(Construction::Naive)
            .with_missing_sentinel(MissingSentinel::Reject);
        assert_eq!(config.sentinel, b'#');
        assert_eq!(config.construction, Construction::Naive);
        assert_eq!(config.missing_sentinel, MissingSentinel::Reject);
    }

    #[test]
    fn test_sentinel_inside_alphabet_rejected() {
        let config = BwtConfig::DNA.with_sentinel(b'A');
        assert!(matches!(
            config.validate(),
            Err(BwtError::InvalidInput { .. })
        ));

        let custom = Alphabet::Custom(SymbolSet::from_bytes(b"ab$"));
        let config = BwtConfig::new().with_alphabet(custom);
        assert!(config.validate().is_err());
    }
}
