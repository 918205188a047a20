//! Symbol alphabets and the sentinel-aware symbol order.
//!
//! Sequences are handled as runs of atomic byte symbols. The sentinel is
//! ordered below every other symbol no matter what byte value it has, so
//! all sorting in the engines goes through [`symbol_rank`] instead of
//! comparing raw bytes.

use crate::error::{BwtError, Result};

/// Number of distinct ranks produced by [`symbol_rank`] (sentinel + 256 bytes).
pub const RANK_COUNT: usize = 257;

/// Rank of a symbol in the transform's total order.
///
/// The sentinel maps to 0; every other byte `b` maps to `b + 1`.
#[inline]
pub fn symbol_rank(symbol: u8, sentinel: u8) -> u16 {
    if symbol == sentinel {
        0
    } else {
        symbol as u16 + 1
    }
}

/// A set of byte symbols stored as a 256-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSet([u64; 4]);

impl SymbolSet {
    /// The empty set.
    pub const EMPTY: Self = Self([0; 4]);

    /// Every byte value.
    pub const ALL: Self = Self([u64::MAX; 4]);

    /// Build a set from a list of symbols.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// Return a copy of this set that also contains `symbol`.
    pub const fn with(self, symbol: u8) -> Self {
        let mut words = self.0;
        words[(symbol >> 6) as usize] |= 1u64 << (symbol & 63);
        Self(words)
    }

    /// Return a copy of this set without `symbol`.
    pub const fn without(self, symbol: u8) -> Self {
        let mut words = self.0;
        words[(symbol >> 6) as usize] &= !(1u64 << (symbol & 63));
        Self(words)
    }

    /// Check whether `symbol` is in the set.
    #[inline]
    pub const fn contains(&self, symbol: u8) -> bool {
        self.0[(symbol >> 6) as usize] & (1u64 << (symbol & 63)) != 0
    }

    /// Number of symbols in the set.
    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 4]
    }

    /// Iterate over the symbols in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The alphabet Σ that input symbols are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Any byte other than the sentinel.
    #[default]
    Bytes,
    /// Nucleotides `A`, `C`, `G`, `T`.
    Dna,
    /// Nucleotides plus the ambiguity code `N`.
    DnaWithN,
    /// A caller-supplied symbol set.
    Custom(SymbolSet),
}

impl Alphabet {
    const DNA_SYMBOLS: SymbolSet = SymbolSet::from_bytes(b"ACGT");
    const DNA_N_SYMBOLS: SymbolSet = SymbolSet::from_bytes(b"ACGTN");

    /// The symbols this alphabet admits.
    pub fn symbols(&self) -> SymbolSet {
        match self {
            Self::Bytes => SymbolSet::ALL,
            Self::Dna => Self::DNA_SYMBOLS,
            Self::DnaWithN => Self::DNA_N_SYMBOLS,
            Self::Custom(set) => *set,
        }
    }

    /// Check whether `symbol` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols().contains(symbol)
    }

    /// Whether the alphabet is restricted to a declared symbol set.
    pub fn is_restricted(&self) -> bool {
        !matches!(self, Self::Bytes)
    }

    /// Short human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Dna => "dna",
            Self::DnaWithN => "dna-n",
            Self::Custom(_) => "custom",
        }
    }

    /// Verify that every symbol of `data` is either in the alphabet or the
    /// sentinel. Sentinel placement is checked by the engines themselves.
    pub fn check(&self, data: &[u8], sentinel: u8) -> Result<()> {
        if !self.is_restricted() {
            return Ok(());
        }
        let symbols = self.symbols();
        match data
            .iter()
            .position(|&b| b != sentinel && !symbols.contains(b))
        {
            Some(position) => Err(BwtError::encoding(data[position], position)),
            None => Ok(()),
        }
    }
}
