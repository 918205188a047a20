//! Integration tests for the transform engines.

use oxibwt_transform::{
    Alphabet, Bwt, BwtConfig, BwtError, Construction, MissingSentinel, byte_size, inverse,
    measure, transform,
};

/// The predefined sequences shipped with the command-line tool.
const SEQUENCES: [&str; 8] = [
    "GATTACA",
    "ATTACATTAC",
    "ATATATATATA",
    "ATATATATAT",
    "AATAATAATAAT",
    "AAAATAAATAAA",
    "ATATACACACA",
    "ATATGTATACAT",
];

/// Reproducible pseudo-random bytes, avoiding `sentinel`.
fn pseudo_random(len: usize, seed: u64, alphabet: &[u8], sentinel: u8) -> Vec<u8> {
    let mut state = seed;
    let mut data = Vec::with_capacity(len);
    while data.len() < len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let symbol = alphabet[(state >> 33) as usize % alphabet.len()];
        if symbol != sentinel {
            data.push(symbol);
        }
    }
    data
}

#[test]
fn test_gattaca_scenario() {
    let transformed = transform(b"GATTACA").expect("forward failed");
    assert_eq!(transformed, b"ACTGA$TA");
    assert_eq!(inverse(&transformed).expect("inverse failed"), b"GATTACA");
}

#[test]
fn test_empty_boundary() {
    assert_eq!(transform(b"").unwrap(), b"$");
    assert_eq!(inverse(b"$").unwrap(), b"");
}

#[test]
fn test_measure_scenario() {
    let m = measure(b"ATATATATATA").unwrap();
    assert_eq!(m.original_length, 11);
    assert_eq!(m.transformed_length, 12);
    assert!(m.round_trip);
}

#[test]
fn test_banana_is_not_a_transform() {
    let err = inverse(b"BANANA$").unwrap_err();
    assert!(matches!(err, BwtError::MalformedTransform { .. }));
}

#[test]
fn test_predefined_sequences() {
    let bwt = Bwt::new(BwtConfig::DNA);
    for sequence in SEQUENCES {
        let transformed = bwt.transform(sequence.as_bytes()).unwrap();
        assert_eq!(transformed.len(), sequence.len() + 1);
        assert_eq!(transformed.iter().filter(|&&b| b == b'$').count(), 1);
        assert_eq!(bwt.inverse(&transformed).unwrap(), sequence.as_bytes());
        assert_eq!(byte_size(sequence), sequence.len());
    }
}

#[test]
fn test_roundtrip_pseudo_random() {
    let alphabets: [&[u8]; 3] = [b"ACGT", b"ab", b"abcdefghijklmnopqrstuvwxyz !?.,"];
    for (seed, alphabet) in alphabets.iter().enumerate() {
        for len in [0usize, 1, 2, 3, 7, 64, 257, 1000] {
            let data = pseudo_random(len, seed as u64 + len as u64, alphabet, b'$');
            let transformed = transform(&data).unwrap();
            assert_eq!(transformed.len(), data.len() + 1);
            assert_eq!(transformed.iter().filter(|&&b| b == b'$').count(), 1);
            assert_eq!(inverse(&transformed).unwrap(), data, "len {len}");
        }
    }
}

#[test]
fn test_roundtrip_all_byte_values() {
    let bwt = Bwt::new(BwtConfig::new().with_sentinel(0x00));
    let all: Vec<u8> = (1..=u8::MAX).collect();
    let data: Vec<u8> = all.iter().rev().chain(all.iter()).copied().collect();
    let transformed = bwt.transform(&data).unwrap();
    assert_eq!(bwt.inverse(&transformed).unwrap(), data);
}

#[test]
fn test_constructions_produce_same_output() {
    let naive = Bwt::new(BwtConfig::new().with_construction(Construction::Naive));
    let doubling = Bwt::new(BwtConfig::new().with_construction(Construction::PrefixDoubling));

    for seed in 0..16u64 {
        let data = pseudo_random(100 + seed as usize * 13, seed, b"AAAAAT", b'$');
        assert_eq!(naive.transform(&data).unwrap(), doubling.transform(&data).unwrap());
    }
    let periodic = b"ab".repeat(300);
    assert_eq!(
        naive.transform(&periodic).unwrap(),
        doubling.transform(&periodic).unwrap()
    );
}

#[test]
fn test_determinism() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let first = transform(data).unwrap();
    for _ in 0..5 {
        assert_eq!(transform(data).unwrap(), first);
        assert_eq!(inverse(&first).unwrap(), data);
    }
}

#[test]
fn test_both_inverse_forms_accepted() {
    // With the sentinel
    assert_eq!(inverse(b"AB$").unwrap(), b"BA");
    // Without it, the lenient policy appends one
    assert_eq!(inverse(b"AB").unwrap(), b"BA");

    let strict = Bwt::new(BwtConfig::new().with_missing_sentinel(MissingSentinel::Reject));
    assert!(matches!(
        strict.inverse(b"AB"),
        Err(BwtError::MalformedTransform { .. })
    ));
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        transform(b"A$"),
        Err(BwtError::InvalidInput { .. })
    ));
    assert!(matches!(inverse(b""), Err(BwtError::InvalidInput { .. })));
    assert!(matches!(
        inverse(b"$$"),
        Err(BwtError::MalformedTransform { .. })
    ));

    let dna = Bwt::new(BwtConfig::new().with_alphabet(Alphabet::Dna));
    assert!(matches!(
        dna.transform(b"gattaca"),
        Err(BwtError::EncodingError {
            symbol: b'g',
            position: 0
        })
    ));
}

#[test]
fn test_tables_match_outputs() {
    let bwt = Bwt::default();
    let (transformed, rotations) = bwt.transform_with_table(b"ATTACATTAC").unwrap();
    assert_eq!(rotations.last_column(), transformed);
    assert_eq!(rotations.rows().count(), 11);

    let (original, columns) = bwt.inverse_with_table(&transformed).unwrap();
    assert_eq!(original, b"ATTACATTAC");
    assert_eq!(columns.first(), rotations.first_column());
    assert_eq!(columns.last(), transformed.as_slice());
}
