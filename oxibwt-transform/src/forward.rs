//! Rotation-order engine: the forward Burrows-Wheeler Transform.
//!
//! The input is extended with the sentinel, the n+1 cyclic rotations of the
//! extended sequence are put in sorted order, and the last symbol of every
//! sorted rotation forms the output. Rotations are never materialised; the
//! sorted order is a list of rotation start offsets.
//!
//! Because the sentinel is unique, minimal, and last, sorting the rotations
//! is the same as sorting the suffixes of the extended sequence, so the
//! rotation order is also its suffix array.

use crate::table::RotationTable;
use log::{debug, trace};
use oxibwt_core::{BwtConfig, BwtError, Construction, RANK_COUNT, Result, symbol_rank};
use std::cmp::Ordering;

/// Number of leading ranks packed into the naive sort key.
const KEY_SYMBOLS: usize = 4;

/// Bits per packed rank (ranks go up to 256).
const RANK_BITS: u32 = 9;

/// Perform the forward transform.
///
/// Returns the last column of the sorted rotation matrix, of length
/// `data.len() + 1` and holding exactly one sentinel.
pub fn transform(data: &[u8], config: &BwtConfig) -> Result<Vec<u8>> {
    let (extended, order) = sorted_rotations(data, config)?;
    Ok(last_column(&extended, &order))
}

/// Perform the forward transform and keep the rotation order for display.
pub fn transform_with_table(
    data: &[u8],
    config: &BwtConfig,
) -> Result<(Vec<u8>, RotationTable)> {
    let (extended, order) = sorted_rotations(data, config)?;
    let transformed = last_column(&extended, &order);
    Ok((transformed, RotationTable::new(extended, order, config.sentinel)))
}

/// Validate the input, append the sentinel and sort the rotations.
fn sorted_rotations(data: &[u8], config: &BwtConfig) -> Result<(Vec<u8>, Vec<usize>)> {
    config.validate()?;

    let sentinel = config.sentinel;
    if let Some(position) = data.iter().position(|&b| b == sentinel) {
        return Err(BwtError::invalid_input(format!(
            "sentinel {:?} found at position {} of the input",
            sentinel as char, position
        )));
    }
    config.alphabet.check(data, sentinel)?;

    let mut extended = Vec::with_capacity(data.len() + 1);
    extended.extend_from_slice(data);
    extended.push(sentinel);

    let order = rotation_order(&extended, sentinel, config.construction);
    debug!(
        "forward: {} symbols sorted with {} construction",
        extended.len(),
        config.construction.name()
    );
    trace!("forward: rotation order {:?}", order);

    Ok((extended, order))
}

/// Compute the sorted order of the rotations of `extended`.
///
/// `extended` must end with its only occurrence of `sentinel`.
pub fn rotation_order(extended: &[u8], sentinel: u8, construction: Construction) -> Vec<usize> {
    debug_assert_eq!(extended.last(), Some(&sentinel));

    let ranks: Vec<u16> = extended.iter().map(|&b| symbol_rank(b, sentinel)).collect();
    match construction {
        Construction::Naive => naive_order(&ranks),
        Construction::PrefixDoubling => doubling_order(&ranks),
    }
}

/// Extract the last symbol of every sorted rotation.
pub fn last_column(extended: &[u8], order: &[usize]) -> Vec<u8> {
    let n = extended.len();
    order.iter().map(|&i| extended[(i + n - 1) % n]).collect()
}

/// Comparison sort of rotation offsets.
fn naive_order(ranks: &[u16]) -> Vec<usize> {
    let n = ranks.len();
    let mut order: Vec<usize> = (0..n).collect();

    // Keys hold the first few ranks of each rotation so most comparisons
    // never walk the rotations themselves.
    let key_len = n.min(KEY_SYMBOLS);
    let keys: Vec<u64> = (0..n)
        .map(|i| {
            (0..key_len).fold(0u64, |key, j| {
                (key << RANK_BITS) | ranks[(i + j) % n] as u64
            })
        })
        .collect();

    order.sort_by(|&a, &b| match keys[a].cmp(&keys[b]) {
        Ordering::Equal => compare_rotations(ranks, a, b, key_len),
        other => other,
    });
    order
}

/// Compare two rotations starting `skip` symbols in.
fn compare_rotations(ranks: &[u16], a: usize, b: usize, skip: usize) -> Ordering {
    let n = ranks.len();
    for i in skip..n {
        match ranks[(a + i) % n].cmp(&ranks[(b + i) % n]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Prefix doubling over cyclic prefixes of length 1, 2, 4, ...
///
/// After the round with step `k` every rotation carries the rank of its
/// first `2k` symbols; the loop stops once all ranks are distinct, which
/// the unique sentinel guarantees by `2k >= n`. Each round orders the rank
/// pairs with two counting-sort passes, so a round is linear.
fn doubling_order(ranks: &[u16]) -> Vec<usize> {
    let n = ranks.len();
    let mut order: Vec<usize> = (0..n).collect();
    if n <= 1 {
        return order;
    }

    let mut rank: Vec<usize> = ranks.iter().map(|&r| r as usize).collect();
    let mut next = vec![0usize; n];
    let mut scratch = vec![0usize; n];
    // Symbol ranks stay below RANK_COUNT, later ranks below n.
    let mut counts = vec![0usize; n.max(RANK_COUNT)];
    let mut k = 1;

    loop {
        // Second half first, then a stable pass on the first half.
        counting_sort(&mut order, &mut scratch, &mut counts, |i| rank[(i + k) % n]);
        counting_sort(&mut order, &mut scratch, &mut counts, |i| rank[i]);

        let key = |i: usize| (rank[i], rank[(i + k) % n]);
        next[order[0]] = 0;
        for w in 1..n {
            let (prev, cur) = (order[w - 1], order[w]);
            next[cur] = next[prev] + usize::from(key(prev) != key(cur));
        }
        std::mem::swap(&mut rank, &mut next);

        if rank[order[n - 1]] == n - 1 {
            break;
        }
        k *= 2;
    }

    order
}

/// Stable counting sort of `order` by `key`, using `scratch` as output.
fn counting_sort(
    order: &mut Vec<usize>,
    scratch: &mut Vec<usize>,
    counts: &mut [usize],
    key: impl Fn(usize) -> usize,
) {
    counts.fill(0);
    for &i in order.iter() {
        counts[key(i)] += 1;
    }

    let mut total = 0;
    for count in counts.iter_mut() {
        let c = *count;
        *count = total;
        total += c;
    }

    for &i in order.iter() {
        let bucket = &mut counts[key(i)];
        scratch[*bucket] = i;
        *bucket += 1;
    }
    std::mem::swap(order, scratch);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(data: &[u8]) -> Vec<u8> {
        transform(data, &BwtConfig::DEFAULT).unwrap()
    }

    #[test]
    fn test_forward_empty() {
        assert_eq!(forward(b""), b"$");
    }

    #[test]
    fn test_forward_single() {
        assert_eq!(forward(b"a"), b"a$");
    }

    #[test]
    fn test_forward_gattaca() {
        assert_eq!(forward(b"GATTACA"), b"ACTGA$TA");
    }

    #[test]
    fn test_forward_classics() {
        assert_eq!(forward(b"banana"), b"annb$aa");
        assert_eq!(forward(b"mississippi"), b"ipssm$pissii");
        assert_eq!(forward(b"ATATATATATA"), b"ATTTTT$AAAAA");
    }

    #[test]
    fn test_sentinel_sorts_below_smaller_bytes() {
        // ' ' and '!' are below '$' as bytes.
        assert_eq!(forward(b" hi!"), b"!$i h");
    }

    #[test]
    fn test_forward_rejects_sentinel() {
        let err = transform(b"GAT$ACA", &BwtConfig::DEFAULT).unwrap_err();
        assert!(matches!(err, BwtError::InvalidInput { .. }));
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn test_forward_alphabet() {
        assert!(transform(b"GATTACA", &BwtConfig::DNA).is_ok());
        let err = transform(b"GATTACU", &BwtConfig::DNA).unwrap_err();
        assert!(matches!(
            err,
            BwtError::EncodingError {
                symbol: b'U',
                position: 6
            }
        ));
    }

    #[test]
    fn test_constructions_agree() {
        let cases: [&[u8]; 7] = [
            b"",
            b"a",
            b"aaaaaaaaaaaaaaaaaaaa",
            b"abababababababab",
            b"the quick brown fox jumps over the lazy dog",
            b"AAAATAAATAAA",
            b"\x00\x01\xff\x00\x01\xff\x24\x24",
        ];
        for data in cases {
            // '$' inside the binary case is handled by switching sentinel.
            let sentinel = if data.contains(&b'$') { b'#' } else { b'$' };
            let mut extended = data.to_vec();
            extended.push(sentinel);
            assert_eq!(
                rotation_order(&extended, sentinel, Construction::Naive),
                rotation_order(&extended, sentinel, Construction::PrefixDoubling),
                "orders differ for {:?}",
                data
            );
        }
    }

    #[test]
    fn test_doubling_full_rank_range() {
        // Every byte value and long repeats reach the widest buckets and the
        // most doubling rounds.
        let mut data: Vec<u8> = (0..=255u8).rev().filter(|&b| b != b'$').collect();
        data.extend(b"abcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcab".iter());
        data.extend(std::iter::repeat_n(b'z', 300));
        data.push(0);
        data.push(255);

        let mut extended = data.clone();
        extended.push(b'$');
        let order = rotation_order(&extended, b'$', Construction::PrefixDoubling);
        assert_eq!(order, rotation_order(&extended, b'$', Construction::Naive));

        let transformed = transform(&data, &BwtConfig::DEFAULT).unwrap();
        assert_eq!(crate::inverse::inverse(&transformed, &BwtConfig::DEFAULT).unwrap(), data);
    }

    #[test]
    fn test_rotation_order_is_suffix_array() {
        let extended = b"GATTACA$";
        let order = rotation_order(extended, b'$', Construction::PrefixDoubling);
        let mut suffixes: Vec<usize> = (0..extended.len()).collect();
        suffixes.sort_by_key(|&i| {
            extended[i..]
                .iter()
                .map(|&b| symbol_rank(b, b'$'))
                .collect::<Vec<_>>()
        });
        assert_eq!(order, suffixes);
    }

    #[test]
    fn test_forward_groups_similar() {
        let transformed = forward(b"abababab");
        let runs = 1 + transformed.windows(2).filter(|w| w[0] != w[1]).count();
        assert!(runs <= 4, "BWT should group similar symbols, got {runs} runs");
    }
}
