//! Inverse reconstruction engine.
//!
//! The transformed sequence is the last column `L` of the sorted rotation
//! matrix. A stable sort of `L` by symbol rank yields the first column `F`,
//! and the k-th occurrence of a symbol in `L` is the k-th occurrence of that
//! symbol in `F`. That correspondence is the last-to-first (LF) mapping:
//! row `r` ends with the symbol that precedes the rotation starting at row
//! `LF[r]`. Walking LF from row 0 (the rotation starting with the sentinel)
//! yields the original sequence back to front.

use crate::table::FirstColumnTable;
use log::{debug, trace};
use oxibwt_core::{BwtConfig, BwtError, MissingSentinel, RANK_COUNT, Result, symbol_rank};
use std::borrow::Cow;

/// Reconstruct the original sequence from a transformed sequence.
pub fn inverse(data: &[u8], config: &BwtConfig) -> Result<Vec<u8>> {
    let last = prepare(data, config)?;
    reconstruct(&last, config.sentinel)
}

/// Reconstruct the original sequence and return the recovered first and
/// last columns for display.
pub fn inverse_with_table(
    data: &[u8],
    config: &BwtConfig,
) -> Result<(Vec<u8>, FirstColumnTable)> {
    let last = prepare(data, config)?;
    let original = reconstruct(&last, config.sentinel)?;
    Ok((original, FirstColumnTable::from_last(&last, config.sentinel)))
}

/// Validate the input and apply the missing-sentinel policy.
fn prepare<'a>(data: &'a [u8], config: &BwtConfig) -> Result<Cow<'a, [u8]>> {
    config.validate()?;

    if data.is_empty() {
        return Err(BwtError::invalid_input(
            "nothing to invert: transformed sequence is empty",
        ));
    }

    let sentinel = config.sentinel;
    config.alphabet.check(data, sentinel)?;

    match data.iter().filter(|&&b| b == sentinel).count() {
        1 => Ok(Cow::Borrowed(data)),
        0 => match config.missing_sentinel {
            MissingSentinel::Append => {
                debug!(
                    "inverse: no sentinel in {} symbols, appending {:?}",
                    data.len(),
                    sentinel as char
                );
                let mut owned = Vec::with_capacity(data.len() + 1);
                owned.extend_from_slice(data);
                owned.push(sentinel);
                Ok(Cow::Owned(owned))
            }
            MissingSentinel::Reject => Err(BwtError::malformed(format!(
                "sentinel {:?} is missing",
                sentinel as char
            ))),
        },
        count => Err(BwtError::malformed(format!(
            "sentinel {:?} occurs {} times, expected exactly once",
            sentinel as char, count
        ))),
    }
}

/// Compute the last-to-first mapping of a last column.
///
/// `LF[i]` is the row of the sorted matrix whose first symbol is the
/// occurrence of `last[i]` at position `i`. Built with a counting sort over
/// symbol ranks, which is stable, so equal symbols keep their relative order.
pub fn last_to_first(last: &[u8], sentinel: u8) -> Vec<usize> {
    let mut counts = [0usize; RANK_COUNT];
    for &b in last {
        counts[symbol_rank(b, sentinel) as usize] += 1;
    }

    // Starting row of each rank in the first column
    let mut starts = [0usize; RANK_COUNT];
    let mut total = 0;
    for (start, &count) in starts.iter_mut().zip(counts.iter()) {
        *start = total;
        total += count;
    }

    last.iter()
        .map(|&b| {
            let rank = symbol_rank(b, sentinel) as usize;
            let row = starts[rank];
            starts[rank] += 1;
            row
        })
        .collect()
}

/// Walk the LF mapping and rebuild the sequence without its sentinel.
///
/// `last` must contain the sentinel exactly once.
fn reconstruct(last: &[u8], sentinel: u8) -> Result<Vec<u8>> {
    let n = last.len() - 1;
    let lf = last_to_first(last, sentinel);
    trace!("inverse: last-to-first mapping {:?}", lf);

    let mut output = vec![0u8; n];
    let mut row = 0;
    for filled in 0..n {
        let symbol = last[row];
        // Reaching the sentinel early means LF splits into several cycles.
        if symbol == sentinel {
            return Err(BwtError::malformed(format!(
                "last-to-first walk closed after {} of {} symbols",
                filled, n
            )));
        }
        output[n - 1 - filled] = symbol;
        row = lf[row];
    }
    debug_assert_eq!(last[row], sentinel);

    debug!("inverse: reconstructed {} symbols", n);
    Ok(output)
}
