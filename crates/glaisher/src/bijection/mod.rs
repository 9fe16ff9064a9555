//! Glaisher's bijection between distinct-part and odd-part partitions.
//!
//! Forward: write every distinct part as `base · 2^j` with `base` odd, then
//! replace it by `2^j` copies of `base`. Inverse: write the multiplicity of
//! every odd base in binary and merge each `2^j` copies back into the single
//! part `base · 2^j`. Both directions preserve the total.
//!
//! ```text
//! 10 + 2 + 1          10 = 2^1·5   2 = 2^1·1   1 = 2^0·1
//!   -> {5: 2, 1: 3}
//!   -> 5 + 5 + 1 + 1 + 1
//! ```
//!
//! # Example
//!
//! ```
//! use glaisher::{odd_to_unique, unique_to_odd, Partition};
//!
//! let distinct: Partition = "10 + 2 + 1".parse().unwrap();
//! let odd = unique_to_odd(&distinct);
//! assert_eq!(odd.parts(), &[5, 5, 1, 1, 1]);
//! assert_eq!(odd_to_unique(&odd), distinct);
//! ```

mod powers;

use std::collections::HashMap;

use log::trace;

use crate::error::PartitionError;
use crate::partition::Partition;

pub use powers::{binary_multiplicity, decompose, OddDecomposition};

/// Maps a distinct-parts partition to its odd-parts image.
///
/// The output is non-increasing, equal values contiguous, and sums to the
/// same total as the input.
///
/// # Panics
///
/// Panics if a part repeats. Use [`try_unique_to_odd`] for a checked form.
#[must_use]
pub fn unique_to_odd(partition: &Partition) -> Partition {
    let repeated = partition.first_repeated();
    assert!(
        repeated.is_none(),
        "unique_to_odd requires distinct parts, but {} repeats in {}",
        repeated.unwrap_or_default(),
        partition
    );
    map_to_odd(partition)
}

/// Checked form of [`unique_to_odd`].
///
/// # Errors
///
/// Returns [`PartitionError::RepeatedPart`] naming the first repeated part.
pub fn try_unique_to_odd(partition: &Partition) -> Result<Partition, PartitionError> {
    match partition.first_repeated() {
        Some(part) => Err(PartitionError::RepeatedPart { part }),
        None => Ok(map_to_odd(partition)),
    }
}

fn map_to_odd(partition: &Partition) -> Partition {
    let mut odd_parts: HashMap<u32, u32> = HashMap::new();
    for &part in partition {
        let d = decompose(part);
        *odd_parts.entry(d.base).or_insert(0) += d.power();
    }

    let mut entries: Vec<(u32, u32)> = odd_parts.into_iter().collect();
    entries.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    trace!("odd multiplicities for {partition}: {entries:?}");

    let parts = entries
        .into_iter()
        .flat_map(|(base, count)| std::iter::repeat(base).take(count as usize))
        .collect();
    Partition::from_parts_unchecked(parts)
}

/// Maps an odd-parts partition back to its distinct-parts preimage.
///
/// The output is non-increasing. For every distinct-parts `p`,
/// `odd_to_unique(&unique_to_odd(&p))` equals `p.canonical()`.
///
/// # Panics
///
/// Panics if a part is even, or if a regrouped part would exceed
/// `u32::MAX`. Use [`try_odd_to_unique`] for a checked form.
#[must_use]
pub fn odd_to_unique(partition: &Partition) -> Partition {
    let even = partition.first_even();
    assert!(
        even.is_none(),
        "odd_to_unique requires odd parts, but {} is even in {}",
        even.unwrap_or_default(),
        partition
    );
    match map_to_unique(partition) {
        Ok(preimage) => preimage,
        Err(err) => panic!("odd_to_unique cannot map {partition}: {err}"),
    }
}

/// Checked form of [`odd_to_unique`].
///
/// # Errors
///
/// Returns [`PartitionError::EvenPart`] naming the first even part, or
/// [`PartitionError::PartOverflow`] if a regrouped part would exceed
/// `u32::MAX`.
pub fn try_odd_to_unique(partition: &Partition) -> Result<Partition, PartitionError> {
    match partition.first_even() {
        Some(part) => Err(PartitionError::EvenPart { part }),
        None => map_to_unique(partition),
    }
}

fn map_to_unique(partition: &Partition) -> Result<Partition, PartitionError> {
    let mut parts = Vec::new();
    for (base, count) in partition.multiplicities() {
        for exponent in binary_multiplicity(count) {
            let part = base
                .checked_mul(1 << exponent)
                .ok_or(PartitionError::PartOverflow { base, exponent })?;
            parts.push(part);
        }
    }
    parts.sort_unstable_by(|a, b| b.cmp(a));
    Ok(Partition::from_parts_unchecked(parts))
}
