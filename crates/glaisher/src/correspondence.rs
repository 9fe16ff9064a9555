//! The full correspondence table for one `n`.
//!
//! Lists the distinct-parts and odd-parts partitions of `n` in generator
//! order and records, for each distinct-parts entry, the index of its image
//! under [`unique_to_odd`] in the odd-parts list. This is the data needed to
//! draw one connecting line per pair.

use log::debug;

use crate::bijection::unique_to_odd;
use crate::enumerate::{distinct_partitions, odd_partitions};
use crate::partition::Partition;

/// Distinct-parts and odd-parts partitions of `n` with the index map between
/// them.
///
/// # Example
///
/// ```
/// use glaisher::Correspondence;
///
/// let table = Correspondence::of(13);
/// assert_eq!(table.len(), 18);
/// assert!(table.is_bijection());
/// for (distinct, odd) in table.pairs() {
///     assert_eq!(distinct.total(), odd.total());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Correspondence {
    n: u32,
    distinct: Vec<Partition>,
    odd: Vec<Partition>,
    /// `targets[k]` is the index into `odd` of the image of `distinct[k]`,
    /// or `None` if the image is missing from the list.
    targets: Vec<Option<usize>>,
}

impl Correspondence {
    /// Builds the table for `n`.
    #[must_use]
    pub fn of(n: u32) -> Self {
        let distinct: Vec<Partition> = distinct_partitions(n).collect();
        let odd: Vec<Partition> = odd_partitions(n).collect();
        let odd_canonical: Vec<Partition> = odd.iter().map(Partition::canonical).collect();

        let targets = distinct
            .iter()
            .map(|p| {
                let image = unique_to_odd(p);
                odd_canonical.iter().position(|q| *q == image)
            })
            .collect();

        debug!(
            "correspondence for n = {n}: {} distinct, {} odd",
            distinct.len(),
            odd.len()
        );
        Self {
            n,
            distinct,
            odd,
            targets,
        }
    }

    /// The integer whose partitions are listed.
    #[inline]
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Distinct-parts partitions, generator order.
    #[must_use]
    pub fn distinct(&self) -> &[Partition] {
        &self.distinct
    }

    /// Odd-parts partitions, generator order.
    #[must_use]
    pub fn odd(&self) -> &[Partition] {
        &self.odd
    }

    /// Number of distinct-parts partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distinct.len()
    }

    /// True when there is nothing to pair (only for `n = 0`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distinct.is_empty()
    }

    /// Index into [`odd`](Self::odd) of the image of `distinct()[k]`.
    #[must_use]
    pub fn target(&self, k: usize) -> Option<usize> {
        self.targets.get(k).copied().flatten()
    }

    /// `(distinct, odd image)` pairs in distinct-list order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Partition, &Partition)> + '_ {
        self.distinct
            .iter()
            .zip(&self.targets)
            .filter_map(|(d, t)| t.map(|i| (d, &self.odd[i])))
    }

    /// True when every distinct entry has an image and the images cover the
    /// odd list exactly once.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        if self.distinct.len() != self.odd.len() {
            return false;
        }
        let mut hit = vec![false; self.odd.len()];
        for target in &self.targets {
            match target {
                Some(i) if !hit[*i] => hit[*i] = true,
                _ => return false,
            }
        }
        true
    }
}
