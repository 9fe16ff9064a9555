//! The `Partition` value type.

use std::collections::HashSet;
use std::fmt;

use crate::error::PartitionError;

/// An ordered sequence of positive parts.
///
/// The order is whatever the producer chose: the generator emits parts in
/// non-decreasing order, the bijection emits them non-increasing. Equality is
/// sequence equality; use [`Partition::canonical`] or
/// [`Partition::same_multiset`] to compare as multisets.
///
/// # Invariant
///
/// Every part is at least 1. The empty partition (of 0) is allowed.
///
/// # Example
///
/// ```
/// use glaisher::Partition;
///
/// let p: Partition = "10 + 2 + 1".parse().unwrap();
/// assert_eq!(p.parts(), &[10, 2, 1]);
/// assert_eq!(p.total(), 13);
/// assert!(p.is_distinct());
/// assert!(!p.is_odd());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
pub struct Partition {
    parts: Vec<u32>,
}

impl Partition {
    /// Builds a partition from its parts, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::ZeroPart`] if any part is 0.
    pub fn new(parts: Vec<u32>) -> Result<Self, PartitionError> {
        if parts.contains(&0) {
            return Err(PartitionError::ZeroPart);
        }
        Ok(Self { parts })
    }

    /// Wraps parts already known to be positive.
    pub(crate) fn from_parts_unchecked(parts: Vec<u32>) -> Self {
        debug_assert!(!parts.contains(&0), "partition part of 0");
        Self { parts }
    }

    /// The parts in stored order.
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// Iterates over the parts in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.parts.iter()
    }

    /// Number of parts.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True for the empty partition of 0.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The integer being partitioned: the sum of the parts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.parts.iter().map(|&p| u64::from(p)).sum()
    }

    /// Largest part, if any.
    #[must_use]
    pub fn largest(&self) -> Option<u32> {
        self.parts.iter().copied().max()
    }

    /// First part (in stored order) that already appeared earlier.
    #[must_use]
    pub fn first_repeated(&self) -> Option<u32> {
        let mut seen = HashSet::with_capacity(self.parts.len());
        self.parts.iter().copied().find(|&p| !seen.insert(p))
    }

    /// First even part in stored order.
    #[must_use]
    pub fn first_even(&self) -> Option<u32> {
        self.parts.iter().copied().find(|p| p % 2 == 0)
    }

    /// True when no part value repeats.
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        self.first_repeated().is_none()
    }

    /// True when every part is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.first_even().is_none()
    }

    /// The same multiset of parts in non-increasing order.
    ///
    /// ```
    /// use glaisher::Partition;
    ///
    /// let p = Partition::new(vec![1, 1, 2]).unwrap();
    /// assert_eq!(p.canonical().parts(), &[2, 1, 1]);
    /// ```
    #[must_use]
    pub fn canonical(&self) -> Self {
        let mut parts = self.parts.clone();
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Self { parts }
    }

    /// Multiset equality, ignoring part order.
    #[must_use]
    pub fn same_multiset(&self, other: &Self) -> bool {
        self.len() == other.len() && self.canonical() == other.canonical()
    }

    /// `(part, count)` pairs ordered by part, largest first.
    #[must_use]
    pub fn multiplicities(&self) -> Vec<(u32, u32)> {
        let mut out: Vec<(u32, u32)> = Vec::new();
        for &part in self.canonical().parts() {
            match out.last_mut() {
                Some((value, count)) if *value == part => *count += 1,
                _ => out.push((part, 1)),
            }
        }
        out
    }

    /// Consumes the partition, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> Vec<u32> {
        self.parts
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Partition").field(&self.parts).finish()
    }
}

/// Parts joined by `" + "`, e.g. `10 + 2 + 1`. The empty partition prints `0`.
impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parts.is_empty() {
            return f.write_str("0");
        }
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<u32>> for Partition {
    type Error = PartitionError;

    fn try_from(parts: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(parts)
    }
}

impl From<Partition> for Vec<u32> {
    fn from(p: Partition) -> Self {
        p.parts
    }
}

impl AsRef<[u32]> for Partition {
    fn as_ref(&self) -> &[u32] {
        &self.parts
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
