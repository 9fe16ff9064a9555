//! Enumeration of every partition of `n`.
//!
//! The generator follows the smallest-part-first recursion:
//!
//! ```text
//! partitions(n, floor) = (n)
//!                      , i ++ partitions(n - i, i)   for i in floor ..= n / 2
//! ```
//!
//! Choosing the smallest part first and recursing with that part as the new
//! floor yields each multiset exactly once, with parts non-decreasing inside
//! every emitted partition. The recursion is driven by an explicit frame stack
//! so [`Partitions`] is a plain lazy iterator.
//!
//! # Example
//!
//! ```
//! use glaisher::partitions;
//!
//! let all: Vec<String> = partitions(4).map(|p| p.to_string()).collect();
//! assert_eq!(all, ["4", "1 + 3", "1 + 1 + 2", "1 + 1 + 1 + 1", "2 + 2"]);
//! ```

use std::iter::FusedIterator;

use log::debug;

use crate::partition::Partition;

/// One level of the recursion: partitions of `n` whose parts are `>= floor`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    n: u32,
    /// Next smallest-part candidate to descend into.
    next: u32,
    /// Whether the single-part partition `(n)` was already emitted.
    emitted_whole: bool,
}

impl Frame {
    const fn new(n: u32, floor: u32) -> Self {
        Self {
            n,
            next: floor,
            emitted_whole: false,
        }
    }
}

/// Lazy iterator over the partitions of `n` in canonical recursive order.
///
/// Restart by calling [`partitions`] again or by cloning an unstarted
/// iterator; both replay the identical sequence.
#[derive(Debug, Clone)]
pub struct Partitions {
    /// Parts chosen by the enclosing frames, one per frame below the top.
    prefix: Vec<u32>,
    stack: Vec<Frame>,
}

impl Partitions {
    /// Partitions of `n` whose parts are all at least `floor`.
    ///
    /// The first item is always `(n)` itself, as in the recursion above;
    /// a floor of 0 is treated as 1. `n = 0` is outside the supported
    /// domain and produces an empty iterator.
    #[must_use]
    pub fn with_floor(n: u32, floor: u32) -> Self {
        let stack = if n == 0 {
            debug!("partitions(0) requested; n = 0 is unsupported, yielding nothing");
            Vec::new()
        } else {
            vec![Frame::new(n, floor.max(1))]
        };
        Self {
            prefix: Vec::new(),
            stack,
        }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        loop {
            let top = self.stack.last_mut()?;

            if !top.emitted_whole {
                top.emitted_whole = true;
                let mut parts = Vec::with_capacity(self.prefix.len() + 1);
                parts.extend_from_slice(&self.prefix);
                parts.push(top.n);
                return Some(Partition::from_parts_unchecked(parts));
            }

            if top.next <= top.n / 2 {
                let part = top.next;
                let rest = top.n - part;
                top.next += 1;
                self.prefix.push(part);
                self.stack.push(Frame::new(rest, part));
                continue;
            }

            // Frame exhausted: drop it along with the part that led into it.
            self.stack.pop();
            if !self.stack.is_empty() {
                self.prefix.pop();
            }
        }
    }
}

impl FusedIterator for Partitions {}

/// Every partition of `n`, in canonical recursive order.
///
/// The count is the partition number p(n). Only `n >= 1` is supported;
/// `partitions(0)` yields nothing.
#[must_use]
pub fn partitions(n: u32) -> Partitions {
    Partitions::with_floor(n, 1)
}

/// Partitions of `n` with pairwise distinct parts, in generator order.
pub fn distinct_partitions(n: u32) -> impl Iterator<Item = Partition> + Clone {
    partitions(n).filter(Partition::is_distinct)
}

/// Partitions of `n` with only odd parts, in generator order.
pub fn odd_partitions(n: u32) -> impl Iterator<Item = Partition> + Clone {
    partitions(n).filter(Partition::is_odd)
}

/// All partitions of `n` in canonical (non-increasing) form, ordered the way
/// the enumeration walk presents them: reverse lexicographic, so `(n)` comes
/// first and `(1, 1, ..., 1)` last.
///
/// ```
/// use glaisher::display_order;
///
/// let order: Vec<String> = display_order(4).iter().map(|p| p.to_string()).collect();
/// assert_eq!(order, ["4", "3 + 1", "2 + 2", "2 + 1 + 1", "1 + 1 + 1 + 1"]);
/// ```
#[must_use]
pub fn display_order(n: u32) -> Vec<Partition> {
    let mut all: Vec<Partition> = partitions(n).map(|p| p.canonical()).collect();
    all.sort_unstable_by(|a, b| b.parts().cmp(a.parts()));
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts_of(iter: impl Iterator<Item = Partition>) -> Vec<Vec<u32>> {
        iter.map(Partition::into_parts).collect()
    }

    #[test]
    fn golden_order_for_four() {
        assert_eq!(
            parts_of(partitions(4)),
            vec![
                vec![4],
                vec![1, 3],
                vec![1, 1, 2],
                vec![1, 1, 1, 1],
                vec![2, 2],
            ]
        );
    }

    #[test]
    fn golden_order_for_six() {
        assert_eq!(
            parts_of(partitions(6)),
            vec![
                vec![6],
                vec![1, 5],
                vec![1, 1, 4],
                vec![1, 1, 1, 3],
                vec![1, 1, 1, 1, 2],
                vec![1, 1, 1, 1, 1, 1],
                vec![1, 1, 2, 2],
                vec![1, 2, 3],
                vec![2, 4],
                vec![2, 2, 2],
                vec![3, 3],
            ]
        );
    }

    #[test]
    fn one_has_single_partition() {
        assert_eq!(parts_of(partitions(1)), vec![vec![1]]);
    }

    #[test]
    fn zero_is_empty() {
        assert_eq!(partitions(0).count(), 0);
    }

    #[test]
    fn floor_restricts_smallest_part() {
        // (5) is always emitted; below it only splits with smallest part >= 2.
        assert_eq!(parts_of(Partitions::with_floor(5, 2)), vec![vec![5], vec![2, 3]]);
        assert_eq!(Partitions::with_floor(5, 0).count(), partitions(5).count());
    }

    #[test]
    fn restartable() {
        let first: Vec<_> = partitions(9).collect();
        let second: Vec<_> = partitions(9).collect();
        assert_eq!(first, second);

        let fresh = partitions(9);
        let replay = fresh.clone();
        assert_eq!(fresh.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut it = partitions(2);
        assert_eq!(it.by_ref().count(), 2);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn parts_non_decreasing() {
        for p in partitions(12) {
            assert!(p.parts().windows(2).all(|w| w[0] <= w[1]), "{p:?}");
        }
    }

    #[test]
    fn filters_for_thirteen() {
        assert_eq!(distinct_partitions(13).count(), 18);
        assert_eq!(odd_partitions(13).count(), 18);
        assert!(distinct_partitions(13).all(|p| p.is_distinct()));
        assert!(odd_partitions(13).all(|p| p.is_odd()));
    }

    #[test]
    fn display_order_bounds() {
        let order = display_order(13);
        assert_eq!(order.len(), 101);
        assert_eq!(order[0].parts(), &[13]);
        assert_eq!(order[1].parts(), &[12, 1]);
        assert_eq!(order.last().map(Partition::len), Some(13));
    }
}
