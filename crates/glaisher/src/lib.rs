//! Integer partitions and Glaisher's bijection.
//!
//! Two pure operations form the core:
//!
//! - [`partitions`] lazily enumerates every partition of `n`, each exactly
//!   once, in a fixed recursive order.
//! - [`unique_to_odd`] maps a partition with pairwise distinct parts to the
//!   partition with only odd parts that Glaisher's bijection assigns to it.
//!
//! Around them sit the pieces needed to present Euler's theorem
//! (`#distinct(n) = #odd(n)`): subset filters, the inverse map, the
//! per-`n` [`Correspondence`] table, generating-function [`series`] and a
//! [`YoungDiagram`] layout.
//!
//! # Example: Euler's theorem for n = 13
//!
//! ```
//! use glaisher::{distinct_partitions, odd_partitions, unique_to_odd, Partition};
//!
//! assert_eq!(distinct_partitions(13).count(), odd_partitions(13).count());
//!
//! let p: Partition = "10 + 2 + 1".parse().unwrap();
//! assert_eq!(unique_to_odd(&p).to_string(), "5 + 5 + 1 + 1 + 1");
//! ```
//!
//! # Supported domain
//!
//! Enumeration grows like `exp(sqrt(n))`; the crate is meant for the small
//! `n` that can be drawn, roughly `n <= 30`. `n = 0` is not supported by the
//! generator and yields no partitions.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade. The crate never installs a
//! logger.

#![deny(clippy::unwrap_used, clippy::expect_used, missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

// Error type shared by construction, parsing and the checked mappers
mod error;

// Partition value type and its text form
pub mod partition;

// Canonical recursive enumeration and subset filters
pub mod enumerate;

// Glaisher's bijection, its inverse, and power-of-two decomposition
pub mod bijection;

// Per-n table pairing distinct-parts and odd-parts partitions
pub mod correspondence;

// Truncated generating functions
pub mod series;

// Young diagram layout
pub mod tableau;

pub use bijection::{
    binary_multiplicity, decompose, odd_to_unique, try_odd_to_unique, try_unique_to_odd,
    unique_to_odd, OddDecomposition,
};
pub use correspondence::Correspondence;
pub use enumerate::{display_order, distinct_partitions, odd_partitions, partitions, Partitions};
pub use error::PartitionError;
pub use partition::Partition;
pub use tableau::{Cell, YoungDiagram};

/// Prelude module for convenient imports.
///
/// ```
/// use glaisher::prelude::*;
///
/// assert_eq!(partitions(5).count(), 7);
/// ```
pub mod prelude {
    pub use crate::bijection::{odd_to_unique, unique_to_odd};
    pub use crate::correspondence::Correspondence;
    pub use crate::enumerate::{distinct_partitions, odd_partitions, partitions};
    pub use crate::error::PartitionError;
    pub use crate::partition::Partition;
    pub use crate::tableau::YoungDiagram;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_example_roundtrip() {
        let p: Partition = "10 + 2 + 1".parse().unwrap();
        let odd = unique_to_odd(&p);
        assert_eq!(odd.parts(), &[5, 5, 1, 1, 1]);
        assert_eq!(odd.total(), p.total());
        assert_eq!(odd_to_unique(&odd), p);
    }

    #[test]
    fn euler_for_small_n() {
        for n in 1..=15 {
            assert_eq!(
                distinct_partitions(n).count(),
                odd_partitions(n).count(),
                "n = {n}"
            );
        }
    }

    #[test]
    fn enumeration_agrees_with_series() {
        let p = series::partition_series(18);
        for n in 1..=18u32 {
            assert_eq!(partitions(n).count() as u64, p[n as usize], "n = {n}");
        }
    }
}
