//! Errors raised when building, parsing or mapping partitions.

use thiserror::Error;

/// Error produced by partition construction, parsing and the checked mappers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// The input held no parts at all.
    #[error("partition has no parts")]
    Empty,

    /// A token could not be read as a positive integer.
    #[error("invalid part '{token}'")]
    InvalidPart {
        /// The offending token, as written.
        token: String,
    },

    /// A part of zero was supplied. Parts are always at least 1.
    #[error("partition parts must be at least 1, found 0")]
    ZeroPart,

    /// A distinct-parts partition was required but a part repeats.
    #[error("part {part} repeats; expected pairwise distinct parts")]
    RepeatedPart {
        /// The first repeated part value.
        part: u32,
    },

    /// An odd-parts partition was required but a part is even.
    #[error("part {part} is even; expected only odd parts")]
    EvenPart {
        /// The first even part value.
        part: u32,
    },

    /// Regrouping copies of an odd base would build a part larger than
    /// `u32::MAX`.
    #[error("part {base} · 2^{exponent} does not fit in u32")]
    PartOverflow {
        /// The odd base being regrouped.
        base: u32,
        /// Exponent of the power of two it is multiplied by.
        exponent: u32,
    },
}
