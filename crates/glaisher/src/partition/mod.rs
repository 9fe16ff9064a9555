//! Partitions of a non-negative integer as ordered sequences of parts.
//!
//! A [`Partition`] keeps its parts in the order they were produced. The
//! generator emits non-decreasing sequences and the bijection emits
//! non-increasing ones; callers that need a fixed orientation use
//! [`Partition::canonical`].
//!
//! # Example
//!
//! ```
//! use glaisher::Partition;
//!
//! let p: Partition = "(1, 1, 2)".parse().unwrap();
//! assert_eq!(p.to_string(), "1 + 1 + 2");
//! assert_eq!(p.multiplicities(), vec![(2, 1), (1, 2)]);
//! ```

mod parse;
mod parts;

pub use parts::Partition;
