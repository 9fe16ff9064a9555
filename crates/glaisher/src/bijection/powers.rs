//! Splitting integers into powers of two.
//!
//! Two views of the same fact drive Glaisher's bijection:
//! - a part `p` is uniquely `base · 2^j` with `base` odd,
//! - a multiplicity `m` is uniquely a sum of distinct powers of two.

use core::fmt;

/// `value = base · 2^exponent` with `base` odd.
///
/// # Example
///
/// ```
/// use glaisher::{decompose, OddDecomposition};
///
/// assert_eq!(decompose(10), OddDecomposition { base: 5, exponent: 1 });
/// assert_eq!(decompose(10).to_string(), "2^1 · 5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OddDecomposition {
    /// The odd factor.
    pub base: u32,
    /// Number of times two divides the value.
    pub exponent: u32,
}

impl OddDecomposition {
    /// The power of two, `2^exponent`.
    #[inline]
    #[must_use]
    pub const fn power(self) -> u32 {
        1 << self.exponent
    }

    /// Reassembles `base · 2^exponent`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.base << self.exponent
    }
}

impl fmt::Display for OddDecomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "2^{} · {}", self.exponent, self.base)
    }
}

/// Strips every factor of two from `part`.
///
/// # Panics
///
/// Panics if `part` is 0, which has no odd factor.
#[must_use]
pub fn decompose(part: u32) -> OddDecomposition {
    assert!(part != 0, "cannot decompose 0 into an odd base");
    let exponent = part.trailing_zeros();
    OddDecomposition {
        base: part >> exponent,
        exponent,
    }
}

/// Exponents of the set bits of `multiplicity`, lowest first.
///
/// These are the `j` with `multiplicity = Σ 2^j`; a block of `multiplicity`
/// copies of an odd base regroups into the distinct parts `base · 2^j`.
///
/// ```
/// use glaisher::binary_multiplicity;
///
/// // 3 = [11]_2 = 2^0 + 2^1
/// assert_eq!(binary_multiplicity(3), vec![0, 1]);
/// assert_eq!(binary_multiplicity(10), vec![1, 3]);
/// ```
#[must_use]
pub fn binary_multiplicity(multiplicity: u32) -> Vec<u32> {
    (0..u32::BITS)
        .filter(|bit| multiplicity & (1 << bit) != 0)
        .collect()
}
