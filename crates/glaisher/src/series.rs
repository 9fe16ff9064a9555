//! Truncated generating functions for the three partition families.
//!
//! ```text
//! Σ #distinct(n) q^n = ∏ (1 + q^k)
//!                    = ∏ (1 - q^{2k}) / (1 - q^k)
//!                    = ∏ 1 / (1 - q^{2k-1})   = Σ #odd(n) q^n
//! Σ p(n) q^n         = ∏ 1 / (1 - q^k)
//! ```
//!
//! Each function returns the coefficients of `q^0 ..= q^max`, with `max`
//! at most [`SERIES_MAX`] so every coefficient fits in a `u64`.

/// Largest `max` accepted by the series functions. p(400) is about
/// 6.7 · 10^18; p(417) no longer fits in a `u64`.
pub const SERIES_MAX: usize = 400;

/// Coefficients of `∏_{k>=1} (1 + q^k)` up to `q^max`.
///
/// # Panics
///
/// Panics if `max` exceeds [`SERIES_MAX`].
///
/// ```
/// use glaisher::series::distinct_parts_series;
///
/// assert_eq!(distinct_parts_series(6), vec![1, 1, 1, 2, 2, 3, 4]);
/// ```
#[must_use]
pub fn distinct_parts_series(max: usize) -> Vec<u64> {
    let mut coeffs = unit_series(max);
    for k in 1..=max {
        // Multiply by (1 + q^k); walk downward so each factor is used once.
        for n in (k..=max).rev() {
            coeffs[n] += coeffs[n - k];
        }
    }
    coeffs
}

/// Coefficients of `∏_{k>=1} 1 / (1 - q^(2k-1))` up to `q^max`.
///
/// # Panics
///
/// Panics if `max` exceeds [`SERIES_MAX`].
#[must_use]
pub fn odd_parts_series(max: usize) -> Vec<u64> {
    geometric_product(max, (1..=max).step_by(2))
}

/// Coefficients of `∏_{k>=1} 1 / (1 - q^k)` up to `q^max`: the partition
/// numbers p(0), p(1), ..., p(max).
///
/// # Panics
///
/// Panics if `max` exceeds [`SERIES_MAX`].
///
/// ```
/// use glaisher::series::partition_series;
///
/// assert_eq!(partition_series(10)[10], 42);
/// ```
#[must_use]
pub fn partition_series(max: usize) -> Vec<u64> {
    geometric_product(max, 1..=max)
}

/// Multiplies 1 by `1 / (1 - q^k)` for every `k` in `exponents`.
fn geometric_product(max: usize, exponents: impl Iterator<Item = usize>) -> Vec<u64> {
    let mut coeffs = unit_series(max);
    for k in exponents {
        // Walk upward so each factor may be reused any number of times.
        for n in k..=max {
            coeffs[n] += coeffs[n - k];
        }
    }
    coeffs
}

fn unit_series(max: usize) -> Vec<u64> {
    assert!(
        max <= SERIES_MAX,
        "series up to q^{max} overflows u64; the limit is q^{SERIES_MAX}"
    );
    let mut coeffs = vec![0u64; max + 1];
    coeffs[0] = 1;
    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: [u64; 21] = [
        1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77, 101, 135, 176, 231, 297, 385, 490, 627,
    ];

    #[test]
    fn partition_numbers() {
        assert_eq!(partition_series(20), P.to_vec());
    }

    #[test]
    fn euler_identity_as_series() {
        assert_eq!(distinct_parts_series(60), odd_parts_series(60));
    }

    #[test]
    fn thirteen_has_eighteen() {
        assert_eq!(distinct_parts_series(13)[13], 18);
    }

    #[test]
    fn zero_length_series() {
        assert_eq!(partition_series(0), vec![1]);
        assert_eq!(distinct_parts_series(0), vec![1]);
        assert_eq!(odd_parts_series(0), vec![1]);
    }

    #[test]
    fn largest_series_fits() {
        let p = partition_series(SERIES_MAX);
        assert_eq!(p[SERIES_MAX], 6_727_090_051_741_041_926);
        assert_eq!(distinct_parts_series(SERIES_MAX), odd_parts_series(SERIES_MAX));
    }

    #[test]
    #[should_panic(expected = "overflows u64")]
    fn beyond_limit_panics() {
        let _ = partition_series(SERIES_MAX + 1);
    }

    #[test]
    fn odd_series_small_values() {
        // 1, 1, 1, 2, 2, 3, 4, 5, 6, 8
        assert_eq!(odd_parts_series(9), vec![1, 1, 1, 2, 2, 3, 4, 5, 6, 8]);
    }
}
