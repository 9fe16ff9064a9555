//! Text form of a partition.
//!
//! Accepts the forms people actually type: `10 + 2 + 1`, `10,2,1`,
//! `10 2 1`, `(10, 2, 1)` and `[10, 2, 1]`.

use std::str::FromStr;

use super::Partition;
use crate::error::PartitionError;

impl FromStr for Partition {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = strip_brackets(s.trim());
        let parts = body
            .split(|c: char| c == '+' || c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_part)
            .collect::<Result<Vec<_>, _>>()?;
        if parts.is_empty() {
            return Err(PartitionError::Empty);
        }
        Self::new(parts)
    }
}

fn strip_brackets(s: &str) -> &str {
    for (open, close) in [('(', ')'), ('[', ']')] {
        if let Some(inner) = s.strip_prefix(open).and_then(|r| r.strip_suffix(close)) {
            return inner;
        }
    }
    s
}

fn parse_part(token: &str) -> Result<u32, PartitionError> {
    token.parse::<u32>().map_err(|_| PartitionError::InvalidPart {
        token: token.to_string(),
    })
}
