//! Young diagram layout: one row of unit cells per part, longest row first,
//! rows left-aligned.
//!
//! Cells are numbered row-major from 0, so the cells of one part form a
//! contiguous index range. That range is what gets coloured when a single
//! part is highlighted.

use core::fmt;
use core::ops::Range;

use crate::partition::Partition;

/// Position of a cell in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row index, 0 is the longest row.
    pub row: usize,
    /// Column index, 0 is the left edge.
    pub col: usize,
}

/// Row layout of a partition.
///
/// # Example
///
/// ```
/// use glaisher::{Partition, YoungDiagram};
///
/// let p: Partition = "1 + 5 + 1 + 5 + 1".parse().unwrap();
/// let yt = YoungDiagram::new(&p);
/// assert_eq!(yt.rows(), &[5, 5, 1, 1, 1]);
/// assert_eq!(yt.row_cells(1), Some(5..10));
/// assert_eq!(yt.cell_count(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoungDiagram {
    rows: Vec<u32>,
    /// Flat index of the first cell of each row, plus the total at the end.
    offsets: Vec<usize>,
}

impl YoungDiagram {
    /// Lays out `partition` with its parts sorted longest first.
    #[must_use]
    pub fn new(partition: &Partition) -> Self {
        let rows = partition.canonical().into_parts();
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        let mut acc = 0usize;
        offsets.push(acc);
        for &len in &rows {
            acc += len as usize;
            offsets.push(acc);
        }
        Self { rows, offsets }
    }

    /// Row lengths, non-increasing.
    #[must_use]
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Total number of cells, equal to the partitioned integer.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// Length of the first row, 0 for the empty diagram.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.rows.first().copied().unwrap_or(0)
    }

    /// Flat cell indices belonging to `row`.
    #[must_use]
    pub fn row_cells(&self, row: usize) -> Option<Range<usize>> {
        if row >= self.rows.len() {
            return None;
        }
        Some(self.offsets[row]..self.offsets[row + 1])
    }

    /// Every cell in flat-index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, &len)| (0..len as usize).map(move |col| Cell { row, col }))
    }

    /// Cell at a flat index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        if index >= self.cell_count() {
            return None;
        }
        // offsets is sorted; find the last row starting at or before index.
        let row = self.offsets.partition_point(|&start| start <= index) - 1;
        Some(Cell {
            row,
            col: index - self.offsets[row],
        })
    }
}

/// One line per row, `#` per cell.
impl fmt::Display for YoungDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &len) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for _ in 0..len {
                f.write_str("#")?;
            }
        }
        Ok(())
    }
}
