//! Editor grids and their square topology.
//!
//! Purpose
//! - `Grid`: a checked, rectangular two-state cell grid as supplied by an editor.
//! - `topology`: filled squares in row-major order plus their 4-neighbour graph.
//! - `rand`: reproducible random polyominoes for benches and property tests.
//!
//! Malformed input (no rows, no columns, ragged rows, unknown cell characters)
//! is rejected when a `Grid` is built; everything downstream may assume a
//! well-formed rectangle.

pub mod rand;
mod topology;

pub use topology::{extract, AdjacencyGraph, Direction, EdgeRemoval, Neighbor, Square};

use std::fmt;
use std::str::FromStr;

/// Contract violations in grid input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    Empty,
    NoColumns,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    BadCell {
        row: usize,
        col: usize,
        ch: char,
    },
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no rows"),
            Self::NoColumns => write!(f, "grid has no columns"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} like the first row"
            ),
            Self::BadCell { row, col, ch } => {
                write!(f, "unexpected cell {ch:?} at row {row}, column {col}")
            }
            Self::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(f, "cell ({row},{col}) outside the {rows}x{cols} grid"),
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular grid of filled/empty cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Build from rows of flags. Every row must have the same, non-zero length.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::NoColumns);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// All-empty grid of the given size (at least 1×1).
    pub fn empty(rows: usize, cols: usize) -> Self {
        let (rows, cols) = (rows.max(1), cols.max(1));
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Smallest grid containing the given filled coordinates, shifted to the origin.
    pub fn from_coords(coords: &[(i32, i32)]) -> Self {
        let Some(&(r0, c0)) = coords.first() else {
            return Self::empty(1, 1);
        };
        let (mut rmin, mut rmax, mut cmin, mut cmax) = (r0, r0, c0, c0);
        for &(r, c) in coords {
            rmin = rmin.min(r);
            rmax = rmax.max(r);
            cmin = cmin.min(c);
            cmax = cmax.max(c);
        }
        let mut grid = Self::empty((rmax - rmin + 1) as usize, (cmax - cmin + 1) as usize);
        for &(r, c) in coords {
            let k = (r - rmin) as usize * grid.cols + (c - cmin) as usize;
            grid.cells[k] = true;
        }
        grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell state; out-of-range coordinates read as empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Set a cell; the grid never grows.
    pub fn set(&mut self, row: usize, col: usize, filled: bool) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = filled;
        Ok(())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Filled cells in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(k, _)| (k / self.cols, k % self.cols))
    }

    /// Crop to the bounding box of filled cells; an all-empty grid becomes 1×1.
    pub fn trimmed(&self) -> Self {
        let coords: Vec<(i32, i32)> = self
            .filled()
            .map(|(r, c)| (r as i32, c as i32))
            .collect();
        Self::from_coords(&coords)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// One line per row. Filled: `# g x X 1`; empty: `. ? - 0`.
    /// Blank lines before and after the grid are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let start = lines.iter().position(|l| !l.trim().is_empty());
        let end = lines.iter().rposition(|l| !l.trim().is_empty());
        let (Some(start), Some(end)) = (start, end) else {
            return Err(GridError::Empty);
        };
        let mut rows = Vec::with_capacity(end - start + 1);
        for (r, line) in lines[start..=end].iter().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' | 'g' | 'x' | 'X' | '1' => Ok(true),
                    '.' | '?' | '-' | '0' => Ok(false),
                    _ => Err(GridError::BadCell { row: r, col, ch }),
                })
                .collect::<Result<Vec<bool>, _>>()?;
            rows.push(row);
        }
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests;
