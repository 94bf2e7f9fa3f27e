//! Transient row-major grid used by the route transposition.
//!
//! Cells past the end of the text stay empty. Nothing is ever written there
//! and readers skip them, so no padding letter leaks into the output.

use crate::error::{CipherError, Result};

/// A `rows x cols` table of letters with empty trailing cells.
///
/// Built fresh for each encrypt/decrypt call and dropped afterwards.
#[derive(Debug)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Number of rows needed to hold `len` letters in `cols` columns.
    pub(crate) fn rows_for(len: usize, cols: usize) -> usize {
        len.div_ceil(cols)
    }

    /// Number of columns that can hold a letter. Columns at index `len` or
    /// beyond are always empty, so they are never allocated.
    fn width_for(len: usize, cols: usize) -> usize {
        cols.min(len)
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Writes `text` left-to-right, top-to-bottom.
    pub(crate) fn from_rows(text: &[char], cols: usize) -> Self {
        let rows = Self::rows_for(text.len(), cols);
        let mut grid = Self::empty(rows, Self::width_for(text.len(), cols));
        for (cell, &c) in grid.cells.iter_mut().zip(text) {
            *cell = Some(c);
        }
        grid
    }

    /// Writes `text` column by column from the last column to the first,
    /// top-to-bottom within a column.
    ///
    /// Only the first `len mod cols` columns (all of them when the remainder
    /// is zero) reach the final row; the others are one cell shorter.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidCipherLength`] if the column heights do
    /// not account for exactly `text.len()` cells.
    pub(crate) fn from_columns_reversed(text: &[char], cols: usize) -> Result<Self> {
        let len = text.len();
        let rows = Self::rows_for(len, cols);
        let full_cols = match len % cols {
            0 => cols,
            r => r,
        };
        let width = Self::width_for(len, cols);
        let mut grid = Self::empty(rows, width);
        let mut letters = text.iter();
        let mut written = 0;
        for c in (0..width).rev() {
            let height = if c < full_cols { rows } else { rows - 1 };
            for r in 0..height {
                let Some(&letter) = letters.next() else {
                    return Err(CipherError::InvalidCipherLength {
                        length: len,
                        capacity: written,
                    });
                };
                grid.cells[r * width + c] = Some(letter);
                written += 1;
            }
        }
        if written != len {
            return Err(CipherError::InvalidCipherLength {
                length: len,
                capacity: written,
            });
        }
        Ok(grid)
    }

    /// Reads non-empty cells column by column, last column first.
    pub(crate) fn read_columns_reversed(&self) -> String {
        (0..self.cols)
            .rev()
            .flat_map(|c| (0..self.rows).map(move |r| (r, c)))
            .filter_map(|(r, c)| self.cells[r * self.cols + c])
            .collect()
    }

    /// Reads non-empty cells row by row.
    pub(crate) fn read_rows(&self) -> String {
        self.cells.iter().flatten().collect()
    }
}
