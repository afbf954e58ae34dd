//! # Dense matrices
//!
//! Row major matrices stored in a single contiguous buffer. Dimensions are fixed at creation.
use std::fmt;
use std::fmt::Display;

use num_traits::Float;

use crate::data::linear_program::problem::DimensionError;

/// Uses one `Vec<F>` of `nr_rows * nr_columns` values as underlying data structure.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float> Dense<F> {
    /// Create a matrix from a row major buffer.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows `m`.
    /// * `nr_columns`: Number of columns `n`.
    /// * `data`: Values `a_ij` at index `i * n + j`.
    ///
    /// # Errors
    ///
    /// If the length of `data` is not `m * n`. When `m * n` overflows, the expected length is
    /// reported as `usize::MAX`.
    pub fn new(nr_rows: usize, nr_columns: usize, data: Vec<F>) -> Result<Self, DimensionError> {
        let expected = nr_rows.checked_mul(nr_columns);
        if expected != Some(data.len()) {
            return Err(DimensionError::Buffer {
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a matrix from a list of rows.
    ///
    /// The number of columns is taken from the first row; an empty list gives a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// If not all rows have the same length.
    pub fn from_rows<R: AsRef<[F]>>(rows: &[R]) -> Result<Self, DimensionError> {
        let nr_columns = rows.first().map_or(0, |row| row.as_ref().len());

        let mut data = Vec::with_capacity(rows.len() * nr_columns);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != nr_columns {
                return Err(DimensionError::Row { row: i, expected: nr_columns, actual: row.len() });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { data, nr_rows: rows.len(), nr_columns })
    }

    /// Create a matrix of zeros.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![F::zero(); nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Get the value at row `i` and column `j`.
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i * self.nr_columns + j]
    }

    /// Set the value at row `i` and column `j`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i * self.nr_columns + j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        let start = i * self.nr_columns;
        &self.data[start..start + self.nr_columns]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> {
        (0..self.nr_rows).map(move |i| self.row(i))
    }

    /// Divide every value in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: F) {
        debug_assert!(i < self.nr_rows);

        let start = i * self.nr_columns;
        for value in &mut self.data[start..start + self.nr_columns] {
            *value = *value / divisor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        let read_start = read_row * self.nr_columns;
        let write_start = write_row * self.nr_columns;
        for j in 0..self.nr_columns {
            let read = self.data[read_start + j];
            let write = &mut self.data[write_start + j];
            *write = *write + factor * read;
        }
    }

    /// Number of rows `m`.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns `n`.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: Float + Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{:>10.4}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
