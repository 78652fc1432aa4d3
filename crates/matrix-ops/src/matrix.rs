use std::fmt;
use std::io::{self, Write};
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, MatrixResult, Operand};

/// Row-major matrix of `f64` stored as a list of rows.
///
/// Rows are not required to share a length when the matrix is built with
/// [`Matrix::from_rows`] or deserialized; every operation checks
/// [`Matrix::is_valid`] before touching the data. Cloning gives a deep copy
/// that keeps each row's own length.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// The 0x0 matrix.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Zero-filled `rows` x `cols` matrix.
    ///
    /// `zeros(0, 0)` is the empty matrix. A shape with exactly one zero
    /// dimension would never pass [`Matrix::is_valid`], so it is rejected
    /// with [`MatrixError::InvalidDimensions`].
    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        if (rows == 0) != (cols == 0) {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        Ok(Self::filled(rows, cols, 0.0))
    }

    /// Square matrix with 1.0 on the main diagonal.
    pub fn identity(size: usize) -> Self {
        let mut mat = Self::filled(size, size, 0.0);
        for i in 0..size {
            mat.rows[i][i] = 1.0;
        }
        mat
    }

    pub(crate) fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows: vec![vec![value; cols]; rows],
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, or 0 when there are no rows.
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `(rows, cols)` as reported by [`Matrix::nrows`] and [`Matrix::ncols`].
    /// Ragged rows past the first are not inspected.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// True for the empty matrix, or when every row has the first row's
    /// length and that length is non-zero.
    pub fn is_valid(&self) -> bool {
        let (rows, cols) = self.shape();
        if rows == 0 {
            return true;
        }
        if cols == 0 {
            return false;
        }
        self.rows[1..].iter().all(|row| row.len() == cols)
    }

    /// A valid matrix with a single row or a single column.
    pub fn is_vector(&self) -> bool {
        let (rows, cols) = self.shape();
        self.is_valid() && (rows == 1 || cols == 1)
    }

    pub(crate) fn ensure_valid(&self, operand: Operand) -> MatrixResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            log::trace!(
                "Rejecting {} matrix with shape {:?} and row lengths {:?}",
                operand,
                self.shape(),
                self.rows.iter().map(Vec::len).collect::<Vec<_>>()
            );
            Err(MatrixError::InvalidMatrix { operand })
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Applies `f` to every cell, keeping each row's length.
    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|&v| f(v)).collect())
                .collect(),
        }
    }

    /// Writes the rendering produced by `Display` to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Prints the matrix to stdout, one line per row.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(value: Matrix) -> Self {
        value.rows
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}

/// Space-separated cells, one newline-terminated line per row. A formatter
/// precision (`{:.3}`) is applied to every cell.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (idx, value) in row.iter().enumerate() {
                if idx > 0 {
                    write!(f, " ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
