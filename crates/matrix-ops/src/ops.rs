//! Transpose, products and sums.
//!
//! Every operation validates its inputs first and returns the first
//! violated precondition. Inputs are borrowed and never modified; results
//! are freshly allocated. Sums are accumulated from `0.0` in ascending
//! index order, so results are reproducible bit for bit.

use crate::error::{MatrixError, MatrixResult, Operand, Operation};
use crate::matrix::Matrix;

impl Matrix {
    /// Returns the `cols` x `rows` matrix with `out[j][i] = self[i][j]`.
    pub fn transpose(&self) -> MatrixResult<Matrix> {
        self.ensure_valid(Operand::Input)?;

        let (rows, cols) = self.shape();
        let mut out = Matrix::filled(cols, rows, 0.0);
        for (i, row) in self.rows().iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                out[(j, i)] = value;
            }
        }
        Ok(out)
    }

    /// Multiplies every cell by `scalar`. NaN and infinities propagate as usual.
    pub fn scale(&self, scalar: f64) -> MatrixResult<Matrix> {
        self.ensure_valid(Operand::Input)?;
        Ok(self.mapv(|v| v * scalar))
    }

    /// Matrix product `self * rhs`.
    ///
    /// Requires `self.ncols() == rhs.nrows()`. Each output cell is the inner
    /// product of a row of `self` and a column of `rhs`.
    pub fn multiply(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        self.ensure_valid(Operand::First)?;
        rhs.ensure_valid(Operand::Second)?;

        let (rows1, cols1) = self.shape();
        let (rows2, cols2) = rhs.shape();
        if cols1 != rows2 {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left: (rows1, cols1),
                right: (rows2, cols2),
            });
        }

        let mut out = Matrix::filled(rows1, cols2, 0.0);
        for r in 0..rows1 {
            let lhs_row = self.row(r);
            for c in 0..cols2 {
                let mut sum = 0.0;
                for (k, &a) in lhs_row.iter().enumerate() {
                    sum += a * rhs[(k, c)];
                }
                out[(r, c)] = sum;
            }
        }
        Ok(out)
    }

    /// Elementwise sum. The result starts as a copy of `self`.
    pub fn add(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        self.ensure_valid(Operand::First)?;
        rhs.ensure_valid(Operand::Second)?;

        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Add,
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut out = self.clone();
        for (out_row, rhs_row) in out.rows_mut().iter_mut().zip(rhs.rows()) {
            for (x, &y) in out_row.iter_mut().zip(rhs_row) {
                *x += y;
            }
        }
        Ok(out)
    }

    /// Dot product of two vectors.
    ///
    /// Either operand may be a row or a column vector; column vectors are
    /// transposed from a copy before the lengths are compared.
    pub fn dot(&self, rhs: &Matrix) -> MatrixResult<f64> {
        self.ensure_valid(Operand::First)?;
        rhs.ensure_valid(Operand::Second)?;

        ensure_vector(self, Operand::First)?;
        ensure_vector(rhs, Operand::Second)?;

        let lhs = as_row_vector(self, Operand::First)?;
        let rhs = as_row_vector(rhs, Operand::Second)?;

        let (left, right) = (lhs.ncols(), rhs.ncols());
        if left != right {
            return Err(MatrixError::LengthMismatch { left, right });
        }

        let mut sum = 0.0;
        for (&a, &b) in lhs.row(0).iter().zip(rhs.row(0)) {
            sum += a * b;
        }
        Ok(sum)
    }
}

fn ensure_vector(mat: &Matrix, operand: Operand) -> MatrixResult<()> {
    let (rows, cols) = mat.shape();
    if rows == 1 || cols == 1 {
        Ok(())
    } else {
        Err(MatrixError::NotAVector {
            operand,
            shape: (rows, cols),
        })
    }
}

fn as_row_vector(mat: &Matrix, operand: Operand) -> MatrixResult<Matrix> {
    if mat.nrows() == 1 {
        return Ok(mat.clone());
    }
    mat.clone()
        .transpose()
        .map_err(|_| MatrixError::TransposeFailure { operand })
}
