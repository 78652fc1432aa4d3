//! matrix-ops: small dense-matrix helpers.
//!
//! A [`Matrix`] is a list of `f64` rows. Matrices are checked with
//! [`Matrix::is_valid`] before every operation rather than at construction,
//! so ragged input is representable but always rejected with
//! [`MatrixError::InvalidMatrix`].
//!
//! Operations (transpose, scaling, products, sums and vector dot products)
//! borrow their inputs and return new values; nothing is mutated in place
//! and no state is kept between calls.
pub mod error;
pub mod matrix;
pub mod ops;

pub use error::{MatrixError, MatrixResult, Operand, Operation};
pub use matrix::Matrix;
