use std::error::Error;
use std::fmt;

/// Which argument of an operation was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The only argument of a unary operation.
    Input,
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Input => write!(f, "input"),
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// Binary operations that require compatible shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Multiply,
    Add,
}

/// Errors returned by matrix construction and operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Ragged rows, or exactly one of rows/cols is zero.
    InvalidMatrix { operand: Operand },
    /// Valid shapes that cannot be combined by `operation`.
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A valid matrix that is neither a single row nor a single column.
    NotAVector {
        operand: Operand,
        shape: (usize, usize),
    },
    /// Two vectors of different length once both are in row form.
    LengthMismatch { left: usize, right: usize },
    /// A column vector could not be turned into a row vector.
    TransposeFailure { operand: Operand },
    /// A zero-filled matrix was requested with exactly one zero dimension.
    InvalidDimensions { rows: usize, cols: usize },
}

pub type MatrixResult<T> = Result<T, MatrixError>;

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidMatrix { operand } => write!(
                f,
                "Bad {} matrix: rows must all have the same non-zero length",
                operand
            ),
            MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left,
                right,
            } => write!(
                f,
                "Cannot multiply {}x{} by {}x{}: number of columns of the first matrix \
                 should be equal to the number of rows of the second matrix",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::DimensionMismatch {
                operation: Operation::Add,
                left,
                right,
            } => write!(
                f,
                "Cannot add {}x{} and {}x{}: matrix sizes should be equal",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::NotAVector { operand, shape } => write!(
                f,
                "{} matrix ({}x{}) is not a vector",
                capitalize(operand),
                shape.0,
                shape.1
            ),
            MatrixError::LengthMismatch { left, right } => write!(
                f,
                "Vectors should be equal in length (got {} and {})",
                left, right
            ),
            MatrixError::TransposeFailure { operand } => {
                write!(f, "Couldn't transpose the {} matrix", operand)
            }
            MatrixError::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions ({}, {}): rows and columns must both be zero or both be positive",
                rows, cols
            ),
        }
    }
}

impl Error for MatrixError {}

fn capitalize(operand: &Operand) -> &'static str {
    match operand {
        Operand::Input => "Input",
        Operand::First => "First",
        Operand::Second => "Second",
    }
}
