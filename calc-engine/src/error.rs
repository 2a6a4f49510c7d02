//! Error types for calc-engine operations.

use thiserror::Error;

/// Failure of a scalar arithmetic evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Division by zero error!")]
    DivisionByZero,

    #[error("Modulus by zero error!")]
    ModulusByZero,

    /// The raw operator tag did not name a known operation.
    #[error("Invalid binary operator provided!")]
    InvalidOperator(i32),
}

/// An operator name that does not match any [`BinaryOperation`](crate::BinaryOperation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator {0:?}: expected one of add, sub, mult, div, mod")]
pub struct ParseOperationError(pub String);

/// Failure of a matrix operation or of matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("Matrices have invalid dimensions for multiplication!")]
    InvalidDimensions {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("matrix declared as {rows}x{cols} but {reason}")]
    Malformed {
        rows: usize,
        cols: usize,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
