//! Scalar arithmetic and dense matrix operations for the calculator service.
//!
//! `calc-engine` is the transport-independent core of the calculator. Every
//! operation is a pure function of its inputs: no shared state, no I/O, so
//! requests can be evaluated concurrently from any number of threads.
//!
//! # Operations
//!
//! - [`evaluate_arithmetic`]: `lhs <op> rhs` for add, sub, mult, div and mod
//! - [`multiply_matrices`]: additive accumulation over mutually
//!   transposable shapes
//! - [`transpose_matrix`]
//! - [`dispatch`]: routes a decoded [`Request`] to the matching operation
//!
//! # Example
//!
//! ```
//! use calc_engine::{ArithmeticOperation, BinaryOperation, Matrix};
//!
//! let op = ArithmeticOperation::new(BinaryOperation::Addition, 2.0, 3.0);
//! assert_eq!(calc_engine::evaluate_arithmetic(&op), Ok(5.0));
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
//! let t = calc_engine::transpose_matrix(&a);
//! assert_eq!(t.data(), &[vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
//! ```

mod dispatch;
mod error;
mod matrix;
mod scalar;

pub use dispatch::{
    Request, Response, dispatch, evaluate_arithmetic, multiply_matrices, transpose_matrix,
};
pub use error::{ArithmeticError, Error, MatrixError, ParseOperationError};
pub use matrix::Matrix;
pub use scalar::{ArithmeticOperation, BinaryOperation};
