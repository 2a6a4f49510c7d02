//! Routing of decoded requests to the engines.

use crate::matrix::{self, Matrix};
use crate::scalar::{self, ArithmeticOperation};
use crate::{ArithmeticError, Error, MatrixError};

/// A decoded calculator request.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Arithmetic(ArithmeticOperation),
    Multiply(Matrix, Matrix),
    Transpose(Matrix),
}

/// The successful outcome of a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Value(f64),
    Matrix(Matrix),
}

impl Request {
    /// Short name of the operation, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Request::Arithmetic(_) => "calc",
            Request::Multiply(..) => "mult",
            Request::Transpose(_) => "transpose",
        }
    }
}

/// Routes `request` to its engine. Engine failures are returned unchanged.
pub fn dispatch(request: &Request) -> Result<Response, Error> {
    match request {
        Request::Arithmetic(op) => Ok(Response::Value(evaluate_arithmetic(op)?)),
        Request::Multiply(a, b) => Ok(Response::Matrix(multiply_matrices(a, b)?)),
        Request::Transpose(a) => Ok(Response::Matrix(transpose_matrix(a))),
    }
}

pub fn evaluate_arithmetic(op: &ArithmeticOperation) -> Result<f64, ArithmeticError> {
    scalar::evaluate(op)
}

pub fn multiply_matrices(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    matrix::multiply(a, b)
}

pub fn transpose_matrix(a: &Matrix) -> Matrix {
    matrix::transpose(a)
}
