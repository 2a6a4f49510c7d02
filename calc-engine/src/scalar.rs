//! Scalar arithmetic over tagged binary operations.

use crate::{ArithmeticError, ParseOperationError};

/// The closed set of binary operations the calculator understands.
///
/// Tags match the wire encoding: `0` is reserved for "unspecified" and is
/// rejected along with every other unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    Addition = 1,
    Subtraction = 2,
    Multiplication = 3,
    Division = 4,
    Modulus = 5,
}

impl TryFrom<i32> for BinaryOperation {
    type Error = ArithmeticError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::Addition),
            2 => Ok(Self::Subtraction),
            3 => Ok(Self::Multiplication),
            4 => Ok(Self::Division),
            5 => Ok(Self::Modulus),
            other => Err(ArithmeticError::InvalidOperator(other)),
        }
    }
}

impl std::str::FromStr for BinaryOperation {
    type Err = ParseOperationError;

    /// Parses the short names used on the command line (`add`, `sub`,
    /// `mult`, `div`, `mod`) as well as the operator symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" | "+" => Ok(Self::Addition),
            "sub" | "-" => Ok(Self::Subtraction),
            "mult" | "*" => Ok(Self::Multiplication),
            "div" | "/" => Ok(Self::Division),
            "mod" | "%" => Ok(Self::Modulus),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}

/// A single binary operation request: `lhs <op> rhs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArithmeticOperation {
    pub op: BinaryOperation,
    pub lhs: f64,
    pub rhs: f64,
}

impl ArithmeticOperation {
    pub fn new(op: BinaryOperation, lhs: f64, rhs: f64) -> Self {
        Self { op, lhs, rhs }
    }

    /// Builds an operation from a raw wire tag.
    pub fn from_raw(op: i32, lhs: f64, rhs: f64) -> Result<Self, ArithmeticError> {
        Ok(Self::new(BinaryOperation::try_from(op)?, lhs, rhs))
    }
}

/// Evaluates `op`.
///
/// Division and modulus by an exact zero (`0.0` or `-0.0`) are rejected.
/// Modulus follows C `fmod`: the result carries the sign of `lhs`.
pub fn evaluate(op: &ArithmeticOperation) -> Result<f64, ArithmeticError> {
    let ArithmeticOperation { op, lhs, rhs } = *op;
    match op {
        BinaryOperation::Addition => Ok(lhs + rhs),
        BinaryOperation::Subtraction => Ok(lhs - rhs),
        BinaryOperation::Multiplication => Ok(lhs * rhs),
        BinaryOperation::Division => {
            if rhs == 0.0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            Ok(lhs / rhs)
        }
        BinaryOperation::Modulus => {
            if rhs == 0.0 {
                return Err(ArithmeticError::ModulusByZero);
            }
            Ok(lhs % rhs)
        }
    }
}
