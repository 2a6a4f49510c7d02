//! Conversions between wire messages and engine types.

use calc_engine::{ArithmeticOperation, Matrix, MatrixError};
use calc_server_types::calculator as pb;
use tonic::{Code, Status};

const MALFORMED: &str = "malformed request: ";

/// Largest column count accepted for a matrix with no rows. Such a matrix
/// carries no data to back its declared width, yet transposing it allocates
/// one row per column.
pub const MAX_EMPTY_MATRIX_COLS: usize = 1 << 16;

pub fn arithmetic_from_wire(
    op: &pb::ArithmeticOperation,
) -> Result<ArithmeticOperation, calc_engine::Error> {
    Ok(ArithmeticOperation::from_raw(op.op, op.lh_term, op.rh_term)?)
}

pub fn matrix_from_wire(matrix: pb::Matrix) -> Result<Matrix, Status> {
    let rows = dimension(matrix.rows)?;
    let cols = dimension(matrix.cols)?;
    if rows == 0 && cols > MAX_EMPTY_MATRIX_COLS {
        return Err(Status::invalid_argument(format!(
            "{MALFORMED}matrix with no rows declares {cols} columns \
             (limit {MAX_EMPTY_MATRIX_COLS})"
        )));
    }
    let data = matrix.data.into_iter().map(|row| row.values).collect();
    Matrix::new(rows, cols, data).map_err(|err| malformed(&err))
}

pub fn required_matrix(matrix: Option<pb::Matrix>, field: &str) -> Result<Matrix, Status> {
    let matrix = matrix
        .ok_or_else(|| Status::invalid_argument(format!("{MALFORMED}missing field `{field}`")))?;
    matrix_from_wire(matrix)
}

pub fn matrix_to_wire(matrix: Matrix) -> pb::Matrix {
    let rows = matrix.rows() as u64;
    let cols = matrix.cols() as u64;
    let data = matrix
        .into_data()
        .into_iter()
        .map(|values| pb::Row { values })
        .collect();
    pb::Matrix { rows, cols, data }
}

/// Translates an engine failure into the status returned to the client.
/// The status message is the failure's exact display string.
pub fn status_from_error(err: &calc_engine::Error) -> Status {
    match err {
        calc_engine::Error::Arithmetic(e) => Status::new(Code::InvalidArgument, e.to_string()),
        calc_engine::Error::Matrix(e @ MatrixError::InvalidDimensions { .. }) => {
            Status::new(Code::FailedPrecondition, e.to_string())
        }
        calc_engine::Error::Matrix(e @ MatrixError::Malformed { .. }) => malformed(e),
    }
}

fn malformed(err: &MatrixError) -> Status {
    Status::invalid_argument(format!("{MALFORMED}{err}"))
}

fn dimension(value: u64) -> Result<usize, Status> {
    usize::try_from(value).map_err(|_| {
        Status::invalid_argument(format!("{MALFORMED}dimension {value} is too large"))
    })
}
