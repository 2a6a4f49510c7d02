//! Dense row-major matrices and the matrix operations served by the calculator.

use crate::MatrixError;

/// A dense `rows × cols` matrix stored row-major.
///
/// A `Matrix` always satisfies `data.len() == rows` and every row has exactly
/// `cols` elements; [`Matrix::new`] rejects anything else.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Creates a matrix with declared dimensions, validating the row data
    /// against them.
    pub fn new(rows: usize, cols: usize, data: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        if data.len() != rows {
            return Err(MatrixError::Malformed {
                rows,
                cols,
                reason: format!("has {} rows", data.len()),
            });
        }
        if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MatrixError::Malformed {
                rows,
                cols,
                reason: format!("row {} has {} columns", i, row.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from its rows, taking the column count from the
    /// first row. An empty `data` yields a `0 × 0` matrix.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        Self::new(rows, cols, data)
    }

    /// A `rows × cols` matrix filled with `1.0, 2.0, 3.0, ...` in row-major
    /// order.
    pub fn sequential(rows: usize, cols: usize) -> Self {
        let data = (0..rows)
            .map(|i| (0..cols).map(|j| (i * cols + j + 1) as f64).collect())
            .collect();
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn into_data(self) -> Vec<Vec<f64>> {
        self.data
    }

    /// Returns the element at `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get(i)?.get(j).copied()
    }
}

/// Combines `a` and `b` into an `a.rows × b.cols` matrix.
///
/// Both `a.cols == b.rows` and `a.rows == b.cols` must hold. Each cell
/// accumulates the *sum* of the paired elements:
///
/// ```text
/// C[i][j] = Σ_{k < b.rows} (A[i][k] + B[k][j])
/// ```
///
/// This is not the standard matrix product; callers relying on the service
/// contract depend on this exact formula.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols != b.rows || a.rows != b.cols {
        return Err(MatrixError::InvalidDimensions {
            lhs: (a.rows, a.cols),
            rhs: (b.rows, b.cols),
        });
    }

    let mut data = Vec::with_capacity(a.rows);
    for i in 0..a.rows {
        let mut row = Vec::with_capacity(b.cols);
        for j in 0..b.cols {
            let mut sum = 0.0;
            for k in 0..b.rows {
                sum += a.data[i][k] + b.data[k][j];
            }
            row.push(sum);
        }
        data.push(row);
    }

    Ok(Matrix {
        rows: a.rows,
        cols: b.cols,
        data,
    })
}

/// Returns the transpose of `a`. Never fails; a matrix with zero rows or
/// columns transposes to one with zero columns or rows.
///
/// The result holds one row per column of `a`, so a `0 × n` input still
/// allocates `n` empty rows. Untrusted shapes must be bounded before they
/// reach here.
pub fn transpose(a: &Matrix) -> Matrix {
    let data = (0..a.cols)
        .map(|j| a.data.iter().map(|row| row[j]).collect())
        .collect();

    Matrix {
        rows: a.cols,
        cols: a.rows,
        data,
    }
}
