//! Async client for the calculator service.

use calc_engine::{BinaryOperation, Matrix};
use calc_server_types::calculator as pb;
use calc_server_types::calculator::calculator_client::CalculatorClient;
use tonic::transport::{Channel, Endpoint};

use crate::error::Error;

/// A connection to a calculator server.
///
/// The underlying channel is cheap to clone, so calls take `&self` and may be
/// issued concurrently from several tasks.
///
/// # Example
///
/// ```no_run
/// use calc_client::CalcClient;
/// use calc_engine::BinaryOperation;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CalcClient::connect("localhost:9090").await?;
///     assert_eq!(client.calc(BinaryOperation::Addition, 2.0, 3.0).await?, 5.0);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CalcClient {
    client: CalculatorClient<Channel>,
}

impl CalcClient {
    /// Connects to a calculator server.
    ///
    /// # Arguments
    ///
    /// * `addr` - Server address (e.g., `"localhost:9090"`)
    pub async fn connect(addr: impl Into<ServerAddr>) -> Result<Self, Error> {
        let server_addr = addr.into();
        let endpoint = Endpoint::from_shared(format!("http://{}", server_addr.0))?;
        let channel = endpoint.connect().await?;
        Ok(Self {
            client: CalculatorClient::new(channel),
        })
    }

    /// Evaluates `lhs <op> rhs` on the server.
    pub async fn calc(&self, op: BinaryOperation, lhs: f64, rhs: f64) -> Result<f64, Error> {
        self.calc_raw(op as i32, lhs, rhs).await
    }

    /// Like [`calc`](Self::calc) but sends the operator tag as-is, without
    /// checking it locally.
    pub async fn calc_raw(&self, op: i32, lhs: f64, rhs: f64) -> Result<f64, Error> {
        let request = pb::ArithmeticOperation {
            op,
            lh_term: lhs,
            rh_term: rhs,
        };
        let response = self
            .client
            .clone()
            .calc(request)
            .await
            .map_err(Error::from_status)?;
        Ok(response.into_inner().value)
    }

    pub async fn mult(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
        let request = pb::MultiplyRequest {
            a: Some(to_wire(a)),
            b: Some(to_wire(b)),
        };
        let response = self
            .client
            .clone()
            .mult(request)
            .await
            .map_err(Error::from_status)?;
        from_wire(response.into_inner())
    }

    pub async fn transpose(&self, matrix: &Matrix) -> Result<Matrix, Error> {
        let request = pb::TransposeRequest {
            matrix: Some(to_wire(matrix)),
        };
        let response = self
            .client
            .clone()
            .transpose(request)
            .await
            .map_err(Error::from_status)?;
        from_wire(response.into_inner())
    }
}

fn to_wire(matrix: &Matrix) -> pb::Matrix {
    pb::Matrix {
        rows: matrix.rows() as u64,
        cols: matrix.cols() as u64,
        data: matrix
            .data()
            .iter()
            .map(|row| pb::Row {
                values: row.clone(),
            })
            .collect(),
    }
}

fn from_wire(matrix: pb::Matrix) -> Result<Matrix, Error> {
    let rows = dimension(matrix.rows)?;
    let cols = dimension(matrix.cols)?;
    let data = matrix.data.into_iter().map(|row| row.values).collect();
    Ok(Matrix::new(rows, cols, data)?)
}

fn dimension(value: u64) -> Result<usize, Error> {
    usize::try_from(value).map_err(|_| Error::DimensionOverflow(value))
}

/// Server address wrapper for type-safe connection.
#[derive(Clone)]
pub struct ServerAddr(pub String);

impl From<String> for ServerAddr {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServerAddr {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<std::net::SocketAddr> for ServerAddr {
    fn from(addr: std::net::SocketAddr) -> Self {
        Self(addr.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_conversion() {
        let m = Matrix::sequential(2, 3);
        let back = from_wire(to_wire(&m)).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_from_wire_rejects_malformed_response() {
        let wire = pb::Matrix {
            rows: 2,
            cols: 1,
            data: vec![pb::Row { values: vec![1.0] }],
        };
        assert!(matches!(from_wire(wire), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_dimension_in_range() {
        assert_eq!(dimension(7).unwrap(), 7);
        assert_eq!(dimension(u32::MAX as u64).unwrap(), u32::MAX as usize);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_dimension_overflow() {
        assert!(matches!(
            dimension(u64::MAX),
            Err(Error::DimensionOverflow(u64::MAX))
        ));
    }
}
