//! Error types for calc-client operations.

use thiserror::Error;
use tonic::Code;

const MALFORMED_PREFIX: &str = "malformed request: ";

#[derive(Debug, Error)]
pub enum Error {
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("gRPC status error: {0}")]
    Status(#[from] tonic::Status),

    /// The server rejected a scalar operation (zero divisor, unknown operator).
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// The server rejected the matrix shapes.
    #[error("matrix error: {0}")]
    Matrix(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] calc_engine::MatrixError),

    #[error("malformed response: dimension {0} does not fit in usize")]
    DimensionOverflow(u64),
}

impl Error {
    /// Maps a status returned by the calculator server back to the failure
    /// it encodes.
    pub fn from_status(status: tonic::Status) -> Self {
        let message = status.message();
        match status.code() {
            Code::InvalidArgument => match message.strip_prefix(MALFORMED_PREFIX) {
                Some(detail) => Error::InvalidRequest(detail.to_string()),
                None => Error::Arithmetic(message.to_string()),
            },
            Code::FailedPrecondition => Error::Matrix(message.to_string()),
            _ => Error::Status(status),
        }
    }

    /// The server's message for a rejected request, if this is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Arithmetic(msg) | Error::Matrix(msg) | Error::InvalidRequest(msg) => {
                Some(msg.as_str())
            }
            _ => None,
        }
    }
}
