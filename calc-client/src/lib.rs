//! Typed client for the calculator gRPC service.
//!
//! `calc-client` wraps the generated tonic client and maps the server's
//! error statuses back into typed failures:
//!
//! - `InvalidArgument` → [`Error::Arithmetic`] (or [`Error::InvalidRequest`]
//!   for malformed payloads)
//! - `FailedPrecondition` → [`Error::Matrix`]
//!
//! # Example
//!
//! ```no_run
//! use calc_client::CalcClient;
//! use calc_engine::Matrix;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CalcClient::connect("localhost:9090").await?;
//!
//!     let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
//!     let t = client.transpose(&a).await?;
//!     assert_eq!(t.data(), &[vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{CalcClient, ServerAddr};
pub use error::Error;
