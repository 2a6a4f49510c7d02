//! Generated gRPC types for the calculator service.

pub mod calculator {
    tonic::include_proto!("calculator");
}
