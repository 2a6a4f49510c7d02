pub mod config;
pub mod convert;
pub mod grpc;

use tonic::transport::Server;
use tracing::info;

use config::ServerConfig;

/// Serves the calculator on `config.addr` until the transport fails.
pub async fn serve(config: &ServerConfig) -> Result<(), tonic::transport::Error> {
    info!(
        addr = %config.addr,
        workers = config.worker_threads,
        "calculator server listening"
    );
    Server::builder()
        .add_service(grpc::create_server())
        .serve(config.addr)
        .await
}
