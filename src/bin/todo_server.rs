use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use todo_rpc::config::ServerConfig;
use todo_rpc::{grpc, logging, JsonFileStore, TodoHandler};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let config = ServerConfig::parse();

    tracing::info!(store = %config.store.display(), "using todo store");
    let handler = Arc::new(TodoHandler::new(JsonFileStore::new(config.store)));

    match grpc::serve_grpc(handler, config.addr).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "gRPC server failed");
            ExitCode::FAILURE
        }
    }
}
