use std::process::ExitCode;

use clap::Parser;
use todo_rpc::config::ClientConfig;
use todo_rpc::{client, logging};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let config = ClientConfig::parse();

    match client::run(config.endpoint).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
