//! Command-line / environment configuration for the binaries.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Todo gRPC server.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TODO_ADDR", default_value = "0.0.0.0:50051")]
    pub addr: SocketAddr,

    /// JSON file holding the todo collection.
    #[arg(long, env = "TODO_STORE", default_value = "todos.json")]
    pub store: PathBuf,
}

/// Export a JSON todo collection to its protobuf binary encoding.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct ExportConfig {
    #[arg(long, env = "TODO_EXPORT_INPUT", default_value = "./todos.json")]
    pub input: PathBuf,

    #[arg(long, env = "TODO_EXPORT_OUTPUT", default_value = "./todos.bin")]
    pub output: PathBuf,

    /// Decode the written file and check it matches the input.
    #[arg(long)]
    pub verify: bool,
}

/// Interactive todo gRPC client.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct ClientConfig {
    #[arg(long, env = "TODO_ENDPOINT", default_value = "http://localhost:50051")]
    pub endpoint: String,
}
