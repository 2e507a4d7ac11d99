//! Todo service integration tests.

mod support;
mod scenario;
mod file_store;
mod export;

#[cfg(feature = "grpc")]
mod client;
