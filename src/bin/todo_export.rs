use std::process::ExitCode;

use clap::Parser;
use todo_rpc::config::ExportConfig;
use todo_rpc::{export, logging};

fn run(config: &ExportConfig) -> Result<(), export::ExportError> {
    let count = export::export_file(&config.input, &config.output)?;
    println!(
        "Exported {} todos to protobuf binary: {}",
        count,
        config.output.display()
    );

    if config.verify {
        let decoded = export::read_exported(&config.output)?;
        if decoded.len() != count {
            return Err(export::ExportError::Decode(format!(
                "expected {} todos, decoded {}",
                count,
                decoded.len()
            )));
        }
        tracing::info!(count, "verified exported file");
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    let config = ExportConfig::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
