//! batch-console - terminal client of the batch upload backend

#![allow(missing_docs)]

use batch_console::Config;
use batch_console::cli::{Cli, build_console, run};
use batch_console::utils::logging::{LogFormat, init_tracing};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        config.logging.format()
    };
    init_tracing(&config.logging.level, format);

    let result = match build_console(config).await {
        Ok(console) => run(cli, &console).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
