//! codespark - CodeSpark CLI
//!
//! Manages users, projects and tasks in a local SQLite database and drafts
//! project proposals from an agent pipeline. Results are printed as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Register a user
//! codespark user create --email ada@example.com --name Ada
//!
//! # Draft a proposal from a recorded transcript and keep it
//! codespark proposal generate --type backend --tech Rust --tech SQLite \
//!     --transcript run.txt --accept-for <user-id> --pretty
//! ```

mod cli;
mod commands;
mod dispatch;
mod error;
mod logger;
mod project_commands;
mod proposal_commands;
mod task_commands;
mod user_commands;

#[cfg(test)]
mod tests;

use crate::{cli::Cli, dispatch::dispatch, error::Result as CliErrorResult};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => match render(&value, pretty) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing response: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{}", e);
            match render(&e.to_body(), pretty) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("Error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<Value> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let config = cs_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting codespark v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = cs_db::connect(&config.database_path()?, config.database.max_connections).await?;

    let result = dispatch(cli.command, &pool, &config.proposal).await;
    pool.close().await;
    result
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
