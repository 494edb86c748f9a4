// piilog - PII-redacting log formatter
// Copyright (c) 2025 Piilog Contributors
// Licensed under the MIT License

use clap::Parser;
use piilog::cli::{Cli, Commands};
use piilog::config::AppConfig;
use piilog::domain::PiiLogError;
use piilog::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match AppConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        // validate-config reports the error itself; init does not need it
        Err(_) if !cli.command.needs_config() => AppConfig::default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    if let Some(level) = &cli.log_level {
        config.application.log_level = level.clone();
    }

    let guard = match init_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            let code = if matches!(e, PiiLogError::Configuration(_)) { 2 } else { 5 };
            process::exit(code);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "piilog starting");

    let exit_code = match execute_command(&cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &AppConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Users(args) => args.execute(config).await,
        Commands::Redact(args) => args.execute(config).await,
        Commands::HashPassword(args) => args.execute().await,
        Commands::VerifyPassword(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref()).await,
        Commands::Init(args) => args.execute().await,
    }
}
