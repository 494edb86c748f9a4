//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for piilog using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// piilog - PII-redacting log formatter and password tool
#[derive(Parser, Debug)]
#[command(name = "piilog")]
#[command(version, about, long_about = None)]
#[command(author = "Piilog Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults and environment when omitted)
    #[arg(short, long, env = "PIILOG_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PIILOG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log every row of the users table with PII redacted
    Users(commands::users::UsersArgs),

    /// Redact field=value messages from arguments or stdin
    Redact(commands::redact::RedactArgs),

    /// Hash a password with bcrypt
    HashPassword(commands::password::HashPasswordArgs),

    /// Check a password against a bcrypt hash
    VerifyPassword(commands::password::VerifyPasswordArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Whether the command cannot run without a valid configuration
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::ValidateConfig(_) | Commands::Init(_))
    }
}
