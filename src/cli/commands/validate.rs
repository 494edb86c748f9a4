//! Validate config command implementation
//!
//! Loads the configuration (file or environment), validates it, and prints
//! a summary without exposing the database password.

use crate::config::AppConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Also require a database name, as the users command does
    #[arg(long)]
    pub require_database: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("<environment>");
        tracing::info!(config = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match AppConfig::resolve(config_path) {
            Ok(c) => {
                println!("✅ Configuration loaded and valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let database_name = config.database.database_name();
        if self.require_database {
            if let Err(e) = &database_name {
                println!("❌ {e}");
                return Ok(2);
            }
        }

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Sensitive Fields: {}", config.redaction.fields.join(", "));
        println!("  Redaction Token: {}", config.redaction.token);
        println!("  Separator: {:?}", config.redaction.separator);
        println!("  Prefix Tag: {}", config.logging.prefix_tag);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!(
            "  Database: {}@{}:{}/{}",
            config.database.username,
            config.database.host,
            config.database.port,
            database_name.unwrap_or("<unset>")
        );
        println!();
        Ok(0)
    }
}
