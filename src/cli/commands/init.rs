//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "piilog.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Export PERSONAL_DATA_DB_NAME and PERSONAL_DATA_DB_PASSWORD");
                println!("  3. Validate configuration: piilog -c {} validate-config", self.output);
                println!("  4. Log users: piilog -c {} users", self.output);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate the sample configuration
    pub fn generate_config() -> String {
        r#"# piilog configuration

[application]
# Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
log_level = "info"

[redaction]
# Fields whose values are replaced in log messages
fields = ["name", "email", "phone", "ssn", "password"]
token = "***"
separator = ";"

[logging]
prefix_tag = "[HOLBERTON]"
console_enabled = true
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
local_file_name = "piilog.log"

[database]
# PERSONAL_DATA_DB_USERNAME / _PASSWORD / _HOST / _NAME / _PORT override these
username = "root"
host = "localhost"
port = 5432
# name = "my_db"
max_connections = 4
connection_timeout_seconds = 30
"#
        .to_string()
    }
}
