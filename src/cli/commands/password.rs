//! Password command implementations
//!
//! `hash-password` prints a salted bcrypt hash; `verify-password` checks a
//! password against one. When the password argument is omitted it is read
//! from the first line of stdin, keeping it out of shell history.

use crate::password::{hash_password_with_cost, is_valid};
use clap::Args;
use std::io::{self, BufRead};

/// Arguments for the hash-password command
#[derive(Args, Debug)]
pub struct HashPasswordArgs {
    /// Password to hash (read from stdin when omitted)
    pub password: Option<String>,

    /// bcrypt cost factor
    #[arg(long, default_value_t = bcrypt::DEFAULT_COST)]
    pub cost: u32,
}

impl HashPasswordArgs {
    /// Execute the hash-password command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let password = password_or_stdin(self.password.as_deref())?;

        match hash_password_with_cost(&password, self.cost) {
            Ok(hashed) => {
                println!("{hashed}");
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Ok(2)
            }
        }
    }
}

/// Arguments for the verify-password command
#[derive(Args, Debug)]
pub struct VerifyPasswordArgs {
    /// bcrypt hash to check against
    pub hash: String,

    /// Candidate password (read from stdin when omitted)
    pub password: Option<String>,
}

impl VerifyPasswordArgs {
    /// Execute the verify-password command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let password = password_or_stdin(self.password.as_deref())?;

        match is_valid(&self.hash, &password) {
            Ok(true) => {
                println!("✅ Password is valid");
                Ok(0)
            }
            Ok(false) => {
                println!("❌ Password is invalid");
                Ok(1)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Ok(2)
            }
        }
    }
}

fn password_or_stdin(password: Option<&str>) -> io::Result<String> {
    match password {
        Some(password) => Ok(password.to_string()),
        None => read_first_line(io::stdin().lock()),
    }
}

fn read_first_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
