//! CLI command implementations
//!
//! Exit codes: 0 success, 1 password mismatch, 2 configuration error,
//! 4 connection error, 5 fatal error.

pub mod init;
pub mod password;
pub mod redact;
pub mod users;
pub mod validate;
