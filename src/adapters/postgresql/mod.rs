//! PostgreSQL database integration
//!
//! This module provides the PostgreSQL-backed user lookup.

pub mod client;

pub use client::{PostgresUserSource, USERS_QUERY};
