//! Driven Adapters
//!
//! External systems the application depends on:
//! - Configuration
//! - Database connection pool

pub mod config;
pub mod database;

pub use config::AppConfig;
