//! Liturgy Reader API
//!
//! A Rust-based web API scaffold for serving Bible passages and
//! liturgical-calendar readings, following Clean/Hexagonal Architecture
//! principles. The domain logic is not implemented yet: every service
//! method answers with a placeholder string.

pub mod application;
pub mod infrastructure;
pub mod shared;
