//! Application Layer
//!
//! Contains the resource services that will eventually orchestrate the
//! readings business logic. Handlers depend on these services, not on
//! infrastructure.

pub mod services;
