//! HTTP Handlers
//!
//! One handler module per resource group.

pub mod bible;
pub mod liturgical;
