//! Data Transfer Objects
//!
//! Request DTOs for the REST API. All of them are placeholder types with no
//! declared fields: request bodies are accepted and ignored until the
//! readings data model lands.

pub mod bible;
pub mod liturgical;

pub use bible::{CreateBibleDto, UpdateBibleDto};
pub use liturgical::{CreateLiturgicalDto, UpdateLiturgicalDto};
