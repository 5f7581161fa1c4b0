//! Resource Services
//!
//! One service per resource group, each exposing the five CRUD operations.
//! The two services mirror each other; only the resource noun differs.

mod bible;
mod liturgical;

pub use bible::BibleService;
pub use liturgical::LiturgicalService;
