//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod docs;
pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{BibleService, LiturgicalService};
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
///
/// The pool is held here as the shared persistence handle; neither resource
/// module uses it yet.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: PgPool,
    pub bible_service: Arc<BibleService>,
    pub liturgical_service: Arc<LiturgicalService>,
}
