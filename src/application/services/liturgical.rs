//! Liturgical Service
//!
//! Stub operations for the `liturgical` resource group, mirroring
//! [`BibleService`](super::BibleService). Every method answers with a
//! placeholder string until liturgical-calendar computation is implemented.

use crate::shared::errors::ServiceError;

/// Service for the `liturgical` resource
pub struct LiturgicalService;

impl LiturgicalService {
    /// Create a new LiturgicalService
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create a new liturgical day
    pub fn create(&self) -> Result<String, ServiceError> {
        tracing::debug!("Creating liturgical day");
        Ok("This action adds a new liturgical".to_string())
    }

    /// List all liturgical days
    pub fn find_all(&self) -> Result<String, ServiceError> {
        tracing::debug!("Listing liturgical days");
        Ok("This action returns all liturgical".to_string())
    }

    /// Get a single liturgical day by id
    pub fn find_one(&self, id: i64) -> Result<String, ServiceError> {
        tracing::debug!(liturgical_id = id, "Getting liturgical day");
        Ok(format!("This action returns a #{id} liturgical"))
    }

    /// Update a liturgical day
    pub fn update(&self, id: i64) -> Result<String, ServiceError> {
        tracing::debug!(liturgical_id = id, "Updating liturgical day");
        Ok(format!("This action updates a #{id} liturgical"))
    }

    /// Remove a liturgical day
    pub fn remove(&self, id: i64) -> Result<String, ServiceError> {
        tracing::debug!(liturgical_id = id, "Removing liturgical day");
        Ok(format!("This action removes a #{id} liturgical"))
    }
}

impl Default for LiturgicalService {
    fn default() -> Self {
        Self::new()
    }
}
