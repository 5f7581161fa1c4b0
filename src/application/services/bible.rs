//! Bible Service
//!
//! Stub operations for the `bible` resource group. Every method answers
//! with a placeholder string until passage storage and scripture reference
//! resolution are implemented.

use crate::shared::errors::ServiceError;

/// Service for the `bible` resource
pub struct BibleService;

impl BibleService {
    /// Create a new BibleService
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create a new bible entry
    pub fn create(&self) -> Result<String, ServiceError> {
        tracing::debug!("Creating bible entry");
        Ok("This action adds a new bible".to_string())
    }

    /// List all bible entries
    pub fn find_all(&self) -> Result<String, ServiceError> {
        tracing::debug!("Listing bible entries");
        Ok("This action returns all bible".to_string())
    }

    /// Get a single bible entry by id
    pub fn find_one(&self, id: i64) -> Result<String, ServiceError> {
        tracing::debug!(bible_id = id, "Getting bible entry");
        Ok(format!("This action returns a #{id} bible"))
    }

    /// Update a bible entry
    pub fn update(&self, id: i64) -> Result<String, ServiceError> {
        tracing::debug!(bible_id = id, "Updating bible entry");
        Ok(format!("This action updates a #{id} bible"))
    }

    /// Remove a bible entry
    pub fn remove(&self, id: i64) -> Result<String, ServiceError> {
        tracing::debug!(bible_id = id, "Removing bible entry");
        Ok(format!("This action removes a #{id} bible"))
    }
}

impl Default for BibleService {
    fn default() -> Self {
        Self::new()
    }
}
