//! Bible DTOs
//!
//! Placeholder request shapes for the bible endpoints. No fields are
//! declared yet; any JSON object deserializes and is discarded.

use serde::Deserialize;
use utoipa::ToSchema;

/// DTO for creating a bible entry
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateBibleDto {}

/// DTO for updating a bible entry (PATCH)
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBibleDto {}
