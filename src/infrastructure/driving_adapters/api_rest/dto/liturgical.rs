//! Liturgical DTOs
//!
//! Placeholder request shapes for the liturgical endpoints, mirroring the
//! bible DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// DTO for creating a liturgical day
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateLiturgicalDto {}

/// DTO for updating a liturgical day (PATCH)
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateLiturgicalDto {}
