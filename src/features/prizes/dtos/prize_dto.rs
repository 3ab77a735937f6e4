use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::features::prizes::models::{NewPrize, Prize, PrizeChanges, PrizeFilter};
use crate::shared::types::{default_page, default_page_size, page_limit, page_offset};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Request body for adding a prize
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePrizeDto {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    #[schema(example = "Peace Prize")]
    pub name: String,

    #[validate(range(min = 1, max = 9999))]
    #[schema(example = 2024)]
    pub year: i32,

    pub description: Option<String>,
}

impl From<CreatePrizeDto> for NewPrize {
    fn from(dto: CreatePrizeDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            year: dto.year,
            description: dto.description,
        }
    }
}

/// Request body for updating a prize; omitted fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePrizeDto {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 9999))]
    pub year: Option<i32>,

    pub description: Option<String>,
}

impl From<UpdatePrizeDto> for PrizeChanges {
    fn from(dto: UpdatePrizeDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            year: dto.year,
            description: dto.description,
        }
    }
}

/// Response DTO for prize
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrizeResponseDto {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Prize> for PrizeResponseDto {
    fn from(p: Prize) -> Self {
        Self {
            id: p.id,
            name: p.name,
            year: p.year,
            description: p.description,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Query params for listing prizes
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PrizeQueryParams {
    /// Only return prizes awarded in this year
    pub year: Option<i32>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

impl Default for PrizeQueryParams {
    fn default() -> Self {
        Self {
            year: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl From<&PrizeQueryParams> for PrizeFilter {
    fn from(params: &PrizeQueryParams) -> Self {
        Self {
            year: params.year,
            limit: page_limit(params.page_size),
            offset: page_offset(params.page, params.page_size),
        }
    }
}
