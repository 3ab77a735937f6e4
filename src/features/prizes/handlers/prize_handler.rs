use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::prizes::dtos::{
    CreatePrizeDto, PrizeQueryParams, PrizeResponseDto, UpdatePrizeDto,
};
use crate::features::prizes::services::PrizeService;
use crate::shared::types::{ApiResponse, Meta};

/// Adds a new prize (admin only)
#[utoipa::path(
    post,
    path = "/prizes/",
    request_body = CreatePrizeDto,
    responses(
        (status = 200, description = "Prize added successfully", body = ApiResponse<PrizeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Authorization required"),
        (status = 409, description = "Prize with the same name and year already exists")
    ),
    tag = "Prizes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_prize(
    user: AuthenticatedUser,
    State(service): State<Arc<PrizeService>>,
    AppJson(dto): AppJson<CreatePrizeDto>,
) -> Result<Json<ApiResponse<PrizeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!(admin = %user.sub, "Adding prize");
    let prize = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(prize),
        Some("Prize added successfully".to_string()),
        None,
    )))
}

/// Deletes a prize (admin only)
#[utoipa::path(
    delete,
    path = "/prizes/{id}",
    params(
        ("id" = i64, Path, description = "Numeric ID of the prize to delete")
    ),
    responses(
        (status = 200, description = "Prize deleted successfully"),
        (status = 400, description = "Malformed prize id"),
        (status = 404, description = "Prize not found"),
        (status = 403, description = "Authorization required")
    ),
    tag = "Prizes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_prize(
    user: AuthenticatedUser,
    State(service): State<Arc<PrizeService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    tracing::debug!(admin = %user.sub, prize_id = id, "Deleting prize");
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Prize deleted successfully".to_string()),
        None,
    )))
}

/// Updates a prize (admin only)
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/prizes/{id}",
    params(
        ("id" = i64, Path, description = "Numeric ID of the prize to update")
    ),
    request_body = UpdatePrizeDto,
    responses(
        (status = 200, description = "Prize updated successfully", body = ApiResponse<PrizeResponseDto>),
        (status = 400, description = "Validation error or malformed prize id"),
        (status = 404, description = "Prize not found"),
        (status = 403, description = "Authorization required"),
        (status = 409, description = "Prize with the same name and year already exists")
    ),
    tag = "Prizes",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_prize(
    user: AuthenticatedUser,
    State(service): State<Arc<PrizeService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdatePrizeDto>,
) -> Result<Json<ApiResponse<PrizeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!(admin = %user.sub, prize_id = id, "Updating prize");
    let prize = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(prize),
        Some("Prize updated successfully".to_string()),
        None,
    )))
}

/// List prizes
#[utoipa::path(
    get,
    path = "/prizes/",
    params(PrizeQueryParams),
    responses(
        (status = 200, description = "List of prizes", body = ApiResponse<Vec<PrizeResponseDto>>),
    ),
    tag = "Prizes"
)]
pub async fn list_prizes(
    State(service): State<Arc<PrizeService>>,
    Query(params): Query<PrizeQueryParams>,
) -> Result<Json<ApiResponse<Vec<PrizeResponseDto>>>> {
    let (prizes, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(prizes),
        None,
        Some(Meta { total }),
    )))
}

/// Get prize by ID
#[utoipa::path(
    get,
    path = "/prizes/{id}",
    params(
        ("id" = i64, Path, description = "Numeric ID of the prize")
    ),
    responses(
        (status = 200, description = "Prize found", body = ApiResponse<PrizeResponseDto>),
        (status = 400, description = "Malformed prize id"),
        (status = 404, description = "Prize not found")
    ),
    tag = "Prizes"
)]
pub async fn get_prize(
    State(service): State<Arc<PrizeService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<PrizeResponseDto>>> {
    let prize = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(prize), None, None)))
}
