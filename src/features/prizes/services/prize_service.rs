use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::prizes::dtos::{
    CreatePrizeDto, PrizeQueryParams, PrizeResponseDto, UpdatePrizeDto,
};
use crate::features::prizes::models::PrizeFilter;
use crate::features::prizes::repositories::PrizeRepository;

/// Service for prize operations
pub struct PrizeService {
    repository: Arc<dyn PrizeRepository>,
}

impl PrizeService {
    pub fn new(repository: Arc<dyn PrizeRepository>) -> Self {
        Self { repository }
    }

    fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("Prize with id {} not found", id))
    }

    /// List prizes with pagination and optional year filter
    pub async fn list(&self, params: &PrizeQueryParams) -> Result<(Vec<PrizeResponseDto>, i64)> {
        let (prizes, total) = self.repository.list(&PrizeFilter::from(params)).await?;
        Ok((prizes.into_iter().map(Into::into).collect(), total))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<PrizeResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn create(&self, dto: CreatePrizeDto) -> Result<PrizeResponseDto> {
        let prize = self.repository.insert(dto.into()).await?;
        tracing::info!(prize_id = prize.id, year = prize.year, "Prize added");
        Ok(prize.into())
    }

    /// Apply a partial update; fields absent from the body are left as stored
    pub async fn update(&self, id: i64, dto: UpdatePrizeDto) -> Result<PrizeResponseDto> {
        let prize = self
            .repository
            .update(id, dto.into())
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        tracing::info!(prize_id = prize.id, "Prize updated");
        Ok(prize.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(Self::not_found(id));
        }

        tracing::info!(prize_id = id, "Prize deleted");
        Ok(())
    }
}
