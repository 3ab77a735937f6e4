use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::prizes::models::{NewPrize, Prize, PrizeChanges, PrizeFilter};

/// Storage seam for prizes
///
/// `update` and `delete` report a missing id as `Ok(None)` / `Ok(false)`; turning that into
/// a 404 is the service's job. A duplicate `(name, year)` pair is an `AppError::Conflict`.
#[async_trait]
pub trait PrizeRepository: Send + Sync {
    /// Page of prizes ordered by year (newest first) then id, plus the unpaged total
    async fn list(&self, filter: &PrizeFilter) -> Result<(Vec<Prize>, i64)>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Prize>>;

    async fn insert(&self, prize: NewPrize) -> Result<Prize>;

    async fn update(&self, id: i64, changes: PrizeChanges) -> Result<Option<Prize>>;

    async fn delete(&self, id: i64) -> Result<bool>;
}
