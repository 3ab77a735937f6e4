use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::PrizeRepository;
use crate::core::error::{AppError, Result};
use crate::features::prizes::models::{NewPrize, Prize, PrizeChanges, PrizeFilter};

#[derive(Default)]
struct Store {
    next_id: i64,
    prizes: BTreeMap<i64, Prize>,
}

impl Store {
    fn name_year_taken(&self, name: &str, year: i32, except: Option<i64>) -> bool {
        self.prizes
            .values()
            .any(|p| Some(p.id) != except && p.name == name && p.year == year)
    }
}

fn duplicate() -> AppError {
    AppError::Conflict("A prize with this name already exists for that year".to_string())
}

/// Process-local prize store; contents are lost on restart
#[derive(Default)]
pub struct InMemoryPrizeRepository {
    store: RwLock<Store>,
}

impl InMemoryPrizeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PrizeRepository for InMemoryPrizeRepository {
    async fn list(&self, filter: &PrizeFilter) -> Result<(Vec<Prize>, i64)> {
        let store = self.store.read().await;

        let mut matching: Vec<&Prize> = store
            .prizes
            .values()
            .filter(|p| filter.year.map_or(true, |year| p.year == year))
            .collect();
        matching.sort_by(|a, b| b.year.cmp(&a.year).then(a.id.cmp(&b.id)));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(filter.offset.max(0) as usize)
            .take(filter.limit.max(0) as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Prize>> {
        Ok(self.store.read().await.prizes.get(&id).cloned())
    }

    async fn insert(&self, prize: NewPrize) -> Result<Prize> {
        let mut store = self.store.write().await;

        if store.name_year_taken(&prize.name, prize.year, None) {
            return Err(duplicate());
        }

        store.next_id += 1;
        let now = Utc::now();
        let record = Prize {
            id: store.next_id,
            name: prize.name,
            year: prize.year,
            description: prize.description,
            created_at: now,
            updated_at: now,
        };
        store.prizes.insert(record.id, record.clone());

        Ok(record)
    }

    async fn update(&self, id: i64, changes: PrizeChanges) -> Result<Option<Prize>> {
        let mut store = self.store.write().await;

        let Some(current) = store.prizes.get(&id) else {
            return Ok(None);
        };

        let mut updated = current.clone();
        changes.apply(&mut updated);
        updated.updated_at = Utc::now();

        if store.name_year_taken(&updated.name, updated.year, Some(id)) {
            return Err(duplicate());
        }

        store.prizes.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.store.write().await.prizes.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_prize(name: &str, year: i32) -> NewPrize {
        NewPrize {
            name: name.to_string(),
            year,
            description: None,
        }
    }

    fn all() -> PrizeFilter {
        PrizeFilter {
            year: None,
            limit: 100,
            offset: 0,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryPrizeRepository::new();
        let first = repo.insert(new_prize("Physics", 2020)).await.unwrap();
        let second = repo.insert(new_prize("Chemistry", 2020)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryPrizeRepository::new();
        let first = repo.insert(new_prize("Physics", 2020)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.insert(new_prize("Physics", 2020)).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_duplicate_name_year_conflicts() {
        let repo = InMemoryPrizeRepository::new();
        repo.insert(new_prize("Physics", 2020)).await.unwrap();

        let err = repo.insert(new_prize("Physics", 2020)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // same name in another year is fine
        assert!(repo.insert(new_prize("Physics", 2021)).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_into_existing_pair_conflicts() {
        let repo = InMemoryPrizeRepository::new();
        repo.insert(new_prize("Physics", 2020)).await.unwrap();
        let other = repo.insert(new_prize("Physics", 2021)).await.unwrap();

        let changes = PrizeChanges {
            year: Some(2020),
            ..Default::default()
        };
        let err = repo.update(other.id, changes).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // the failed update left the record untouched
        let stored = repo.find_by_id(other.id).await.unwrap().unwrap();
        assert_eq!(stored.year, 2021);
    }

    #[tokio::test]
    async fn test_update_only_touches_supplied_fields() {
        let repo = InMemoryPrizeRepository::new();
        let created = repo
            .insert(NewPrize {
                name: "Medicine".to_string(),
                year: 1999,
                description: Some("original".to_string()),
            })
            .await
            .unwrap();

        let changes = PrizeChanges {
            name: Some("Physiology or Medicine".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.name, "Physiology or Medicine");
        assert_eq!(updated.year, 1999);
        assert_eq!(updated.description.as_deref(), Some("original"));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let repo = InMemoryPrizeRepository::new();
        assert!(repo.find_by_id(42).await.unwrap().is_none());
        assert!(repo
            .update(42, PrizeChanges::default())
            .await
            .unwrap()
            .is_none());
        assert!(!repo.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_orders_filters_and_pages() {
        let repo = InMemoryPrizeRepository::new();
        repo.insert(new_prize("A", 2019)).await.unwrap();
        repo.insert(new_prize("B", 2021)).await.unwrap();
        repo.insert(new_prize("C", 2021)).await.unwrap();
        repo.insert(new_prize("D", 2020)).await.unwrap();

        let (prizes, total) = repo.list(&all()).await.unwrap();
        let names: Vec<&str> = prizes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(total, 4);
        assert_eq!(names, vec!["B", "C", "D", "A"]);

        let filter = PrizeFilter {
            year: Some(2021),
            ..all()
        };
        let (prizes, total) = repo.list(&filter).await.unwrap();
        assert_eq!(total, 2);
        assert!(prizes.iter().all(|p| p.year == 2021));

        let filter = PrizeFilter {
            year: None,
            limit: 2,
            offset: 2,
        };
        let (prizes, total) = repo.list(&filter).await.unwrap();
        assert_eq!(total, 4);
        let names: Vec<&str> = prizes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["D", "A"]);
    }
}
