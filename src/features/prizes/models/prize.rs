use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for prize
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Prize {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a prize; ids and timestamps come from storage
#[derive(Debug, Clone)]
pub struct NewPrize {
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
}

/// Partial update: `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct PrizeChanges {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}

impl PrizeChanges {
    /// Apply the changes onto an in-memory record
    pub fn apply(self, prize: &mut Prize) {
        if let Some(name) = self.name {
            prize.name = name;
        }
        if let Some(year) = self.year {
            prize.year = year;
        }
        if let Some(description) = self.description {
            prize.description = Some(description);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrizeFilter {
    pub year: Option<i32>,
    pub limit: i64,
    pub offset: i64,
}
