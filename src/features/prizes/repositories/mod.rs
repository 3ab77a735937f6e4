mod memory;
mod postgres;
mod prize_repository;

pub use memory::InMemoryPrizeRepository;
pub use postgres::PgPrizeRepository;
pub use prize_repository::PrizeRepository;
