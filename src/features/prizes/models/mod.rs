mod prize;

pub use prize::{NewPrize, Prize, PrizeChanges, PrizeFilter};
