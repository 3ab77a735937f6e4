mod prize_dto;

pub use prize_dto::*;
