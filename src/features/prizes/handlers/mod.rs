mod prize_handler;

pub use prize_handler::*;
