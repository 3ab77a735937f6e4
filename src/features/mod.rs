pub mod auth;
pub mod prizes;
