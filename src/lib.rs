pub mod bidding;
pub mod config;
pub mod database;
pub mod error;
pub mod repository;
pub mod session;
