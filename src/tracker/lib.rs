pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod pagination;
pub mod roster;
pub mod schedule;
pub mod standings;
pub mod stats;
pub mod tracker;
