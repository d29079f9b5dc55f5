//! SQLite persistence layer.

pub mod conversation;
pub mod pool;
