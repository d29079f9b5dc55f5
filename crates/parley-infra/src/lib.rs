//! Infrastructure implementations for Parley.
//!
//! Concrete implementations of the parley-core trait seams:
//! SQLite-backed conversation storage and the HTTP completion backend.

pub mod backend;
pub mod sqlite;
