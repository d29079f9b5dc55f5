//! Shared domain types for Parley.
//!
//! This crate has no I/O and no async code. It holds the message model,
//! the error taxonomy, and service configuration shared by every other
//! crate in the workspace.

pub mod config;
pub mod error;
pub mod message;
