//! Completion backend implementations.

pub mod extract;
pub mod http;

pub use http::HttpCompletionBackend;
