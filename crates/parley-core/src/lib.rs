//! Core of the Parley chat relay: session actors, routing, and the
//! completion-client degraded-mode policy.
//!
//! Storage and the completion backend are trait seams
//! ([`store::ConversationStore`], [`completion::CompletionBackend`]);
//! concrete implementations live in `parley-infra`. This crate never
//! performs I/O of its own.

pub mod actor;
pub mod completion;
pub mod log;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
