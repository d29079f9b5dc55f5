//! Session routing: key -> actor resolution.
//!
//! The routing table is an in-process registry and is not durable;
//! actors rehydrate from the store, so rebuilding the table loses
//! nothing but warmth.

use std::sync::Arc;

use dashmap::DashMap;

use crate::actor::SessionActor;

/// Maps session keys to live [`SessionActor`] instances.
///
/// `resolve` is an atomic get-or-insert: two concurrent resolves of a
/// previously-unseen key land on the same shard lock and observe one
/// actor, so no two actors ever load and persist the same durable log
/// independently.
#[derive(Default)]
pub struct SessionRouter {
    actors: DashMap<String, Arc<SessionActor>>,
}

impl SessionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a session key to its actor, creating it lazily.
    ///
    /// Within one process the same key always yields the same actor.
    pub fn resolve(&self, session_id: &str) -> Arc<SessionActor> {
        self.actors
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session_id, "Creating session actor");
                Arc::new(SessionActor::new(session_id))
            })
            .clone()
    }

    /// Drop the live actor for a key, if any.
    ///
    /// Safe at any time: the next `resolve` creates a cold actor that
    /// rehydrates from durable storage. Turns already holding the old
    /// actor's lock run to completion against the same log snapshot
    /// they persisted.
    pub fn evict(&self, session_id: &str) {
        self.actors.remove(session_id);
    }

    /// Number of currently live actors.
    pub fn live_actors(&self) -> usize {
        self.actors.len()
    }
}
