//! Session persistence to browser localStorage.
//!
//! Only the session slice is durable; every other slice is rebuilt from
//! the server on each load. The envelope is written under one fixed root
//! key after every session transition and read once at startup, before
//! the router renders. A missing or corrupt entry is treated as "no
//! persisted state", never as an error.
//!
//! Requires a browser environment; on the server all operations are
//! no-ops.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::{Deserialize, Serialize};

use super::session::SessionState;
use crate::net::types::User;

/// Root localStorage key for the persisted session slice.
pub const STORAGE_KEY: &str = "neetup.session";

/// The durable subset of the session slice.
///
/// Loading and error state are transient and deliberately excluded;
/// `is_authenticated` is re-derived on rehydration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionEnvelope {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionEnvelope {
    /// Snapshot the durable fields of a session.
    pub fn snapshot(session: &SessionState) -> Self {
        Self {
            user: session.user.clone(),
            token: session.token.clone(),
        }
    }

    /// Rebuild an in-memory session from this envelope.
    pub fn restore(self) -> SessionState {
        SessionState::from_persisted(self.user, self.token)
    }

    /// Parse an envelope from its serialized form, tolerating corrupt
    /// entries.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Serialize for storage. `None` only if serialization itself fails,
    /// which callers treat the same as a skipped write.
    pub fn encode(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }
}

/// Write the session's durable fields to localStorage.
pub fn save(session: &SessionState) {
    #[cfg(feature = "hydrate")]
    {
        let Some(encoded) = SessionEnvelope::snapshot(session).encode() else {
            leptos::logging::warn!("session envelope serialization failed; skipping write");
            return;
        };
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, &encoded);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the persisted session entirely.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Read the persisted session, if any. Missing or corrupt entries yield
/// `None`.
pub fn load() -> Option<SessionEnvelope> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        SessionEnvelope::decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
