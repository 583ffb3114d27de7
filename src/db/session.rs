// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-browser key-value session storage.
//!
//! Each browser gets its own [`KeyValueStore`], selected by the session
//! cookie. Values are stored JSON-encoded and replaced whole on write.

use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Length of a session ID in random bytes (hex-encoded on the wire).
const SESSION_ID_BYTES: usize = 16;

/// Key-value store scoped to one browser session.
#[derive(Debug, Default)]
pub struct KeyValueStore {
    entries: DashMap<String, String>,
}

impl KeyValueStore {
    /// Read and decode a value. Missing or undecodable entries read as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        match serde_json::from_str(raw.value()) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring undecodable session value");
                None
            }
        }
    }

    /// Replace the value stored under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let encoded = serde_json::to_string(value)?;
        self.entries.insert(key.to_string(), encoded);
        Ok(())
    }

    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// All live browser sessions, keyed by session ID.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Arc<KeyValueStore>>,
    rng: SystemRandom,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            sessions: DashMap::new(),
            rng: SystemRandom::new(),
        }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an existing session.
    pub fn get(&self, session_id: &str) -> Option<Arc<KeyValueStore>> {
        self.sessions.get(session_id).map(|s| Arc::clone(s.value()))
    }

    /// Create a fresh, empty session and return its ID with the store.
    pub fn create(&self) -> anyhow::Result<(String, Arc<KeyValueStore>)> {
        let mut bytes = [0u8; SESSION_ID_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| anyhow::anyhow!("Failed to generate session ID"))?;
        let session_id = hex::encode(bytes);

        let store = Arc::new(KeyValueStore::default());
        self.sessions.insert(session_id.clone(), Arc::clone(&store));

        tracing::debug!(sessions = self.sessions.len(), "Session created");
        Ok((session_id, store))
    }

    /// Reuse the session named by `session_id` when it exists, otherwise create one.
    pub fn get_or_create(
        &self,
        session_id: Option<&str>,
    ) -> anyhow::Result<(String, Arc<KeyValueStore>)> {
        if let Some(id) = session_id {
            if let Some(store) = self.get(id) {
                return Ok((id.to_string(), store));
            }
        }
        self.create()
    }

    /// Drop a session and everything stored in it.
    pub fn remove(&self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).is_some();
        if removed {
            tracing::debug!(sessions = self.sessions.len(), "Session removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
