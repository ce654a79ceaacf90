//! Durable client-side session storage and the authentication gate.
//!
//! DESIGN
//! ======
//! The session is zero-or-one JSON-serialized user record under one fixed
//! `localStorage` key. Presence of a parsable record is the sole definition
//! of "authenticated"; there is no expiry and no server round-trip. The
//! store is an injectable capability so flows and the route guard can be
//! exercised against an in-memory fake.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use crate::net::types::User;

/// `localStorage` key holding the cached user record.
pub const STORAGE_KEY: &str = "user";

/// Storage capability for the cached user record.
pub trait SessionStore {
    /// Persist `user` under the fixed key, replacing any previous record.
    fn save(&self, user: &User);

    /// Remove the cached record. A no-op when no record is present.
    fn clear(&self);

    /// The cached record, or `None` when absent or unparsable. Malformed
    /// stored text reads as logged-out rather than raising.
    fn current(&self) -> Option<User>;

    /// The authentication gate: true iff a record is present.
    fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

fn decode(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// `localStorage`-backed store. Outside the browser every operation is a
/// no-op and reads yield `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn save(&self, user: &User) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let Ok(raw) = serde_json::to_string(user) else {
                return;
            };
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }

    fn current(&self) -> Option<User> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
            decode(&raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

/// In-memory store mirroring the `localStorage` contract. Clones share the
/// same cell; the raw accessors let tests plant malformed payloads and
/// inspect the stored text.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored text directly, bypassing serialization.
    pub fn set_raw(&self, raw: &str) {
        *self.raw.lock().unwrap() = Some(raw.to_owned());
    }

    /// The stored text as written, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap().clone()
    }
}

impl SessionStore for MemorySession {
    fn save(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            *self.raw.lock().unwrap() = Some(raw);
        }
    }

    fn clear(&self) {
        *self.raw.lock().unwrap() = None;
    }

    fn current(&self) -> Option<User> {
        self.raw.lock().unwrap().as_deref().and_then(decode)
    }
}

/// Cloneable handle provided via Leptos context so pages receive the store
/// capability explicitly instead of reaching for a global.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore + Send + Sync>,
}

impl Session {
    /// Browser-backed session for the running app.
    #[must_use]
    pub fn browser() -> Self {
        Self::from_store(BrowserSession)
    }

    /// Wrap an arbitrary store (an in-memory fake in tests).
    pub fn from_store(store: impl SessionStore + Send + Sync + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn save(&self, user: &User) {
        self.store.save(user);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    #[must_use]
    pub fn current(&self) -> Option<User> {
        self.store.current()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }
}
