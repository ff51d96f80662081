//! The session store: tracks every active token → name binding.
//!
//! This is the central piece of the whole subsystem. It's responsible for:
//! - Recording a binding when a visitor logs in (`bind`)
//! - Forgetting it when they log out (`unbind`)
//! - Answering "who is this token?" for every front-end request (`lookup`)
//!
//! # Concurrency note
//!
//! Unlike most of the async stack above it, `SessionStore` is a plain
//! synchronous type guarded by a `std::sync::RwLock`. Reads (lookups) run
//! concurrently with each other; a write (bind/unbind) excludes everything.
//! The lock is held strictly around the map access — never across an
//! `.await`, never around network I/O — so holding it from async handlers
//! is safe. Handlers share the store as an `Arc<SessionStore>`.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Authoritative mapping from session token to display name.
///
/// Think of this as a "registry" — it knows about every visitor currently
/// logged in anywhere, keyed by the opaque token their browser carries.
///
/// ## Lifecycle of an entry
///
/// ```text
/// bind(token, name) ──→ lookup(token) == Some(name)
///        │
///        ▼
/// unbind(token)     ──→ lookup(token) == None
/// ```
///
/// Tokens are never generated here. Uniqueness is the caller's problem
/// (see the client crate's token generator); the store just maps whatever
/// it is handed.
#[derive(Debug, Default)]
pub struct SessionStore {
    /// All active sessions, keyed by token.
    ///
    /// The `RwLock` gives us the reader/writer contract the protocol
    /// requires: any number of concurrent lookups, but a bind or unbind
    /// runs alone. No lost updates, no torn reads.
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    /// Creates a new, empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `token` to `name`, inserting or overwriting.
    ///
    /// Always succeeds. There is no constraint on `name`: binding an empty
    /// name is allowed and is observably identical to the token being
    /// unbound — `lookup` treats empty values as absent, so the reserved
    /// "no name" convention holds even if a caller binds `""` directly.
    pub fn bind(&self, token: impl Into<String>, name: impl Into<String>) {
        let token = token.into();
        tracing::trace!(%token, "binding session");
        self.write().insert(token, name.into());
    }

    /// Removes the binding for `token` entirely — the key is deleted,
    /// not merely emptied.
    ///
    /// Idempotent: unbinding a token with no binding is a no-op.
    pub fn unbind(&self, token: &str) {
        tracing::trace!(%token, "unbinding session");
        self.write().remove(token);
    }

    /// Returns the name bound to `token`, or `None` if the token is
    /// empty, unknown, or was unbound.
    ///
    /// Absence is an `Option`, not a sentinel value — the empty-string
    /// convention exists only on the wire (see the protocol crate).
    pub fn lookup(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        self.read()
            .get(token)
            .filter(|name| !name.is_empty())
            .cloned()
    }

    /// Returns the number of bindings currently held (including any
    /// empty-name bindings, which `lookup` reports as absent).
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no bindings are held.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Acquires the read lock, recovering from poisoning.
    ///
    /// A panic in some other holder cannot leave the map torn — every
    /// mutation is a single `HashMap` call — so the data is still valid
    /// and the store must keep serving rather than propagate the panic.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the write lock, recovering from poisoning. Same
    /// reasoning as [`read`](Self::read).
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// =========================================================================
// Tests
// =========================================================================
