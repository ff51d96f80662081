//! Session storage for Authjar.
//!
//! This crate is the single source of truth for identity: a concurrent,
//! in-memory mapping from an opaque session token to a display name.
//! Everything else in the stack — the wire protocol, the client, the
//! cookie glue — exists to read and write this one map from across a
//! process boundary.
//!
//! # How it fits in the stack
//!
//! ```text
//! Protocol Layer (above)  ← exposes bind/unbind/lookup over HTTP
//!     ↕
//! Store Layer (this crate)  ← owns the token → name map
//! ```
//!
//! There is deliberately nothing clever here: no persistence, no expiry
//! timer, no eviction. A session lives until it is explicitly unbound or
//! the process restarts — at which point every client has to log in again.

mod store;

pub use store::SessionStore;
