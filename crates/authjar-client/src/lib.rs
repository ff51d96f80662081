//! Session lookup and lifecycle client for Authjar front-ends.
//!
//! A front-end web process never touches the session map directly — it
//! asks the store service over the wire. This crate is that façade:
//!
//! 1. **Resolution** — "does this request have an identity?" becomes a
//!    protocol read ([`SessionClient::resolve`])
//! 2. **Establishment** — logging a name in mints a token and binds it
//!    ([`SessionClient::establish`])
//! 3. **Release** — logging out unbinds it ([`SessionClient::release`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Cookie Layer (beside)  ← carries the token between browser and front-end
//!     ↕
//! Client Layer (this crate)  ← carries the token between front-end and store
//!     ↕
//! Protocol Layer (below)  ← request shapes, sentinel, ack
//! ```
//!
//! The client holds no session state of its own. The token lives in the
//! per-request cookie and nowhere else, so one `SessionClient` is shared
//! freely across every concurrent request a front-end handles.

mod client;
mod error;
mod token;

pub use client::{DEFAULT_TIMEOUT, SessionClient};
pub use error::ClientError;
pub use token::{TokenGenerator, UuidTokenGenerator};
