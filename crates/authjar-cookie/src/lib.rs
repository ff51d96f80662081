//! Session cookie handling for Authjar front-ends.
//!
//! The browser's only involvement in the whole subsystem is carrying one
//! opaque token in one cookie. This crate owns that cookie:
//!
//! 1. **Extraction** — pulling the token out of a request's `Cookie`
//!    headers ([`extract_token`])
//! 2. **Validation** — checking it against the session the front-end
//!    expects, with a three-way outcome ([`validate`], [`Validation`])
//! 3. **Issuance/expiry** — producing the `Set-Cookie` values that hand a
//!    token to the browser or take it back ([`issue`], [`expire`])
//!
//! # The client-side state machine
//!
//! ```text
//! UNAUTHENTICATED ──(establish succeeds, cookie issued)──→ AUTHENTICATED
//!        ↑                                                      │
//!        ├──────────────(release, cookie expired)───────────────┤
//!        └─────(cookie absent/mismatched on a later request)────┘
//! ```
//!
//! There is no other terminal state. A process restart on either side
//! resets every session to UNAUTHENTICATED — the visitor logs in again.
//!
//! The functions here work on plain [`http`] header types, so they slot
//! into any tower/axum-style front-end without pulling in a framework.

mod emit;
mod error;
mod extract;

pub use emit::{expire, issue};
pub use error::CookieError;
pub use extract::{Validation, extract_token, validate};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "user";
