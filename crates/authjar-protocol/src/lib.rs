//! Wire protocol for the Authjar session store.
//!
//! This crate defines the "language" that the store service and its
//! clients speak:
//!
//! - **Types** ([`ReadParams`], [`WriteParams`], [`WriteAction`]) — the
//!   request shapes that travel as query parameters.
//! - **Codec** ([`ReadReply`], [`write_ack`]) — how replies are rendered
//!   to and parsed from the plain-text bodies.
//! - **Errors** ([`ProtocolError`]) — what counts as a usage error versus
//!   a normal miss.
//!
//! # The contract
//!
//! Two logical operations, each idempotent and stateless per call:
//!
//! | Method/Path | Params | Success body | Failure |
//! |---|---|---|---|
//! | GET/POST `/get` | `cookie=<token>` | name, or `No Name!` if unbound | 400 if `cookie` missing/empty |
//! | GET/POST `/set` | `cookie=<token>`, `name=<name>` | `cookie set` | 400 if `cookie` missing/empty |
//! | anything else | — | 404 | — |
//!
//! An unknown token on a read is NOT an error — it's a normal miss,
//! answered with HTTP 200 and the sentinel body. Only a missing or empty
//! `cookie` parameter is a usage error (bad-request class). On a write,
//! an empty or absent `name` means "unbind" — the write operation doubles
//! as both "set" and "clear".
//!
//! # Security
//!
//! The protocol is intentionally unauthenticated: any party that can
//! reach the store's network address can bind or unbind any token. That
//! is a known limitation of the design, not a goal — deploy the store on
//! a private interface (the server defaults to loopback) and treat the
//! caller's token as trusted.

mod codec;
mod error;
mod types;

pub use codec::{NO_NAME, ReadReply, WRITE_ACK, write_ack};
pub use error::ProtocolError;
pub use types::{READ_PATH, ReadParams, WRITE_PATH, WriteAction, WriteParams};
