//! Request types for the store protocol.
//!
//! Both operations carry their input as URL query parameters (the
//! original deployment used HTML-form-compatible encoding, and query
//! strings keep the service curl-able). The structs here derive both
//! `Serialize` and `Deserialize` so the same definition drives the
//! server's extractor and the client's request builder — the two sides
//! cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Path of the read operation.
pub const READ_PATH: &str = "/get";

/// Path of the write operation.
pub const WRITE_PATH: &str = "/set";

// ---------------------------------------------------------------------------
// ReadParams
// ---------------------------------------------------------------------------

/// Parameters of a read: "what name is bound to this token?"
///
/// The token parameter is named `cookie` on the wire — historical, from
/// the days when the browser cookie value was pasted straight into the
/// query string. The field is an `Option` so that a request with the
/// parameter missing still deserializes; whether that is acceptable is
/// decided by [`token`](Self::token), not by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadParams {
    /// The session token to look up.
    pub cookie: Option<String>,
}

impl ReadParams {
    /// Builds the parameters for looking up `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            cookie: Some(token.into()),
        }
    }

    /// Returns the token, or a usage error if the parameter is missing
    /// or empty.
    ///
    /// # Errors
    /// [`ProtocolError::MissingToken`] — the bad-request class. Note the
    /// asymmetry: an *unknown* token is a normal miss, but an *absent*
    /// token means the caller didn't hold up its end of the contract.
    pub fn token(&self) -> Result<&str, ProtocolError> {
        match self.cookie.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ProtocolError::MissingToken),
        }
    }
}

// ---------------------------------------------------------------------------
// WriteParams
// ---------------------------------------------------------------------------

/// Parameters of a write: "bind this token to this name" — or, when the
/// name is empty or absent, "unbind this token".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteParams {
    /// The session token to bind or unbind.
    pub cookie: Option<String>,

    /// The display name. Empty or absent selects the unbind path.
    pub name: Option<String>,
}

impl WriteParams {
    /// Builds the parameters for binding `token` to `name`.
    pub fn bind(token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cookie: Some(token.into()),
            name: Some(name.into()),
        }
    }

    /// Builds the parameters for unbinding `token`.
    ///
    /// `name` is omitted entirely; the wire treats an absent name and an
    /// empty `name=` identically.
    pub fn unbind(token: impl Into<String>) -> Self {
        Self {
            cookie: Some(token.into()),
            name: None,
        }
    }

    /// Returns the token, or a usage error if the parameter is missing
    /// or empty. Same contract as [`ReadParams::token`].
    pub fn token(&self) -> Result<&str, ProtocolError> {
        match self.cookie.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ProtocolError::MissingToken),
        }
    }

    /// Decides which sub-case of the write this is.
    ///
    /// A non-empty name selects [`WriteAction::Bind`]; an empty or absent
    /// name selects [`WriteAction::Unbind`]. This is the logout path —
    /// the protocol has no separate delete operation.
    pub fn action(&self) -> WriteAction {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => WriteAction::Bind {
                name: name.to_string(),
            },
            _ => WriteAction::Unbind,
        }
    }
}

// ---------------------------------------------------------------------------
// WriteAction
// ---------------------------------------------------------------------------

/// The two sub-cases of a write, made explicit.
///
/// On the wire the distinction is "is `name` non-empty?", which is easy
/// to get subtly wrong in handler code. Decoding it into an enum once
/// (in [`WriteParams::action`]) means the handler pattern-matches instead
/// of re-testing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteAction {
    /// Insert or overwrite the token → name binding.
    Bind {
        /// The (non-empty) display name to bind.
        name: String,
    },

    /// Delete the binding entirely. Idempotent.
    Unbind,
}

// =========================================================================
// Tests
// =========================================================================
