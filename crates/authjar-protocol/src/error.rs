//! Error types for the protocol layer.
//!
//! Each crate in Authjar defines its own error enum. A `ProtocolError`
//! always means the *contract* was broken — a malformed request or a
//! reply outside the table in the crate docs — never a store miss, which
//! is a successful reply carrying the sentinel.

/// Errors that can occur at the protocol level.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The required `cookie` parameter is missing or empty.
    ///
    /// This is the bad-request class: the server answers HTTP 400 with
    /// this message as the body and logs it at error level. It is the
    /// caller's bug, distinct from looking up a token that simply isn't
    /// bound.
    #[error("missing required `cookie` parameter")]
    MissingToken,

    /// The store answered with a status outside the contract.
    ///
    /// Seen from the client side: anything other than 200 on a read or a
    /// write is not something the protocol defines a meaning for, so the
    /// caller treats it as a failed call (and, for reads, fails open to
    /// "not identified").
    #[error("store replied outside the contract: HTTP {0}")]
    UnexpectedStatus(u16),
}
